//! Market record stores for Market Config.
//!
//! The resolver only needs two lookups from its content store: one record by
//! unique code and one record by id. [`MarketRecordStore`] captures that
//! contract; [`MemoryStore`] and [`DirectoryStore`] are the two backends
//! shipped with the workspace.

pub mod directory;
pub mod error;
pub mod format;
pub mod io;
pub mod memory;
pub mod store;

pub use directory::DirectoryStore;
pub use error::{Error, Result};
pub use format::RecordFormat;
pub use memory::MemoryStore;
pub use store::{LIST_LIMIT, MarketRecordStore, MarketSummary};
