//! Shared test utilities for the market-config workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`builder`] - [`MarketBuilder`] for terse market records
//! - [`dir`] - [`TestMarketsDir`], a temporary directory of record files

pub mod builder;
pub mod dir;

pub use builder::{MarketBuilder, seed_markets, steps};
pub use dir::TestMarketsDir;
