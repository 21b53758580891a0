//! Market record schema for Market Config.
//!
//! A market record is the raw, authored shape of one regional site variant:
//! identity fields plus four presentation sections, each of which is either
//! authored on the record (`custom`) or delegated to another market's same
//! section (`reuse`). This crate owns that shape and its structural
//! validation; following reuse references is the job of `market-core`.

pub mod error;
pub mod ids;
pub mod record;
pub mod sample;
pub mod schema;
pub mod section;

pub use error::{Error, Result};
pub use ids::{MarketCode, MarketId};
pub use record::MarketRecord;
pub use sample::{SampleIds, sample_markets};
pub use schema::{
    BannerSpec, ButtonSpec, FooterSource, FooterSpec, HeaderSpec, HowItWorksSpec, Link,
    StepExtension, StepSpec,
};
pub use section::{SectionKind, SectionMode};
