//! Market configuration resolution
//!
//! Resolves a market's header, footer, banner and how-it-works sections by
//! following reuse references between markets and applying each market's
//! local overrides. Also provides static governance checks over a set of
//! markets and the response envelope used to hand results to consumers.

pub mod envelope;
pub mod error;
pub mod governance;
pub mod graph;
pub mod resolved;
pub mod resolver;
pub mod settings;

pub use envelope::{ApiResponse, MarketResponse, ResponseBody};
pub use error::{Error, Result};
pub use governance::{LintWarning, WarnLevel, has_errors, lint_markets};
pub use graph::ReuseGraph;
pub use resolved::{
    ResolvedBanner, ResolvedFooter, ResolvedHeader, ResolvedHowItWorks, ResolvedMarketConfig,
    ResolvedStep,
};
pub use resolver::{ConfigResolver, apply_step_extensions};
pub use settings::{DEFAULT_MAX_DEPTH, ResolverSettings, SettingsLoader};
