//! Command implementations for market-cli

pub mod check;
pub mod list;
pub mod resolve;
pub mod seed;

pub use check::run_check;
pub use list::run_list;
pub use resolve::run_resolve;
pub use seed::run_seed;

use std::path::Path;

use market_core::{ResolverSettings, SettingsLoader};

use crate::error::Result;

/// Load resolver settings for the workspace at `root`.
pub(crate) fn load_settings(root: &Path) -> Result<ResolverSettings> {
    let settings = SettingsLoader::new(root).load()?;
    tracing::debug!(?settings, "Resolver settings");
    Ok(settings)
}
