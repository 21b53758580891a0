//! Market configuration resolution
//!
//! [`ConfigResolver`] turns a raw [`MarketRecord`] into a
//! [`ResolvedMarketConfig`] by resolving each of the four sections against
//! a [`MarketRecordStore`].

mod banner;
mod chain;
mod footer;
mod header;
mod how_it_works;

pub use how_it_works::apply_step_extensions;

use market_meta::{MarketCode, MarketRecord};
use market_store::MarketRecordStore;

use crate::resolved::{
    ResolvedBanner, ResolvedFooter, ResolvedHeader, ResolvedHowItWorks, ResolvedMarketConfig,
};
use crate::settings::ResolverSettings;
use crate::{Error, Result};

use banner::BannerRules;
use chain::resolve_section;
use footer::FooterRules;
use header::HeaderRules;
use how_it_works::HowItWorksRules;

/// Resolves market records into reference-free configurations.
///
/// The resolver holds no state between calls: every resolution reads the
/// store afresh, so upstream edits show up on the next call.
pub struct ConfigResolver<S> {
    store: S,
    settings: ResolverSettings,
}

impl<S: MarketRecordStore> ConfigResolver<S> {
    /// Create a resolver with default settings.
    pub fn new(store: S) -> Self {
        Self::with_settings(store, ResolverSettings::default())
    }

    pub fn with_settings(store: S, settings: ResolverSettings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Look a market up by its public code and resolve it.
    ///
    /// The code is trimmed and uppercased first. A code that cannot name
    /// any market is reported the same way as an unknown one.
    pub async fn resolve_code(&self, code: &str) -> Result<ResolvedMarketConfig> {
        let not_found = || Error::MarketNotFound {
            code: code.trim().to_uppercase(),
        };
        let Ok(code) = MarketCode::parse(code) else {
            return Err(not_found());
        };
        let record = self
            .store
            .find_by_code(&code)
            .await?
            .ok_or_else(not_found)?;
        self.resolve(&record).await
    }

    /// Resolve every section of `record`.
    pub async fn resolve(&self, record: &MarketRecord) -> Result<ResolvedMarketConfig> {
        tracing::info!(market = %record.code, id = %record.id, "Resolving market");

        let (header, footer, banner, how_it_works) = if self.settings.concurrent_sections {
            tokio::try_join!(
                self.resolve_header(record),
                self.resolve_footer(record),
                self.resolve_banner(record),
                self.resolve_how_it_works(record),
            )?
        } else {
            (
                self.resolve_header(record).await?,
                self.resolve_footer(record).await?,
                self.resolve_banner(record).await?,
                self.resolve_how_it_works(record).await?,
            )
        };

        Ok(ResolvedMarketConfig {
            name: record.name.clone(),
            code: record.code.clone(),
            header,
            footer,
            banner,
            how_it_works,
        })
    }

    pub async fn resolve_header(&self, record: &MarketRecord) -> Result<ResolvedHeader> {
        resolve_section::<HeaderRules, _>(&self.store, record, self.settings.max_depth).await
    }

    pub async fn resolve_footer(&self, record: &MarketRecord) -> Result<ResolvedFooter> {
        resolve_section::<FooterRules, _>(&self.store, record, self.settings.max_depth).await
    }

    pub async fn resolve_banner(&self, record: &MarketRecord) -> Result<ResolvedBanner> {
        resolve_section::<BannerRules, _>(&self.store, record, self.settings.max_depth).await
    }

    pub async fn resolve_how_it_works(&self, record: &MarketRecord) -> Result<ResolvedHowItWorks> {
        resolve_section::<HowItWorksRules, _>(&self.store, record, self.settings.max_depth).await
    }
}
