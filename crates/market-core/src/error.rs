//! Error types for market-core

use std::path::PathBuf;

use market_meta::{MarketId, SectionKind};

/// Result type for market-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving market configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No market has the requested code
    #[error("Market not found: {code}")]
    MarketNotFound { code: String },

    /// Reuse references loop back onto a market already in the chain
    #[error("Reuse cycle in {section} section: {}", join_chain(.chain))]
    CycleDetected {
        section: SectionKind,
        chain: Vec<MarketId>,
    },

    /// Reuse chain is longer than the configured bound
    #[error("Reuse chain for {section} section of '{origin}' exceeds {limit} hops")]
    DepthExceeded {
        section: SectionKind,
        origin: MarketId,
        limit: usize,
    },

    /// Settings file parsed but holds unusable values
    #[error("Invalid settings at {path}: {message}")]
    InvalidSettings { path: PathBuf, message: String },

    #[error("Failed to read settings at {path}: {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Transparent wrappers for underlying crate errors
    /// The record store failed
    #[error(transparent)]
    Store(#[from] market_store::Error),

    /// Record schema error from market-meta
    #[error(transparent)]
    Meta(#[from] market_meta::Error),
}

impl Error {
    /// True when the failure came from the record store rather than from
    /// the data it returned.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Error::Store(_))
    }
}

fn join_chain(chain: &[MarketId]) -> String {
    chain
        .iter()
        .map(MarketId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}
