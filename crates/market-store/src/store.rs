//! The MarketRecordStore trait and related types

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use market_meta::{MarketCode, MarketId, MarketRecord};
use serde::Serialize;

use crate::Result;

/// Maximum number of markets returned by [`MarketRecordStore::list`].
pub const LIST_LIMIT: usize = 100;

/// Listing entry for a market.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    pub id: MarketId,
    pub name: String,
    pub code: MarketCode,
    pub is_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&MarketRecord> for MarketSummary {
    fn from(record: &MarketRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            code: record.code.clone(),
            is_default: record.is_default,
            updated_at: record.updated_at,
        }
    }
}

/// Read access to market records.
///
/// Ids and codes are unique, so both lookups return at most one record.
/// Any `Err` means the store itself failed; an absent record is `Ok(None)`.
#[async_trait]
pub trait MarketRecordStore: Send + Sync {
    async fn find_by_code(&self, code: &MarketCode) -> Result<Option<MarketRecord>>;

    async fn find_by_id(&self, id: &MarketId) -> Result<Option<MarketRecord>>;

    /// Newest-created first, at most [`LIST_LIMIT`] entries.
    async fn list(&self) -> Result<Vec<MarketSummary>>;

    /// Every record in the store, for whole-store checks.
    async fn all(&self) -> Result<Vec<MarketRecord>>;
}

#[async_trait]
impl<T: MarketRecordStore + ?Sized> MarketRecordStore for Arc<T> {
    async fn find_by_code(&self, code: &MarketCode) -> Result<Option<MarketRecord>> {
        (**self).find_by_code(code).await
    }

    async fn find_by_id(&self, id: &MarketId) -> Result<Option<MarketRecord>> {
        (**self).find_by_id(id).await
    }

    async fn list(&self) -> Result<Vec<MarketSummary>> {
        (**self).list().await
    }

    async fn all(&self) -> Result<Vec<MarketRecord>> {
        (**self).all().await
    }
}

/// Sort records for listing and cap the result.
///
/// Records without a creation time sort after dated ones; ties fall back to
/// the market code so listings are deterministic.
pub(crate) fn summarize(records: &[MarketRecord]) -> Vec<MarketSummary> {
    let mut sorted: Vec<&MarketRecord> = records.iter().collect();
    sorted.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.code.cmp(&b.code))
    });
    sorted
        .into_iter()
        .take(LIST_LIMIT)
        .map(MarketSummary::from)
        .collect()
}
