//! In-process market store

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use market_meta::{MarketCode, MarketId, MarketRecord};

use crate::store::{MarketRecordStore, MarketSummary, summarize};
use crate::{Error, Result};

#[derive(Debug, Default)]
struct Records {
    by_id: HashMap<MarketId, MarketRecord>,
    id_by_code: HashMap<MarketCode, MarketId>,
}

/// Market store held entirely in memory.
///
/// Records can be replaced while resolvers hold the store, which makes the
/// next resolution see the change, the same as with a live content store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Records>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records, rejecting duplicate ids or codes.
    pub fn with_records(records: impl IntoIterator<Item = MarketRecord>) -> Result<Self> {
        let store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    /// Add a new record.
    pub fn insert(&self, record: MarketRecord) -> Result<()> {
        record.validate()?;
        let mut records = self.write()?;
        if records.by_id.contains_key(&record.id) {
            return Err(Error::Duplicate {
                field: "id",
                value: record.id.to_string(),
            });
        }
        if records.id_by_code.contains_key(&record.code) {
            return Err(Error::Duplicate {
                field: "code",
                value: record.code.to_string(),
            });
        }
        records
            .id_by_code
            .insert(record.code.clone(), record.id.clone());
        records.by_id.insert(record.id.clone(), record);
        Ok(())
    }

    /// Insert or replace the record with the same id.
    pub fn upsert(&self, record: MarketRecord) -> Result<()> {
        record.validate()?;
        let mut records = self.write()?;
        if let Some(owner) = records.id_by_code.get(&record.code) {
            if owner != &record.id {
                return Err(Error::Duplicate {
                    field: "code",
                    value: record.code.to_string(),
                });
            }
        }
        if let Some(previous) = records.by_id.remove(&record.id) {
            records.id_by_code.remove(&previous.code);
        }
        records
            .id_by_code
            .insert(record.code.clone(), record.id.clone());
        records.by_id.insert(record.id.clone(), record);
        Ok(())
    }

    pub fn remove(&self, id: &MarketId) -> Result<Option<MarketRecord>> {
        let mut records = self.write()?;
        let removed = records.by_id.remove(id);
        if let Some(record) = &removed {
            records.id_by_code.remove(&record.code);
        }
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.read().map(|r| r.by_id.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>> {
        self.records
            .read()
            .map_err(|_| Error::unavailable("memory store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>> {
        self.records
            .write()
            .map_err(|_| Error::unavailable("memory store lock poisoned"))
    }
}

#[async_trait]
impl MarketRecordStore for MemoryStore {
    async fn find_by_code(&self, code: &MarketCode) -> Result<Option<MarketRecord>> {
        let records = self.read()?;
        Ok(records
            .id_by_code
            .get(code)
            .and_then(|id| records.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: &MarketId) -> Result<Option<MarketRecord>> {
        Ok(self.read()?.by_id.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<MarketSummary>> {
        let records: Vec<MarketRecord> = self.read()?.by_id.values().cloned().collect();
        Ok(summarize(&records))
    }

    async fn all(&self) -> Result<Vec<MarketRecord>> {
        let mut records: Vec<MarketRecord> = self.read()?.by_id.values().cloned().collect();
        records.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(records)
    }
}
