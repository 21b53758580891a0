//! [`TestMarketsDir`]: a temporary directory of market record files.

use std::fs;
use std::path::{Path, PathBuf};

use market_meta::MarketRecord;
use tempfile::TempDir;

/// Temporary directory laid out the way a directory store expects.
pub struct TestMarketsDir {
    temp_dir: TempDir,
}

impl Default for TestMarketsDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestMarketsDir {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// A directory pre-filled with `records` as JSON files.
    pub fn with_records(records: &[MarketRecord]) -> Self {
        let dir = Self::new();
        for record in records {
            dir.write_record(record);
        }
        dir
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `record` to `<code>.json`, lowercased.
    ///
    /// # Panics
    /// Panics if serialization or the write fails.
    pub fn write_record(&self, record: &MarketRecord) -> PathBuf {
        let content = serde_json::to_string_pretty(record)
            .unwrap_or_else(|e| panic!("write_record: failed to serialize {}: {e}", record.id));
        self.write_raw(
            &format!("{}.json", record.code.as_str().to_lowercase()),
            &content,
        )
    }

    /// Write arbitrary file content, relative to the directory root.
    ///
    /// # Panics
    /// Panics if the write fails.
    pub fn write_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("write_raw: failed to create {}: {e}", parent.display()));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("write_raw: failed to write {}: {e}", path.display()));
        path
    }
}
