//! Directory-backed market store
//!
//! Each market lives in its own file inside one directory:
//!
//! ```text
//! markets/
//!   my.toml
//!   sg.toml
//!   au.json
//! ```
//!
//! Files are read on every lookup, so an edit to an upstream market is seen
//! by every market that reuses it on the next resolution.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use market_meta::{MarketCode, MarketId, MarketRecord};

use crate::format::RecordFormat;
use crate::io::{StoreLock, replace_file};
use crate::store::{MarketRecordStore, MarketSummary, summarize};
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
    format: RecordFormat,
}

impl DirectoryStore {
    /// Open a store over `root`. New records are written as TOML.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            format: RecordFormat::default(),
        }
    }

    /// Use `format` for records written by [`DirectoryStore::put`].
    pub fn with_format(mut self, format: RecordFormat) -> Self {
        self.format = format;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a record is written to: `<root>/<code>.<ext>`, code lowercased.
    pub fn path_for(&self, record: &MarketRecord) -> PathBuf {
        self.root.join(format!(
            "{}.{}",
            record.code.as_str().to_lowercase(),
            self.format.extension()
        ))
    }

    /// Write a record, replacing any file at its path.
    ///
    /// Other files holding a record with the same id are removed, so a
    /// record whose code or format changed is not shadowed by its old file.
    pub fn put(&self, record: &MarketRecord) -> Result<PathBuf> {
        record.validate()?;
        let path = self.path_for(record);
        let content = self.format.encode(record)?;

        let _lock = StoreLock::acquire(&self.root)?;
        replace_file(&path, content.as_bytes())?;
        for stale in self.files_with_id(&record.id, &path)? {
            fs::remove_file(&stale).map_err(|e| Error::io(&stale, e))?;
            tracing::debug!(id = %record.id, path = %stale.display(), "Removed stale market record");
        }

        tracing::debug!(id = %record.id, path = %path.display(), "Wrote market record");
        Ok(path)
    }

    /// Record files other than `keep` whose record has `id`. Unreadable
    /// files are not considered.
    fn files_with_id(&self, id: &MarketId, keep: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.root).map_err(|e| Error::io(&self.root, e))?;
        let mut matches = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path == keep || is_hidden(&path) || !entry.file_type().is_ok_and(|t| t.is_file()) {
                continue;
            }
            let Ok(format) = RecordFormat::from_path(&path) else {
                continue;
            };
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            if format.decode(&path, &content).is_ok_and(|other| &other.id == id) {
                matches.push(path);
            }
        }
        Ok(matches)
    }

    /// Load every readable record, in file-name order.
    ///
    /// Files that fail to read or parse are skipped with a warning; a
    /// second record claiming an id or code already seen is skipped too.
    /// Only a missing or unreadable directory fails the scan.
    async fn scan(&self) -> Result<Vec<MarketRecord>> {
        let mut entries = tokio::fs::read_dir(&self.root).await.map_err(|e| {
            Error::unavailable(format!("cannot read {}: {}", self.root.display(), e))
        })?;

        let mut paths = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::io(&self.root, e))?
        {
            let path = entry.path();
            let is_file = entry
                .file_type()
                .await
                .map_err(|e| Error::io(&path, e))?
                .is_file();
            if is_file && !is_hidden(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut records: Vec<MarketRecord> = Vec::with_capacity(paths.len());
        for path in paths {
            let format = match RecordFormat::from_path(&path) {
                Ok(format) => format,
                Err(_) => continue,
            };
            match self.load(&path, format).await {
                Ok(record) => {
                    if records
                        .iter()
                        .any(|r| r.id == record.id || r.code == record.code)
                    {
                        tracing::warn!(
                            path = %path.display(),
                            id = %record.id,
                            code = %record.code,
                            "Skipping market record with duplicate id or code"
                        );
                        continue;
                    }
                    records.push(record);
                }
                Err(e) => {
                    tracing::warn!("Failed to load {}: {}", path.display(), e);
                }
            }
        }

        Ok(records)
    }

    async fn load(&self, path: &Path, format: RecordFormat) -> Result<MarketRecord> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io(path, e))?;
        let record = format.decode(path, &content)?;
        record.validate()?;
        Ok(record)
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

#[async_trait]
impl MarketRecordStore for DirectoryStore {
    async fn find_by_code(&self, code: &MarketCode) -> Result<Option<MarketRecord>> {
        Ok(self.scan().await?.into_iter().find(|r| &r.code == code))
    }

    async fn find_by_id(&self, id: &MarketId) -> Result<Option<MarketRecord>> {
        Ok(self.scan().await?.into_iter().find(|r| &r.id == id))
    }

    async fn list(&self) -> Result<Vec<MarketSummary>> {
        Ok(summarize(&self.scan().await?))
    }

    async fn all(&self) -> Result<Vec<MarketRecord>> {
        self.scan().await
    }
}
