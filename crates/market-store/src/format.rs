//! On-disk record formats

use std::fmt;
use std::path::Path;

use market_meta::MarketRecord;

use crate::{Error, Result};

/// Serialization format of a record file, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordFormat {
    #[default]
    Toml,
    Json,
    Yaml,
}

impl RecordFormat {
    /// Detect the format from a file extension.
    ///
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        match extension.to_lowercase().as_str() {
            "toml" => Ok(RecordFormat::Toml),
            "json" => Ok(RecordFormat::Json),
            "yaml" | "yml" => Ok(RecordFormat::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    /// Extension written for new record files.
    pub fn extension(&self) -> &'static str {
        match self {
            RecordFormat::Toml => "toml",
            RecordFormat::Json => "json",
            RecordFormat::Yaml => "yaml",
        }
    }

    pub fn decode(&self, path: &Path, content: &str) -> Result<MarketRecord> {
        let parsed = match self {
            RecordFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            RecordFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            RecordFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::Parse {
            path: path.to_path_buf(),
            format: self.to_string(),
            message,
        })
    }

    pub fn encode(&self, record: &MarketRecord) -> Result<String> {
        let encoded = match self {
            RecordFormat::Toml => toml::to_string_pretty(record).map_err(|e| e.to_string()),
            RecordFormat::Json => serde_json::to_string_pretty(record).map_err(|e| e.to_string()),
            RecordFormat::Yaml => serde_yaml::to_string(record).map_err(|e| e.to_string()),
        };
        encoded.map_err(|message| Error::Serialize {
            id: record.id.to_string(),
            format: self.to_string(),
            message,
        })
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordFormat::Toml => write!(f, "TOML"),
            RecordFormat::Json => write!(f, "JSON"),
            RecordFormat::Yaml => write!(f, "YAML"),
        }
    }
}
