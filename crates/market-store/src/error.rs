//! Error types for market-store

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The store cannot answer lookups at all.
    #[error("Market store unavailable: {message}")]
    Unavailable { message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} record at {path}: {message}")]
    Parse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize record '{id}' as {format}: {message}")]
    Serialize {
        id: String,
        format: String,
        message: String,
    },

    #[error("Unsupported record format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Duplicate market {field} '{value}'")]
    Duplicate { field: &'static str, value: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error(transparent)]
    Meta(#[from] market_meta::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
