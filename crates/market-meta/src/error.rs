//! Error types for market-meta

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid market code '{code}': {reason}")]
    InvalidCode { code: String, reason: String },

    #[error("Invalid market record '{id}': {message}")]
    InvalidRecord { id: String, message: String },

    #[error("Unknown section: {name}")]
    UnknownSection { name: String },
}
