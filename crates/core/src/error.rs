//! Error types for the recur-scan system.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the recur-scan system.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A transaction date that is not an ISO `YYYY-MM-DD` string.
    #[error("Invalid date {value:?}: {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },

    /// Features requested against an empty reference collection.
    #[error("Reference collection is empty")]
    EmptyCollection,

    /// The reference collection does not contain the target transaction.
    #[error("Transaction {id} is not part of the reference collection")]
    TargetNotFound { id: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create an invalid date error.
    pub fn invalid_date(value: impl Into<String>, source: chrono::ParseError) -> Self {
        Error::InvalidDate {
            value: value.into(),
            source,
        }
    }

    /// Create a target-not-found error.
    pub fn target_not_found(id: impl ToString) -> Self {
        Error::TargetNotFound { id: id.to_string() }
    }
}
