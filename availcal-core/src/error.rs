//! Error types for availcal.

use thiserror::Error;

/// Errors that can occur in availcal operations.
#[derive(Error, Debug)]
pub enum AvailCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AvailCalError {
    fn from(e: serde_json::Error) -> Self {
        AvailCalError::Serialization(e.to_string())
    }
}

/// Result type alias for availcal operations.
pub type AvailCalResult<T> = Result<T, AvailCalError>;
