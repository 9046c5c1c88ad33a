//! Error types for Stockbook core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for Stockbook operations.
pub type Result<T> = std::result::Result<T, StockError>;

/// Core error type for Stockbook operations.
#[derive(Debug, Error)]
pub enum StockError {
    /// Persisted payload could not be parsed into the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for StockError {
    fn from(err: std::io::Error) -> Self {
        StockError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for StockError {
    fn from(err: serde_json::Error) -> Self {
        StockError::Parse(err.to_string())
    }
}
