use thiserror::Error;

use crate::domain::MonthKeyError;

/// Error type that captures common store and persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid month key: {0}")]
    MonthKey(#[from] MonthKeyError),
}
