//! Common error types used across all observatory crates

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for pipeline operations.
///
/// Not-found lookups and wizard validation failures are deliberately NOT
/// errors: lookups return `Option` and validation returns an advisory
/// message value. This enum covers the genuinely failing paths.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ObservatoryError {
    #[error("Invalid draft: {message}")]
    InvalidDraft { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
        field: Option<String>,
    },

    #[error("Aggregation failed: {message}")]
    Aggregation { message: String },

    #[error("Network request failed: {message}")]
    Network { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, ObservatoryError>;

impl From<serde_json::Error> for ObservatoryError {
    fn from(err: serde_json::Error) -> Self {
        ObservatoryError::Parse {
            message: err.to_string(),
        }
    }
}
