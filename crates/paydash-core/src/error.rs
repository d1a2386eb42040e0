//! Error types for paydash-core

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Dashboard data not loaded
    NotLoaded,
    /// Source fetch failed
    FetchFailed,
    /// Invalid payload format
    InvalidFormat,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::NotLoaded => write!(f, "NOT_LOADED"),
            ErrorCode::FetchFailed => write!(f, "FETCH_FAILED"),
            ErrorCode::InvalidFormat => write!(f, "INVALID_FORMAT"),
        }
    }
}

/// Core dashboard errors
#[derive(Error, Debug)]
pub enum CoreError {
    /// Derived views were requested before a successful load
    #[error("Transaction data not loaded")]
    NotLoaded,

    /// The source collaborator failed; not recovered inside the engine
    #[error("Failed to fetch transactions: {message}")]
    Fetch { message: String },

    /// The payload did not match the expected shape
    #[error("Invalid transactions payload: {message}")]
    InvalidFormat { message: String },
}

impl CoreError {
    /// Get the error code for API responses
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::NotLoaded => ErrorCode::NotLoaded,
            CoreError::Fetch { .. } => ErrorCode::FetchFailed,
            CoreError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        }
    }
}
