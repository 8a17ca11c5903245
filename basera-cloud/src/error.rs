//! Hosted backend error types.

use thiserror::Error;

/// Result type for backend operations.
pub type CloudResult<T> = Result<T, CloudError>;

/// Errors that can occur while talking to the hosted backend.
#[derive(Debug, Error)]
pub enum CloudError {
    #[error("backend is not configured")]
    Unconfigured,

    #[error("network error: {0}")]
    Network(String),

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
