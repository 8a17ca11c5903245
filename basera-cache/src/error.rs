//! Error types for cache operations.

use thiserror::Error;

/// Errors that can occur in the on-device cache.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("database error: {0}")]
    Database(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;
