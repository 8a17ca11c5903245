//! Storage pipeline error types.

use thiserror::Error;

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in the storage pipeline.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cache error: {0}")]
    Cache(#[from] basera_cache::CacheError),

    #[error("backend error: {0}")]
    Cloud(#[from] basera_cloud::CloudError),

    #[error("model error: {0}")]
    Model(#[from] basera_model::Error),

    #[error("invalid snapshot: {0}")]
    Validation(String),

    #[error("storage task failed: {0}")]
    Task(String),
}
