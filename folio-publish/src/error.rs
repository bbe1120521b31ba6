//! Error types for publishing.

use folio_store::StoreError;
use thiserror::Error;

/// Result type for publish operations.
pub type PublishResult<T> = Result<T, PublishError>;

/// Errors a publish engine can report for a batch.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Writing to the target store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Engine-specific failure.
    #[error("publish engine error: {0}")]
    Engine(String),
}
