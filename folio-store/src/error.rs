//! Error types for the store layer.

use folio_types::{Locale, NodeId};
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when writing to a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store is not configured for this locale.
    #[error("store {store} has no locale {locale}")]
    UnknownLocale { store: String, locale: Locale },

    /// Node version not found.
    #[error("node {id} not found in locale {locale}")]
    NotFound { id: NodeId, locale: Locale },

    /// Another node already occupies the path.
    #[error("path {path} is already used by node {existing}")]
    PathConflict { path: String, existing: NodeId },
}
