//! Core type definitions for Folio.
//!
//! This crate defines the small, storage-agnostic types shared by every
//! other Folio crate:
//! - Content node identifiers (UUID, rendered in braced upper-case form)
//! - Locales (language codes a store publishes content in)
//! - Revision stamps used to short-circuit publishing of unchanged nodes

mod ids;
mod locale;
mod revision;

pub use ids::NodeId;
pub use locale::Locale;
pub use revision::RevisionStamp;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing core types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid node id: {0}")]
    InvalidNodeId(#[from] uuid::Error),

    #[error("invalid locale: {0:?}")]
    InvalidLocale(String),
}
