//! Content store interface for Folio.
//!
//! Resolvers and the replicator never talk to a storage engine directly:
//! they go through [`NodeStore`], a read-only view of one content database
//! (an authoring store, or a publication store). [`MemoryStore`] is the
//! in-process implementation used for tests, previews and as a publish
//! target in tooling.
//!
//! # Architecture
//!
//! - A store holds one version of a node per locale
//! - Paths are unique per store and matched case-insensitively
//! - Children are returned in the order they were first stored

mod error;
mod memory;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;

use folio_model::ContentNode;
use folio_types::{Locale, NodeId, RevisionStamp};

/// Read access to a content store.
///
/// Lookups return owned nodes; implementations are free to keep nodes
/// behind locks or fetch them remotely.
pub trait NodeStore: Send + Sync {
    /// The store's name (`master`, `web`, …).
    fn name(&self) -> &str;

    /// Locales this store holds content in, in configured order.
    fn locales(&self) -> Vec<Locale>;

    /// The locale used when a caller does not name one.
    fn default_locale(&self) -> Option<Locale> {
        self.locales().into_iter().next()
    }

    /// Fetches the version of a node in the given locale.
    fn get_node(&self, id: &NodeId, locale: &Locale) -> Option<ContentNode>;

    /// Fetches a node version by its full path.
    fn get_node_by_path(&self, path: &str, locale: &Locale) -> Option<ContentNode>;

    /// Lists the direct children of a node that have a version in `locale`.
    fn children(&self, id: &NodeId, locale: &Locale) -> Vec<ContentNode>;

    /// Returns the revision of a node version, if the store has it.
    fn revision(&self, id: &NodeId, locale: &Locale) -> Option<RevisionStamp> {
        self.get_node(id, locale).map(|node| node.revision)
    }
}
