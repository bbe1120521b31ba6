use chrono::{DateTime, Utc};
use folio_model::ContentNode;
use folio_store::NodeStore;
use folio_types::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// How much of the tree below a node is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishMode {
    /// Only the node itself.
    SingleItem,
    /// The node and all of its descendants.
    Subtree,
}

/// One unit of replication work: a node, one locale, one target.
#[derive(Clone)]
pub struct PublishInstruction {
    pub source: Arc<dyn NodeStore>,
    pub target: Arc<dyn NodeStore>,
    pub mode: PublishMode,
    pub locale: Locale,
    pub timestamp: DateTime<Utc>,
    /// Publish descendants as well.
    pub deep: bool,
    /// Skip node versions whose target revision already matches the source.
    pub compare_revisions: bool,
    pub root: ContentNode,
}

impl fmt::Debug for PublishInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishInstruction")
            .field("source", &self.source.name())
            .field("target", &self.target.name())
            .field("mode", &self.mode)
            .field("locale", &self.locale)
            .field("timestamp", &self.timestamp)
            .field("deep", &self.deep)
            .field("compare_revisions", &self.compare_revisions)
            .field("root", &self.root.path)
            .finish()
    }
}

/// Counts of node versions handled by one engine call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishReport {
    /// Versions written to the target.
    pub published: usize,
    /// Versions left alone because the target revision matched.
    pub skipped: usize,
    /// Versions the source did not have.
    pub missing: usize,
}

impl PublishReport {
    /// Adds another report's counts to this one.
    pub fn merge(&mut self, other: &PublishReport) {
        self.published += other.published;
        self.skipped += other.skipped;
        self.missing += other.missing;
    }

    pub fn total(&self) -> usize {
        self.published + self.skipped + self.missing
    }
}
