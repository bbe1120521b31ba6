//! In-memory publish engine.

use crate::engine::{PublishEngine, TargetStore};
use crate::error::PublishResult;
use crate::instruction::{PublishInstruction, PublishReport};
use async_trait::async_trait;
use folio_store::{MemoryStore, NodeStore};
use std::sync::Arc;
use tracing::{debug, warn};

/// Publishes into a [`MemoryStore`].
///
/// Node versions are copied unchanged, revision included, so a second
/// publish of unedited content is skipped.
pub struct StorePublisher {
    target: Arc<MemoryStore>,
}

impl StorePublisher {
    pub fn new(target: Arc<MemoryStore>) -> Self {
        Self { target }
    }

    /// Builds a replicator target backed by `store` and published by a
    /// `StorePublisher`.
    pub fn target(store: Arc<MemoryStore>) -> TargetStore {
        TargetStore::new(store.clone(), Arc::new(Self::new(store)))
    }

    fn publish_one(&self, instruction: &PublishInstruction) -> PublishResult<PublishReport> {
        let mut report = PublishReport::default();
        let locale = &instruction.locale;
        let mut pending = vec![instruction.root.id];

        while let Some(id) = pending.pop() {
            let Some(node) = instruction.source.get_node(&id, locale) else {
                debug!("Node {} has no {} version in {}", id, locale, instruction.source.name());
                report.missing += 1;
                continue;
            };

            if instruction.deep {
                let children = instruction.source.children(&id, locale);
                pending.extend(children.iter().rev().map(|child| child.id));
            }

            let published_revision = self.target.revision(&id, locale);
            if instruction.compare_revisions && published_revision == Some(node.revision) {
                debug!("Skipping {} [{}]: revision {} already published", node.path, locale, node.revision);
                report.skipped += 1;
                continue;
            }

            if let Some(published) = published_revision.filter(|r| r.is_newer_than(&node.revision)) {
                warn!(
                    "Overwriting {} [{}] in {}: published revision {} is newer than source revision {}",
                    node.path,
                    locale,
                    self.target.name(),
                    published,
                    node.revision
                );
            }

            self.target.put(node)?;
            report.published += 1;
        }

        Ok(report)
    }
}

#[async_trait]
impl PublishEngine for StorePublisher {
    async fn publish(&self, batch: Vec<PublishInstruction>) -> PublishResult<PublishReport> {
        let mut report = PublishReport::default();
        for instruction in &batch {
            report.merge(&self.publish_one(instruction)?);
        }
        debug!(
            "Published batch of {} into {}: {} published, {} skipped, {} missing",
            batch.len(),
            self.target.name(),
            report.published,
            report.skipped,
            report.missing
        );
        Ok(report)
    }
}
