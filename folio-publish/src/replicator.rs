//! Fan-out of publish requests over targets and locales.

use crate::engine::TargetStore;
use crate::error::PublishResult;
use crate::instruction::{PublishInstruction, PublishMode, PublishReport};
use chrono::Utc;
use folio_model::ContentNode;
use folio_store::NodeStore;
use folio_types::NodeId;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Where content is published from and to.
#[derive(Clone, Default)]
pub struct ReplicatorConfig {
    /// The authoring store.
    pub source: Option<Arc<dyn NodeStore>>,
    /// Publication stores, published in this order.
    pub targets: Vec<TargetStore>,
}

impl fmt::Debug for ReplicatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplicatorConfig")
            .field("source", &self.source.as_ref().map(|s| s.name().to_string()))
            .field("targets", &self.targets)
            .finish()
    }
}

/// How far a replicator has been configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplicatorState {
    /// No source store yet. Publishing does nothing.
    Unconfigured,
    /// Source set, no targets. Publishing produces no instructions.
    SourceSet,
    Ready,
}

/// The result of one target's batch.
#[derive(Debug)]
pub struct TargetOutcome {
    pub target: String,
    /// Instructions sent in the batch.
    pub instructions: usize,
    pub result: PublishResult<PublishReport>,
}

/// What a publish request did, per target.
#[derive(Debug, Default)]
pub struct ReplicationSummary {
    pub targets: Vec<TargetOutcome>,
}

impl ReplicationSummary {
    /// Total number of instructions submitted across all targets.
    pub fn instructions(&self) -> usize {
        self.targets.iter().map(|t| t.instructions).sum()
    }

    /// True if nothing was submitted.
    pub fn is_noop(&self) -> bool {
        self.targets.is_empty()
    }

    /// Targets whose engine reported an error.
    pub fn failures(&self) -> impl Iterator<Item = &TargetOutcome> {
        self.targets.iter().filter(|t| t.result.is_err())
    }

    /// Counts summed over the targets that succeeded.
    pub fn report(&self) -> PublishReport {
        let mut total = PublishReport::default();
        for report in self.targets.iter().filter_map(|t| t.result.as_ref().ok()) {
            total.merge(report);
        }
        total
    }
}

/// Publishes nodes from a source store into every target store and locale.
///
/// Configuration sits behind a read/write lock; publishing works on a
/// snapshot, so reconfiguring never waits for a running publish.
#[derive(Debug, Default)]
pub struct Replicator {
    config: RwLock<ReplicatorConfig>,
}

impl Replicator {
    /// Creates an unconfigured replicator.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ReplicatorConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// Sets the source store. Only the first call has an effect; returns
    /// whether this call set it.
    pub async fn set_source(&self, source: Arc<dyn NodeStore>) -> bool {
        let mut config = self.config.write().await;
        if let Some(existing) = &config.source {
            debug!(
                "Replicator source already set to {}, ignoring {}",
                existing.name(),
                source.name()
            );
            return false;
        }
        info!("Replicator source set to {}", source.name());
        config.source = Some(source);
        true
    }

    /// Replaces the target list.
    pub async fn set_targets(&self, targets: Vec<TargetStore>) {
        let mut config = self.config.write().await;
        info!("Replicator targets set to {} store(s)", targets.len());
        config.targets = targets;
    }

    pub async fn state(&self) -> ReplicatorState {
        let config = self.config.read().await;
        match (&config.source, config.targets.is_empty()) {
            (None, _) => ReplicatorState::Unconfigured,
            (Some(_), true) => ReplicatorState::SourceSet,
            (Some(_), false) => ReplicatorState::Ready,
        }
    }

    /// Returns a copy of the current configuration.
    pub async fn config(&self) -> ReplicatorConfig {
        self.config.read().await.clone()
    }

    /// Publishes `node` into every target, once per source locale.
    ///
    /// Each target receives a single batch and is awaited before the next
    /// one starts. Engine errors are logged and recorded in the summary.
    pub async fn publish(&self, node: &ContentNode, mode: PublishMode) -> ReplicationSummary {
        let config = self.config().await;
        let Some(source) = config.source else {
            debug!("Replicator has no source; not publishing {}", node.path);
            return ReplicationSummary::default();
        };

        let locales = source.locales();
        let timestamp = Utc::now();
        let mut summary = ReplicationSummary::default();

        for target in &config.targets {
            let batch: Vec<PublishInstruction> = locales
                .iter()
                .map(|locale| PublishInstruction {
                    source: source.clone(),
                    target: target.store.clone(),
                    mode,
                    locale: locale.clone(),
                    timestamp,
                    deep: mode == PublishMode::Subtree,
                    compare_revisions: true,
                    root: node.clone(),
                })
                .collect();
            let instructions = batch.len();

            let result = target.engine.publish(batch).await;
            match &result {
                Ok(report) => info!(
                    "Published {} to {} in {} locale(s): {} published, {} skipped",
                    node.path,
                    target.name(),
                    instructions,
                    report.published,
                    report.skipped
                ),
                Err(e) => warn!("Publishing {} to {} failed: {}", node.path, target.name(), e),
            }

            summary.targets.push(TargetOutcome {
                target: target.name().to_string(),
                instructions,
                result,
            });
        }

        summary
    }

    /// Looks `id` up in the source store's default locale and publishes it.
    /// Does nothing when the replicator has no source or the node is not found.
    pub async fn publish_by_id(&self, id: &NodeId, mode: PublishMode) -> ReplicationSummary {
        let source = self.config.read().await.source.clone();
        let node = source.and_then(|source| {
            let locale = source.default_locale()?;
            source.get_node(id, &locale)
        });
        match node {
            Some(node) => self.publish(&node, mode).await,
            None => {
                debug!("Node {} not found in source; nothing to publish", id);
                ReplicationSummary::default()
            }
        }
    }
}
