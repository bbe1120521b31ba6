//! Publish replication for Folio.
//!
//! Publishing copies a content node from the authoring (source) store into
//! every publication (target) store, once per source locale. The
//! [`Replicator`] owns the source/target configuration and fans a publish
//! request out into [`PublishInstruction`]s, one batch per target. Each
//! target's [`PublishEngine`] does the actual copying.
//!
//! # Architecture
//!
//! - Targets are published sequentially, in configured order
//! - A failing target is logged and recorded; the remaining targets still run
//! - Unconfigured replicators do nothing
//!
//! [`StorePublisher`] is an engine writing into a
//! [`MemoryStore`](folio_store::MemoryStore).

mod engine;
mod error;
mod instruction;
mod publisher;
mod replicator;

pub use engine::{PublishEngine, TargetStore};
pub use error::{PublishError, PublishResult};
pub use instruction::{PublishInstruction, PublishMode, PublishReport};
pub use publisher::StorePublisher;
pub use replicator::{
    ReplicationSummary, Replicator, ReplicatorConfig, ReplicatorState, TargetOutcome,
};
