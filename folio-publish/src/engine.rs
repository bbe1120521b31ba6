use crate::error::PublishResult;
use crate::instruction::{PublishInstruction, PublishReport};
use async_trait::async_trait;
use folio_store::NodeStore;
use std::fmt;
use std::sync::Arc;

/// Performs the publishing of a batch of instructions into one target.
///
/// The replicator awaits each batch before moving on to the next target.
#[async_trait]
pub trait PublishEngine: Send + Sync {
    async fn publish(&self, batch: Vec<PublishInstruction>) -> PublishResult<PublishReport>;
}

/// A publication store paired with the engine that publishes into it.
#[derive(Clone)]
pub struct TargetStore {
    pub store: Arc<dyn NodeStore>,
    pub engine: Arc<dyn PublishEngine>,
}

impl TargetStore {
    pub fn new(store: Arc<dyn NodeStore>, engine: Arc<dyn PublishEngine>) -> Self {
        Self { store, engine }
    }

    pub fn name(&self) -> &str {
        self.store.name()
    }
}

impl fmt::Debug for TargetStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetStore")
            .field("store", &self.store.name())
            .finish_non_exhaustive()
    }
}
