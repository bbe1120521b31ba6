//! Shared stores and engines for publish tests.

#![allow(dead_code)]

use async_trait::async_trait;
use folio_model::{ContentNode, Field};
use folio_publish::{
    PublishEngine, PublishError, PublishInstruction, PublishReport, PublishResult, TargetStore,
};
use folio_store::MemoryStore;
use folio_types::{Locale, NodeId};
use std::sync::{Arc, Mutex};

pub fn locale(name: &str) -> Locale {
    Locale::new(name).unwrap()
}

pub fn locales() -> Vec<Locale> {
    vec![locale("en"), locale("de-DE"), locale("pl-PL")]
}

/// A store holding `/sitecore/content/Home` with two children, in every
/// locale of [`locales`].
pub struct Tree {
    pub store: Arc<MemoryStore>,
    pub home: ContentNode,
    pub about: ContentNode,
    pub contact: ContentNode,
}

pub fn master_tree() -> Tree {
    let store = Arc::new(MemoryStore::new("master", locales()));
    let home = ContentNode::new("/sitecore/content/Home", NodeId::new(), "Page", locale("en"))
        .with_field("Title", Field::text("Home"));
    let mut about = ContentNode::child_of(&home, "About");
    about.set_field("Title", Field::text("About us"));
    let contact = ContentNode::child_of(&home, "Contact");

    for node in [&home, &about, &contact] {
        for l in locales() {
            let mut version = node.in_locale(l);
            version.touch();
            store.put(version).unwrap();
        }
    }

    Tree {
        store,
        home,
        about,
        contact,
    }
}

/// Records every batch it is given.
#[derive(Default)]
pub struct RecordingEngine {
    batches: Mutex<Vec<Vec<PublishInstruction>>>,
}

impl RecordingEngine {
    pub fn batches(&self) -> Vec<Vec<PublishInstruction>> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl PublishEngine for RecordingEngine {
    async fn publish(&self, batch: Vec<PublishInstruction>) -> PublishResult<PublishReport> {
        let published = batch.len();
        self.batches.lock().unwrap().push(batch);
        Ok(PublishReport {
            published,
            ..PublishReport::default()
        })
    }
}

/// Fails every batch.
pub struct FailingEngine;

#[async_trait]
impl PublishEngine for FailingEngine {
    async fn publish(&self, _batch: Vec<PublishInstruction>) -> PublishResult<PublishReport> {
        Err(PublishError::Engine("target offline".to_string()))
    }
}

/// An empty target store with a recording engine.
pub fn recording_target(name: &str) -> (TargetStore, Arc<RecordingEngine>) {
    let engine = Arc::new(RecordingEngine::default());
    let store = Arc::new(MemoryStore::new(name, locales()));
    (TargetStore::new(store, engine.clone()), engine)
}
