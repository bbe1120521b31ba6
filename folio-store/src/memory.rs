//! In-memory content store.

use crate::error::{StoreError, StoreResult};
use crate::NodeStore;
use folio_model::ContentNode;
use folio_types::{Locale, NodeId};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

#[derive(Debug, Default)]
struct Inner {
    versions: HashMap<(NodeId, Locale), ContentNode>,
    /// Lower-cased path to node id. Locale versions of one node may sit at
    /// different paths; each path stays claimed while any version uses it.
    paths: HashMap<String, NodeId>,
    /// Child ids per parent, in first-stored order.
    children: HashMap<NodeId, Vec<NodeId>>,
}

impl Inner {
    /// Drops the path and parent link held by `old` unless `new` or another
    /// locale version of the same node still holds them.
    fn release(&mut self, old: &ContentNode, new: Option<&ContentNode>) {
        let old_path = old.path.to_lowercase();
        let (path_used, parent_used) = self
            .versions
            .values()
            .filter(|v| v.id == old.id && v.locale != old.locale)
            .chain(new)
            .fold((false, false), |(path, parent), v| {
                (
                    path || v.path.to_lowercase() == old_path,
                    parent || v.parent_id == old.parent_id,
                )
            });

        if !path_used {
            self.paths.remove(&old_path);
        }
        if let (false, Some(parent)) = (parent_used, old.parent_id) {
            if let Some(siblings) = self.children.get_mut(&parent) {
                siblings.retain(|child| *child != old.id);
            }
        }
    }
}

/// A content store kept entirely in memory.
///
/// Safe to share between threads; readers never block each other.
#[derive(Debug)]
pub struct MemoryStore {
    name: String,
    locales: Vec<Locale>,
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store holding content in `locales`.
    pub fn new(name: impl Into<String>, locales: Vec<Locale>) -> Self {
        Self {
            name: name.into(),
            locales,
            inner: RwLock::new(Inner::default()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores a node version, replacing any existing version for the same
    /// node and locale. The node's revision is kept as-is.
    pub fn put(&self, node: ContentNode) -> StoreResult<()> {
        if !self.locales.contains(&node.locale) {
            return Err(StoreError::UnknownLocale {
                store: self.name.clone(),
                locale: node.locale,
            });
        }

        let mut inner = self.write();
        let path_key = node.path.to_lowercase();
        match inner.paths.get(&path_key) {
            Some(existing) if *existing != node.id => {
                return Err(StoreError::PathConflict {
                    path: node.path,
                    existing: *existing,
                });
            }
            _ => {}
        }

        // A moved or renamed version gives up its old path and parent.
        if let Some(previous) = inner.versions.get(&(node.id, node.locale.clone())).cloned() {
            inner.release(&previous, Some(&node));
        }

        inner.paths.insert(path_key, node.id);
        if let Some(parent) = node.parent_id {
            let siblings = inner.children.entry(parent).or_default();
            if !siblings.contains(&node.id) {
                siblings.push(node.id);
            }
        }

        debug!(
            "Stored node {} ({}) in {} [{}] at revision {}",
            node.id, node.path, self.name, node.locale, node.revision
        );
        inner.versions.insert((node.id, node.locale.clone()), node);
        Ok(())
    }

    /// Removes one locale version of a node. Its path and parent link are
    /// released once no other version uses them.
    pub fn remove(&self, id: &NodeId, locale: &Locale) -> StoreResult<ContentNode> {
        let mut inner = self.write();
        let removed = inner
            .versions
            .remove(&(*id, locale.clone()))
            .ok_or_else(|| StoreError::NotFound {
                id: *id,
                locale: locale.clone(),
            })?;

        inner.release(&removed, None);

        debug!("Removed node {} from {} [{}]", id, self.name, locale);
        Ok(removed)
    }

    /// Returns true if the store holds a version of the node in `locale`.
    pub fn contains(&self, id: &NodeId, locale: &Locale) -> bool {
        self.read().versions.contains_key(&(*id, locale.clone()))
    }

    /// Number of stored node versions across all locales.
    pub fn len(&self) -> usize {
        self.read().versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().versions.is_empty()
    }
}

impl NodeStore for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn locales(&self) -> Vec<Locale> {
        self.locales.clone()
    }

    fn get_node(&self, id: &NodeId, locale: &Locale) -> Option<ContentNode> {
        self.read().versions.get(&(*id, locale.clone())).cloned()
    }

    fn get_node_by_path(&self, path: &str, locale: &Locale) -> Option<ContentNode> {
        let key = path.to_lowercase();
        let inner = self.read();
        let id = inner.paths.get(&key)?;
        inner
            .versions
            .get(&(*id, locale.clone()))
            .filter(|node| node.path.to_lowercase() == key)
            .cloned()
    }

    fn children(&self, id: &NodeId, locale: &Locale) -> Vec<ContentNode> {
        let inner = self.read();
        inner
            .children
            .get(id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|child| inner.versions.get(&(*child, locale.clone())))
                    .filter(|child| child.parent_id == Some(*id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
