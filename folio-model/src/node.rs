use crate::Field;
use folio_types::{Locale, NodeId, RevisionStamp};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One language version of a node in the content tree.
///
/// Nodes are owned by a store. Resolvers only ever borrow them; the
/// replicator clones them between stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentNode {
    pub id: NodeId,
    pub parent_id: Option<NodeId>,
    pub name: String,
    /// Full path from the tree root, e.g. `/sitecore/content/Home`.
    pub path: String,
    pub template_id: NodeId,
    pub template_name: String,
    pub locale: Locale,
    pub revision: RevisionStamp,
    pub fields: BTreeMap<String, Field>,
}

impl ContentNode {
    /// Creates a root-level node. The name is the last segment of `path`.
    pub fn new(
        path: impl Into<String>,
        template_id: NodeId,
        template_name: impl Into<String>,
        locale: Locale,
    ) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or_default().to_string();
        Self {
            id: NodeId::new(),
            parent_id: None,
            name,
            path,
            template_id,
            template_name: template_name.into(),
            locale,
            revision: RevisionStamp::INITIAL,
            fields: BTreeMap::new(),
        }
    }

    /// Creates a node below `parent`, in the parent's locale and template.
    pub fn child_of(parent: &ContentNode, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: NodeId::new(),
            parent_id: Some(parent.id),
            path: format!("{}/{}", parent.path.trim_end_matches('/'), name),
            name,
            template_id: parent.template_id,
            template_name: parent.template_name.clone(),
            locale: parent.locale.clone(),
            revision: RevisionStamp::INITIAL,
            fields: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: NodeId) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn with_template(mut self, template_id: NodeId, template_name: impl Into<String>) -> Self {
        self.template_id = template_id;
        self.template_name = template_name.into();
        self
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, field: Field) -> Self {
        self.fields.insert(key.into(), field);
        self
    }

    pub fn set_field(&mut self, key: impl Into<String>, field: Field) {
        self.fields.insert(key.into(), field);
    }

    /// Looks up a field by key.
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    /// Returns a copy of this node as the version for another locale.
    /// Field values are copied as-is; the revision restarts.
    #[must_use]
    pub fn in_locale(&self, locale: Locale) -> Self {
        Self {
            locale,
            revision: RevisionStamp::INITIAL,
            ..self.clone()
        }
    }

    /// Marks the node as edited by advancing its revision.
    pub fn touch(&mut self) {
        self.revision = self.revision.tick();
    }
}
