//! Multi-reference and single-reference expansion.

use crate::FieldResolver;
use folio_model::{ContentNode, FieldShape};
use folio_store::NodeStore;
use folio_types::{Locale, NodeId};

impl FieldResolver {
    /// The raw ids of a multi-reference field, in stored order with
    /// duplicates kept. Other shapes are split like stored multilist text.
    pub fn referenced_ids(&self, node: &ContentNode, key: &str) -> Vec<String> {
        match self.field(node, key) {
            Some(field) => match field.shape() {
                FieldShape::Multilist { ids } => ids.clone(),
                _ => field.raw_ids(),
            },
            None => Vec::new(),
        }
    }

    /// The nodes referenced by a multi-reference field, in stored order.
    ///
    /// Ids are resolved against `store` (the resolver's store if `None`) in
    /// `locale` (the node's locale if `None`). Ids that do not parse or do
    /// not resolve are dropped.
    pub fn referenced_nodes(
        &self,
        node: &ContentNode,
        key: &str,
        store: Option<&dyn NodeStore>,
        locale: Option<&Locale>,
    ) -> Vec<ContentNode> {
        let store = store.unwrap_or(self.store.as_ref());
        let locale = locale.unwrap_or(&node.locale);
        self.referenced_ids(node, key)
            .iter()
            .filter_map(|raw| NodeId::parse(raw).ok())
            .filter_map(|id| store.get_node(&id, locale))
            .collect()
    }

    /// The node a reference field points at.
    ///
    /// Fields of other shapes are read as an id, or as a path when the text
    /// starts with `/`.
    pub fn reference_target(&self, node: &ContentNode, key: &str) -> Option<ContentNode> {
        let field = self.field(node, key)?;
        match field.shape() {
            FieldShape::Reference { target } => self.resolve_target(node, *target),
            _ => {
                let raw = field.raw().trim();
                if raw.starts_with('/') {
                    self.store.get_node_by_path(raw, &node.locale)
                } else {
                    self.resolve_target(node, NodeId::parse(raw).ok())
                }
            }
        }
    }

    /// Reads `target_key` on the node a reference field points at.
    ///
    /// Returns `""` unless the target exists and its field is non-empty.
    pub fn reference_target_field(&self, node: &ContentNode, key: &str, target_key: &str) -> String {
        match self.reference_target(node, key) {
            Some(target) if self.has_non_empty_field(&target, target_key) => {
                self.value_or_empty(&target, target_key)
            }
            _ => String::new(),
        }
    }
}
