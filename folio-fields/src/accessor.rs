//! Field presence and raw values.
//!
//! These are the only places a missing field is reported. Every other
//! resolver goes through [`FieldResolver::field`], so a lookup of an absent
//! key produces exactly one `MissingField` diagnostic per call.

use crate::diagnostics::Diagnostic;
use crate::FieldResolver;
use folio_model::{ContentNode, Field, FieldShape, LinkValue};

impl FieldResolver {
    /// Looks up a field, reporting its absence.
    pub fn field<'n>(&self, node: &'n ContentNode, key: &str) -> Option<&'n Field> {
        let field = node.field(key);
        if field.is_none() {
            self.emit(Diagnostic::missing_field(node, key));
        }
        field
    }

    /// True iff the node has a field named `key`.
    pub fn has_field(&self, node: &ContentNode, key: &str) -> bool {
        self.field(node, key).is_some()
    }

    /// True iff the node has a field named `key` with a non-empty raw value.
    pub fn has_non_empty_field(&self, node: &ContentNode, key: &str) -> bool {
        self.field(node, key).is_some_and(|f| !f.is_empty())
    }

    /// The raw value, or `default` when the field is missing.
    pub fn value(&self, node: &ContentNode, key: &str, default: &str) -> String {
        self.field(node, key)
            .map(Field::raw)
            .unwrap_or(default)
            .to_string()
    }

    /// The raw value, or `""` when the field is missing.
    pub fn value_or_empty(&self, node: &ContentNode, key: &str) -> String {
        self.value(node, key, "")
    }

    /// The raw value, or `default` when the field is missing or empty.
    pub fn value_or_default_if_empty(&self, node: &ContentNode, key: &str, default: &str) -> String {
        match self.field(node, key) {
            Some(f) if !f.is_empty() => f.raw().to_string(),
            _ => default.to_string(),
        }
    }

    /// The link payload of a link-shaped field.
    pub fn link_field<'n>(&self, node: &'n ContentNode, key: &str) -> Option<&'n LinkValue> {
        self.field(node, key).and_then(Field::as_link)
    }

    pub fn checkbox_field<'n>(&self, node: &'n ContentNode, key: &str) -> Option<&'n Field> {
        self.field_of_shape(node, key, |s| matches!(s, FieldShape::Checkbox))
    }

    pub fn date_field<'n>(&self, node: &'n ContentNode, key: &str) -> Option<&'n Field> {
        self.field_of_shape(node, key, |s| matches!(s, FieldShape::Date))
    }

    pub fn reference_field<'n>(&self, node: &'n ContentNode, key: &str) -> Option<&'n Field> {
        self.field_of_shape(node, key, |s| matches!(s, FieldShape::Reference { .. }))
    }

    pub fn image_field<'n>(&self, node: &'n ContentNode, key: &str) -> Option<&'n Field> {
        self.field_of_shape(node, key, |s| matches!(s, FieldShape::Image { .. }))
    }

    fn field_of_shape<'n>(
        &self,
        node: &'n ContentNode,
        key: &str,
        accepts: impl Fn(&FieldShape) -> bool,
    ) -> Option<&'n Field> {
        self.field(node, key).filter(|f| accepts(f.shape()))
    }
}
