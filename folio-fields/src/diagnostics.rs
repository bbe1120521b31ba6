//! Diagnostic records emitted while resolving fields.
//!
//! Diagnostics are observability only: nothing in the resolver depends on
//! whether they are delivered. Sinks must tolerate concurrent emission.

use folio_model::ContentNode;
use folio_types::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Mutex, PoisonError};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticLevel {
    Info,
    Warning,
}

/// The type a field value failed to parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Integer,
    Double,
    DateTime,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Integer => "Integer",
            Self::Double => "Double",
            Self::DateTime => "DateTime",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The node's template has no field with the requested key.
    MissingField,
    /// The field exists but its text does not parse.
    Malformed { expected: ValueKind, raw: String },
}

/// One diagnostic record, carrying enough node context to find the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub kind: DiagnosticKind,
    pub message: String,
    pub key: String,
    pub node_id: NodeId,
    pub path: String,
    pub template_id: NodeId,
    pub template_name: String,
}

impl Diagnostic {
    pub(crate) fn missing_field(node: &ContentNode, key: &str) -> Self {
        let message = format!(
            "There is no field '{key}' in node {} ({}) based on template {} ({})",
            node.id, node.path, node.template_id, node.template_name
        );
        Self::new(node, key, DiagnosticKind::MissingField, message)
    }

    pub(crate) fn malformed(node: &ContentNode, key: &str, expected: ValueKind, raw: &str) -> Self {
        let message = format!(
            "Could not parse field {key} as {expected} on node {} ({}) based on template {} ({})",
            node.id, node.path, node.template_id, node.template_name
        );
        Self::new(
            node,
            key,
            DiagnosticKind::Malformed {
                expected,
                raw: raw.to_string(),
            },
            message,
        )
    }

    fn new(node: &ContentNode, key: &str, kind: DiagnosticKind, message: String) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            kind,
            message,
            key: key.to_string(),
            node_id: node.id,
            path: node.path.clone(),
            template_id: node.template_id,
            template_name: node.template_name.clone(),
        }
    }
}

/// Receives diagnostics from a resolver.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic.level {
            DiagnosticLevel::Warning => warn!(
                key = %diagnostic.key,
                node_id = %diagnostic.node_id,
                path = %diagnostic.path,
                template = %diagnostic.template_name,
                "{}",
                diagnostic.message
            ),
            DiagnosticLevel::Info => info!(
                key = %diagnostic.key,
                node_id = %diagnostic.node_id,
                "{}",
                diagnostic.message
            ),
        }
    }
}

/// Drops every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _diagnostic: Diagnostic) {}
}

/// Keeps diagnostics in arrival order until they are taken.
#[derive(Debug, Default)]
pub struct CollectingSink {
    records: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the records collected so far.
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns the records collected so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.records.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

/// Adapts a closure (for example one pushing into a channel) into a sink.
pub struct CallbackSink<F>(pub F);

impl<F> DiagnosticSink for CallbackSink<F>
where
    F: Fn(Diagnostic) + Send + Sync,
{
    fn emit(&self, diagnostic: Diagnostic) {
        (self.0)(diagnostic)
    }
}
