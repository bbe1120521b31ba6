//! Content node model for Folio.
//!
//! Defines the read view every resolver and the replicator work on:
//! - [`ContentNode`]: a node in the content tree (id, path, template, locale, fields)
//! - [`Field`]: a stored raw value plus its declared [`FieldShape`]
//! - [`LinkValue`] / [`LinkType`]: the structured payload of link fields
//! - [`naming`]: helpers for turning display text into valid node names
//!
//! Shapes are fixed when a field is built (by the schema, through
//! [`Field::from_stored`] or a typed constructor) and never change afterwards.

mod field;
mod link;
pub mod naming;
mod node;

pub use field::{Field, FieldShape, ISO_DATE_FORMAT};
pub use link::{LinkType, LinkValue};
pub use node::ContentNode;
