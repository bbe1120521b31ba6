//! Typed field resolution for Folio.
//!
//! Content fields are stored as text with a declared shape. This crate turns
//! them into the values callers actually want:
//!
//! - **Access**: presence checks and raw values with defaults ([`accessor`])
//! - **Coercion**: integers, locale-invariant doubles, checkboxes and dates,
//!   including activity windows ([`coercion`])
//! - **Links**: the single canonical URL of link, reference and media fields
//!   ([`links`])
//! - **Multilists**: ordered id lists expanded to nodes ([`multilist`])
//!
//! Every operation is total. Missing or malformed data degrades to a typed
//! default and a [`Diagnostic`] is sent to the resolver's [`DiagnosticSink`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use folio_fields::{CollectingSink, FieldResolver};
//! use folio_model::{ContentNode, Field};
//! use folio_store::MemoryStore;
//! use folio_types::{Locale, NodeId};
//!
//! let en = Locale::new("en").unwrap();
//! let store = Arc::new(MemoryStore::new("master", vec![en.clone()]));
//! let sink = Arc::new(CollectingSink::new());
//! let resolver = FieldResolver::new(store).with_sink(sink.clone());
//!
//! let node = ContentNode::new("/sitecore/content/Home", NodeId::new(), "Page", en)
//!     .with_field("Count", Field::text("12"));
//!
//! assert_eq!(resolver.integer(&node, "Count"), 12);
//! assert_eq!(resolver.integer(&node, "Missing"), -1);
//! assert_eq!(sink.len(), 1);
//! ```

pub mod accessor;
pub mod coercion;
mod config;
mod diagnostics;
pub mod links;
pub mod multilist;
mod number;
mod resolver;
mod temporal;
mod urls;

pub use coercion::Coerced;
pub use config::ResolverConfig;
pub use diagnostics::{
    CallbackSink, CollectingSink, Diagnostic, DiagnosticKind, DiagnosticLevel, DiagnosticSink,
    NullSink, TracingSink, ValueKind,
};
pub use number::NumberFormat;
pub use resolver::FieldResolver;
pub use temporal::{epoch_min, parse_temporal};
pub use urls::{
    ItemUrlBuilder, LanguageEmbedding, MediaLibraryUrlBuilder, MediaUrlBuilder, MediaUrlOptions,
    PathUrlBuilder, UrlOptions,
};
