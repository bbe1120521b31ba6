use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::urls::{ItemUrlBuilder, MediaLibraryUrlBuilder, MediaUrlBuilder, PathUrlBuilder};
use crate::ResolverConfig;
use folio_model::ContentNode;
use folio_store::NodeStore;
use folio_types::NodeId;
use std::sync::Arc;

/// Resolves fields of content nodes into typed values and URLs.
///
/// The resolver holds no per-call state; one instance can serve any number
/// of threads. Resolution methods live in [`accessor`](crate::accessor),
/// [`coercion`](crate::coercion), [`links`](crate::links) and
/// [`multilist`](crate::multilist).
pub struct FieldResolver {
    pub(crate) store: Arc<dyn NodeStore>,
    pub(crate) item_urls: Arc<dyn ItemUrlBuilder>,
    pub(crate) media_urls: Arc<dyn MediaUrlBuilder>,
    pub(crate) sink: Arc<dyn DiagnosticSink>,
    pub(crate) config: ResolverConfig,
}

impl FieldResolver {
    /// Creates a resolver over `store` with the default configuration.
    pub fn new(store: Arc<dyn NodeStore>) -> Self {
        Self::with_config(store, ResolverConfig::default())
    }

    /// Creates a resolver with URL builders derived from `config`.
    pub fn with_config(store: Arc<dyn NodeStore>, config: ResolverConfig) -> Self {
        Self {
            store,
            item_urls: Arc::new(PathUrlBuilder::from_config(&config)),
            media_urls: Arc::new(MediaLibraryUrlBuilder::from_config(&config)),
            sink: Arc::new(TracingSink),
            config,
        }
    }

    /// Replaces the diagnostic sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replaces the item URL builder.
    #[must_use]
    pub fn with_item_urls(mut self, builder: Arc<dyn ItemUrlBuilder>) -> Self {
        self.item_urls = builder;
        self
    }

    /// Replaces the media URL builder.
    #[must_use]
    pub fn with_media_urls(mut self, builder: Arc<dyn MediaUrlBuilder>) -> Self {
        self.media_urls = builder;
        self
    }

    /// The store targets and references are resolved against by default.
    pub fn store(&self) -> &Arc<dyn NodeStore> {
        &self.store
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub(crate) fn emit(&self, diagnostic: Diagnostic) {
        self.sink.emit(diagnostic);
    }

    /// Looks up a link or reference target in the node's own locale.
    pub(crate) fn resolve_target(
        &self,
        node: &ContentNode,
        target: Option<NodeId>,
    ) -> Option<ContentNode> {
        target.and_then(|id| self.store.get_node(&id, &node.locale))
    }
}
