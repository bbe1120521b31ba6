//! URL generation collaborators.
//!
//! How a node maps to a public URL, and how a media node maps to a servable
//! URL, is site policy. The resolver only needs the two traits below; the
//! default implementations derive URLs from node paths.

use crate::ResolverConfig;
use folio_model::ContentNode;

/// Whether item URLs carry the locale as their first path segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LanguageEmbedding {
    #[default]
    Never,
    Always,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlOptions {
    pub always_include_server_url: bool,
    pub language_embedding: LanguageEmbedding,
}

impl UrlOptions {
    /// Server-prefixed, never language-qualified.
    pub fn absolute() -> Self {
        Self {
            always_include_server_url: true,
            language_embedding: LanguageEmbedding::Never,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaUrlOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Root-relative (`/~/media/...`) instead of relative (`~/media/...`).
    pub absolute_path: bool,
}

impl MediaUrlOptions {
    /// A resized rendition.
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            absolute_path: false,
        }
    }
}

/// Builds the canonical URL of a content node.
pub trait ItemUrlBuilder: Send + Sync {
    fn item_url(&self, node: &ContentNode, options: &UrlOptions) -> String;
}

/// Builds the servable URL of a media node.
pub trait MediaUrlBuilder: Send + Sync {
    fn media_url(&self, node: &ContentNode, options: &MediaUrlOptions) -> String;
}

/// Item URLs from node paths: `[server][/locale]<path below site root>`.
#[derive(Debug, Clone)]
pub struct PathUrlBuilder {
    server_url: String,
    site_root: Option<String>,
}

impl PathUrlBuilder {
    pub fn new(server_url: impl Into<String>, site_root: Option<String>) -> Self {
        Self {
            server_url: server_url.into(),
            site_root,
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.server_url.clone(), config.site_root.clone())
    }
}

impl ItemUrlBuilder for PathUrlBuilder {
    fn item_url(&self, node: &ContentNode, options: &UrlOptions) -> String {
        let relative = match &self.site_root {
            Some(root) => strip_prefix_ignore_case(&node.path, root),
            None => &node.path,
        };
        let mut url = String::new();
        if options.always_include_server_url {
            url.push_str(self.server_url.trim_end_matches('/'));
        }
        if options.language_embedding == LanguageEmbedding::Always {
            url.push('/');
            url.push_str(node.locale.as_str());
        }
        if !relative.starts_with('/') {
            url.push('/');
        }
        url.push_str(relative);
        url
    }
}

/// Media URLs from media library paths:
/// `~/media/Images/Logo.ashx?w=100&h=50`.
#[derive(Debug, Clone)]
pub struct MediaLibraryUrlBuilder {
    prefix: String,
    media_root: String,
    extension: String,
}

impl MediaLibraryUrlBuilder {
    pub fn new(
        prefix: impl Into<String>,
        media_root: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            media_root: media_root.into(),
            extension: extension.into(),
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(
            config.media_prefix.clone(),
            config.media_root.clone(),
            config.media_extension.clone(),
        )
    }
}

impl MediaUrlBuilder for MediaLibraryUrlBuilder {
    fn media_url(&self, node: &ContentNode, options: &MediaUrlOptions) -> String {
        let relative = strip_prefix_ignore_case(&node.path, &self.media_root);
        let prefix = self.prefix.trim_end_matches('/');
        let mut url = if options.absolute_path {
            format!("/{}", prefix.trim_start_matches('/'))
        } else {
            prefix.to_string()
        };
        if !relative.starts_with('/') {
            url.push('/');
        }
        url.push_str(relative);
        if !self.extension.is_empty() {
            url.push('.');
            url.push_str(&self.extension);
        }

        let mut query = Vec::new();
        if let Some(w) = options.width {
            query.push(format!("w={w}"));
        }
        if let Some(h) = options.height {
            query.push(format!("h={h}"));
        }
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }
        url
    }
}

fn strip_prefix_ignore_case<'a>(path: &'a str, prefix: &str) -> &'a str {
    let prefix = prefix.trim_end_matches('/');
    match (path.get(..prefix.len()), path.get(prefix.len()..)) {
        (Some(head), Some(rest))
            if !prefix.is_empty()
                && head.eq_ignore_ascii_case(prefix)
                && (rest.is_empty() || rest.starts_with('/')) =>
        {
            rest
        }
        _ => path,
    }
}
