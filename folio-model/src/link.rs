//! Link field payloads and their stored markup.
//!
//! Link fields are stored as a single element, e.g.
//! `<link linktype="internal" id="{...}" url="/Home/About" />`.

use folio_types::NodeId;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_][A-Za-z0-9_\-]*)\s*=\s*"([^"]*)""#).expect("valid attribute regex")
});

/// The kind of target a link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    /// Another node in the same content tree.
    Internal,
    /// A literal URL.
    External,
    /// A node in the media library (binary asset).
    Media,
    /// An anchor on the current page.
    Anchor,
    MailTo,
    JavaScript,
}

impl LinkType {
    /// Maps the stored `linktype` attribute. Unknown values are treated as external.
    pub fn from_stored(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "internal" => Self::Internal,
            "media" => Self::Media,
            "anchor" => Self::Anchor,
            "mailto" => Self::MailTo,
            "javascript" => Self::JavaScript,
            _ => Self::External,
        }
    }

    pub fn as_stored(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::External => "external",
            Self::Media => "media",
            Self::Anchor => "anchor",
            Self::MailTo => "mailto",
            Self::JavaScript => "javascript",
        }
    }
}

/// The structured value of a link field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkValue {
    pub link_type: LinkType,
    /// Target node (internal links) or media node (media links).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<NodeId>,
    /// Literal URL. For internal links this is the path captured at authoring time.
    #[serde(default)]
    pub url: String,
}

impl LinkValue {
    /// A link to another content node. `url` is the path captured when the
    /// link was authored.
    #[must_use]
    pub fn internal(target: NodeId, url: impl Into<String>) -> Self {
        Self {
            link_type: LinkType::Internal,
            target: Some(target),
            url: url.into(),
        }
    }

    /// A literal URL.
    #[must_use]
    pub fn external(url: impl Into<String>) -> Self {
        Self {
            link_type: LinkType::External,
            target: None,
            url: url.into(),
        }
    }

    /// A link to a media-library node, without a literal URL.
    #[must_use]
    pub fn media(target: NodeId) -> Self {
        Self {
            link_type: LinkType::Media,
            target: Some(target),
            url: String::new(),
        }
    }

    pub fn is_internal(&self) -> bool {
        self.link_type == LinkType::Internal
    }

    pub fn is_media(&self) -> bool {
        self.link_type == LinkType::Media
    }

    /// Parses stored link markup.
    ///
    /// Empty or non-markup text yields an external link whose URL is the
    /// trimmed text, so plain URLs stored in link fields keep working. An
    /// `id` attribute that is not a valid node id is ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if !trimmed.starts_with('<') {
            return Self::external(trimmed);
        }

        let attributes = parse_attributes(trimmed);
        let link_type = attributes
            .get("linktype")
            .map(|v| LinkType::from_stored(v))
            .unwrap_or(LinkType::External);
        let target = attributes
            .get("id")
            .and_then(|v| NodeId::parse(v).ok());
        let url = attributes.get("url").cloned().unwrap_or_default();

        Self {
            link_type,
            target,
            url,
        }
    }

    /// Renders the stored markup for this link.
    pub fn to_markup(&self) -> String {
        let mut markup = format!("<link linktype=\"{}\"", self.link_type.as_stored());
        if let Some(target) = self.target {
            markup.push_str(&format!(" id=\"{target}\""));
        }
        if !self.url.is_empty() {
            markup.push_str(&format!(" url=\"{}\"", escape_attribute(&self.url)));
        }
        markup.push_str(" />");
        markup
    }
}

/// Extracts `name="value"` pairs from a single markup element.
/// Names are lower-cased; values are entity-decoded.
pub(crate) fn parse_attributes(markup: &str) -> HashMap<String, String> {
    ATTRIBUTE_RE
        .captures_iter(markup)
        .map(|caps| (caps[1].to_ascii_lowercase(), unescape_attribute(&caps[2])))
        .collect()
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn unescape_attribute(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
