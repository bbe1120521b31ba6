use crate::link::{parse_attributes, LinkValue};
use chrono::{DateTime, Utc};
use folio_types::NodeId;
use serde::{Deserialize, Serialize};

/// Compact ISO format date fields are stored in (`20240131T093000Z`).
pub const ISO_DATE_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Separator between ids in stored multi-reference fields.
const MULTILIST_SEPARATOR: char = '|';

/// A stored field: the raw text exactly as persisted, plus its declared shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    raw: String,
    shape: FieldShape,
}

/// The structural kind of a field, fixed by the node's template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldShape {
    /// Plain text; also the shape of numeric fields.
    Text,
    /// Checked iff the raw value is `1` (or `true`).
    Checkbox,
    /// A date-time in compact ISO form; empty means unset.
    Date,
    /// Internal, external or media link.
    Link(LinkValue),
    /// A single node reference.
    Reference { target: Option<NodeId> },
    /// An ordered list of node ids, duplicates allowed.
    Multilist { ids: Vec<String> },
    /// A media-library image or file.
    Image { media: Option<NodeId> },
}

impl Field {
    /// Builds a field from its stored text and the schema's field type name.
    ///
    /// Type names are matched case-insensitively; unknown types are plain text.
    #[must_use]
    pub fn from_stored(type_name: &str, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let shape = match type_name.trim().to_ascii_lowercase().as_str() {
            "checkbox" => FieldShape::Checkbox,
            "date" | "datetime" => FieldShape::Date,
            "general link" | "general link with search" | "link" => {
                FieldShape::Link(LinkValue::parse(&raw))
            }
            "droplink" | "droptree" | "grouped droplink" | "reference" => FieldShape::Reference {
                target: NodeId::parse(&raw).ok(),
            },
            "multilist" | "multilist with search" | "treelist" | "treelistex" | "checklist" => {
                FieldShape::Multilist {
                    ids: split_ids(&raw),
                }
            }
            "image" | "file" => FieldShape::Image {
                media: parse_attributes(&raw)
                    .get("mediaid")
                    .and_then(|v| NodeId::parse(v).ok()),
            },
            _ => FieldShape::Text,
        };
        Self { raw, shape }
    }

    /// A plain text field.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            raw: value.into(),
            shape: FieldShape::Text,
        }
    }

    /// A checkbox, stored as `1` when checked and empty otherwise.
    #[must_use]
    pub fn checkbox(checked: bool) -> Self {
        Self {
            raw: if checked { "1" } else { "" }.to_string(),
            shape: FieldShape::Checkbox,
        }
    }

    /// A date field in compact ISO form.
    #[must_use]
    pub fn date(value: DateTime<Utc>) -> Self {
        Self::date_raw(value.format(ISO_DATE_FORMAT).to_string())
    }

    /// A date field holding arbitrary stored text (possibly empty or malformed).
    #[must_use]
    pub fn date_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            shape: FieldShape::Date,
        }
    }

    /// A link field whose stored text is the markup of `link`.
    #[must_use]
    pub fn link(link: LinkValue) -> Self {
        Self {
            raw: link.to_markup(),
            shape: FieldShape::Link(link),
        }
    }

    #[must_use]
    pub fn link_internal(target: NodeId, url: impl Into<String>) -> Self {
        Self::link(LinkValue::internal(target, url))
    }

    #[must_use]
    pub fn link_external(url: impl Into<String>) -> Self {
        Self::link(LinkValue::external(url))
    }

    #[must_use]
    pub fn link_media(target: NodeId) -> Self {
        Self::link(LinkValue::media(target))
    }

    /// A single reference, stored as the target's id.
    #[must_use]
    pub fn reference(target: NodeId) -> Self {
        Self {
            raw: target.to_string(),
            shape: FieldShape::Reference {
                target: Some(target),
            },
        }
    }

    /// Stores `ids` in order, `|`-separated. Ids are not validated.
    #[must_use]
    pub fn multilist<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        Self {
            raw: ids.join(&MULTILIST_SEPARATOR.to_string()),
            shape: FieldShape::Multilist { ids },
        }
    }

    /// An image field pointing at a media node.
    #[must_use]
    pub fn image(media: NodeId) -> Self {
        Self {
            raw: format!("<image mediaid=\"{media}\" />"),
            shape: FieldShape::Image { media: Some(media) },
        }
    }

    /// The stored text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn shape(&self) -> &FieldShape {
        &self.shape
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the link payload for link-shaped fields.
    pub fn as_link(&self) -> Option<&LinkValue> {
        match &self.shape {
            FieldShape::Link(link) => Some(link),
            _ => None,
        }
    }

    /// Splits the raw text the way stored multi-reference values are split.
    pub fn raw_ids(&self) -> Vec<String> {
        split_ids(&self.raw)
    }
}

fn split_ids(raw: &str) -> Vec<String> {
    raw.split(MULTILIST_SEPARATOR)
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
