//! URL resolution for link, reference and media fields.
//!
//! Four entry points exist because callers care about different subsets of
//! field shapes and different escaping rules:
//!
//! | method | shapes | result |
//! |---|---|---|
//! | [`url`](FieldResolver::url) | link | absolute item URL, media URL or literal |
//! | [`link_url`](FieldResolver::link_url) | link, reference | item URL or literal |
//! | [`image_url`](FieldResolver::image_url) | image, media link | media URL, optionally sized |
//! | [`media_file_url`](FieldResolver::media_file_url) | reference, link, image | media URL or literal |

use crate::urls::{MediaUrlOptions, UrlOptions};
use crate::FieldResolver;
use folio_model::{ContentNode, FieldShape, LinkType};

fn escape_spaces(url: String, replace_spaces: bool) -> String {
    if replace_spaces {
        url.replace(' ', "%20")
    } else {
        url
    }
}

fn ensure_leading_slash(url: String) -> String {
    if url.starts_with('/') {
        url
    } else {
        format!("/{url}")
    }
}

impl FieldResolver {
    /// The canonical URL of a link field.
    ///
    /// Precedence: internal target, media target (root-relative), any other
    /// resolvable target, then the literal URL. Item URLs include the server
    /// and never embed the language. Missing, empty and non-link fields
    /// yield `""`.
    pub fn url(&self, node: &ContentNode, key: &str) -> String {
        let Some(field) = self.field(node, key) else {
            return String::new();
        };
        if field.is_empty() {
            return String::new();
        }

        let link = match field.shape() {
            FieldShape::Link(link) => link,
            FieldShape::Text
            | FieldShape::Checkbox
            | FieldShape::Date
            | FieldShape::Reference { .. }
            | FieldShape::Multilist { .. }
            | FieldShape::Image { .. } => return String::new(),
        };

        let target = self.resolve_target(node, link.target);
        match (link.link_type, target) {
            (LinkType::Internal, Some(target)) => {
                self.item_urls.item_url(&target, &UrlOptions::absolute())
            }
            (LinkType::Media, Some(target)) => {
                let options = MediaUrlOptions {
                    absolute_path: true,
                    ..MediaUrlOptions::default()
                };
                ensure_leading_slash(self.media_urls.media_url(&target, &options))
            }
            (_, Some(target)) => self.item_urls.item_url(&target, &UrlOptions::absolute()),
            (_, None) if !link.url.is_empty() => link.url.clone(),
            (_, None) => String::new(),
        }
    }

    /// The URL of a link or reference field, suitable for embedding.
    ///
    /// Internal links with a resolvable target and references give the
    /// target's item URL; every other link gives its literal URL. With
    /// `replace_spaces`, spaces become `%20`.
    pub fn link_url(&self, node: &ContentNode, key: &str, replace_spaces: bool) -> String {
        let url = match self.field(node, key).map(|f| f.shape()) {
            Some(FieldShape::Link(link)) => {
                let target = link
                    .is_internal()
                    .then(|| self.resolve_target(node, link.target))
                    .flatten();
                match target {
                    Some(target) => self.item_urls.item_url(&target, &UrlOptions::default()),
                    None => link.url.clone(),
                }
            }
            Some(FieldShape::Reference { target }) => self
                .resolve_target(node, *target)
                .map(|target| self.item_urls.item_url(&target, &UrlOptions::default()))
                .unwrap_or_default(),
            Some(
                FieldShape::Text
                | FieldShape::Checkbox
                | FieldShape::Date
                | FieldShape::Multilist { .. }
                | FieldShape::Image { .. },
            )
            | None => String::new(),
        };
        escape_spaces(url, replace_spaces)
    }

    /// The URL of the image behind an image field or media link.
    ///
    /// A sized rendition is requested only when both `width` and `height`
    /// are given.
    pub fn image_url(
        &self,
        node: &ContentNode,
        key: &str,
        replace_spaces: bool,
        width: Option<u32>,
        height: Option<u32>,
    ) -> String {
        let media = match self.field(node, key).map(|f| f.shape()) {
            Some(FieldShape::Image { media }) => *media,
            Some(FieldShape::Link(link)) if link.is_media() => link.target,
            Some(
                FieldShape::Text
                | FieldShape::Checkbox
                | FieldShape::Date
                | FieldShape::Link(_)
                | FieldShape::Reference { .. }
                | FieldShape::Multilist { .. },
            )
            | None => None,
        };

        let Some(media) = self.resolve_target(node, media) else {
            return String::new();
        };
        let options = match (width, height) {
            (Some(width), Some(height)) => MediaUrlOptions::sized(width, height),
            _ => MediaUrlOptions::default(),
        };
        escape_spaces(self.media_urls.media_url(&media, &options), replace_spaces)
    }

    /// The URL of the file behind a reference, link or file field.
    ///
    /// References, internal links and file fields give the target's media
    /// URL. Every other link, media links included, gives its literal URL.
    pub fn media_file_url(&self, node: &ContentNode, key: &str, replace_spaces: bool) -> String {
        let media_url_of = |target| {
            self.resolve_target(node, target)
                .map(|media| self.media_urls.media_url(&media, &MediaUrlOptions::default()))
                .unwrap_or_default()
        };

        let url = match self.field(node, key).map(|f| f.shape()) {
            Some(FieldShape::Reference { target }) => media_url_of(*target),
            Some(FieldShape::Link(link)) if link.is_internal() => media_url_of(link.target),
            Some(FieldShape::Link(link)) => link.url.clone(),
            Some(FieldShape::Image { media }) => media_url_of(*media),
            Some(
                FieldShape::Text
                | FieldShape::Checkbox
                | FieldShape::Date
                | FieldShape::Multilist { .. },
            )
            | None => String::new(),
        };
        escape_spaces(url, replace_spaces)
    }
}
