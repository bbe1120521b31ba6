use crate::NumberFormat;

/// Settings for a [`FieldResolver`](crate::FieldResolver) and its default URL builders.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Scheme and host prepended to item URLs that ask for it.
    pub server_url: String,
    /// Path prefix removed from item paths before building URLs. `None` keeps full paths.
    pub site_root: Option<String>,
    /// Prefix of media URLs.
    pub media_prefix: String,
    /// Root of the media library tree, removed from media paths.
    pub media_root: String,
    /// Extension appended to media URLs.
    pub media_extension: String,
    /// Format used by `double` when the caller passes none.
    pub number_format: NumberFormat,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost".to_string(),
            site_root: None,
            media_prefix: "~/media".to_string(),
            media_root: "/sitecore/media library".to_string(),
            media_extension: "ashx".to_string(),
            number_format: NumberFormat::default(),
        }
    }
}
