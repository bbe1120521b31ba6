//! Shared fixture for field resolution tests.

#![allow(dead_code)]

use chrono::{Duration, Utc};
use folio_fields::{CollectingSink, FieldResolver};
use folio_model::{ContentNode, Field};
use folio_store::MemoryStore;
use folio_types::{Locale, NodeId};
use std::sync::Arc;

/// Field names used by the fixture nodes.
pub mod names {
    pub const TEXT: &str = "Text Field";
    pub const EMPTY: &str = "Empty Field";
    pub const CHECKBOX: &str = "Checkbox Field";
    pub const CHECKBOX_UNCHECKED: &str = "Checkbox Field Unchecked";

    pub const DATE_FROM: &str = "Date Field From";
    pub const DATE_TO: &str = "Date Field To";
    pub const DATE_EMPTY: &str = "Date Field Empty";
    pub const DATE_MALFORMED: &str = "Date Field Malformed";

    pub const LINK_EXTERNAL: &str = "Link Field External";
    pub const LINK_INTERNAL: &str = "Link Field Internal";
    pub const LINK_INTERNAL_DANGLING: &str = "Link Field Internal Dangling";
    pub const LINK_MEDIA: &str = "Link Field Media";
    pub const LINK_ANCHOR_WITH_TARGET: &str = "Link Field Anchor With Target";
    pub const LINK_EMPTY: &str = "Link Field Empty";

    pub const IMAGE: &str = "Image Field";
    pub const IMAGE_DANGLING: &str = "Image Field Dangling";
    pub const FILE: &str = "File Field";

    pub const REFERENCE: &str = "Reference Field";
    pub const REFERENCE_DANGLING: &str = "Reference Field Dangling";
    pub const REFERENCE_BY_PATH: &str = "Reference By Path";
    pub const MULTILIST: &str = "Multilist Field";

    pub const INTEGER: &str = "Integer Field";
    pub const INTEGER_MALFORMED: &str = "Integer Field Malformed";
    pub const DOUBLE: &str = "Double Field";
    pub const ANOTHER_DOUBLE: &str = "Another Double Field";

    pub const NOT_EXISTING: &str = "Field that does not exist";
}

pub const TEMPLATE_ID: &str = "{3AD0E3AB-0CC7-41F1-B9FD-5FD9DDEF50B4}";
pub const SERVER: &str = "http://localhost";

pub fn en() -> Locale {
    Locale::new("en").unwrap()
}

pub fn pl() -> Locale {
    Locale::new("pl-PL").unwrap()
}

pub struct Fixture {
    pub store: Arc<MemoryStore>,
    pub sink: Arc<CollectingSink>,
    pub resolver: FieldResolver,
    pub item: ContentNode,
    pub referenced: ContentNode,
    pub logo: ContentNode,
    pub report: ContentNode,
    pub dangling: NodeId,
}

pub fn fixture() -> Fixture {
    use names::*;

    let template = NodeId::parse(TEMPLATE_ID).unwrap();
    let now = Utc::now();
    let dangling = NodeId::new();

    let referenced = ContentNode::new(
        "/sitecore/content/TestItemReferenced",
        template,
        "TestTemplate",
        en(),
    )
    .with_field(TEXT, Field::text("Value 1"))
    .with_field(EMPTY, Field::text(""))
    .with_field(LINK_EXTERNAL, Field::link_external("http://facebook.com"));

    let logo = ContentNode::new(
        "/sitecore/media library/Images/My Logo",
        NodeId::new(),
        "Jpeg",
        en(),
    );
    let report = ContentNode::new(
        "/sitecore/media library/Files/Annual Report",
        NodeId::new(),
        "Pdf",
        en(),
    );

    let item = ContentNode::new("/sitecore/content/TestItem", template, "TestTemplate", en())
        .with_field(TEXT, Field::text("Value 1"))
        .with_field(EMPTY, Field::text(""))
        .with_field(CHECKBOX, Field::checkbox(true))
        .with_field(CHECKBOX_UNCHECKED, Field::checkbox(false))
        .with_field(DATE_FROM, Field::date(now - Duration::days(1)))
        .with_field(DATE_TO, Field::date(now + Duration::days(1)))
        .with_field(DATE_EMPTY, Field::date_raw(""))
        .with_field(DATE_MALFORMED, Field::date_raw("yesterday"))
        .with_field(LINK_EXTERNAL, Field::link_external("http://google.com"))
        .with_field(
            LINK_INTERNAL,
            Field::link_internal(referenced.id, "/sitecore/content/TestItemReferenced"),
        )
        .with_field(
            LINK_INTERNAL_DANGLING,
            Field::link_internal(dangling, "/sitecore/content/Removed Page"),
        )
        .with_field(LINK_MEDIA, Field::link_media(logo.id))
        .with_field(
            LINK_ANCHOR_WITH_TARGET,
            Field::from_stored(
                "General Link",
                format!(r#"<link linktype="anchor" id="{}" url="top" />"#, referenced.id),
            ),
        )
        .with_field(LINK_EMPTY, Field::from_stored("General Link", ""))
        .with_field(IMAGE, Field::image(logo.id))
        .with_field(IMAGE_DANGLING, Field::image(dangling))
        .with_field(
            FILE,
            Field::from_stored("File", format!(r#"<file mediaid="{}" />"#, report.id)),
        )
        .with_field(REFERENCE, Field::reference(referenced.id))
        .with_field(REFERENCE_DANGLING, Field::reference(dangling))
        .with_field(
            REFERENCE_BY_PATH,
            Field::text("/sitecore/content/TestItemReferenced"),
        )
        .with_field(
            MULTILIST,
            Field::multilist([
                referenced.id.to_string(),
                dangling.to_string(),
                "not-an-id".to_string(),
                logo.id.to_string(),
                referenced.id.to_string(),
            ]),
        )
        .with_field(INTEGER, Field::text("123"))
        .with_field(INTEGER_MALFORMED, Field::text("12a"))
        .with_field(DOUBLE, Field::text("3.14159265358979"))
        .with_field(ANOTHER_DOUBLE, Field::text("100,000.001"));

    let store = Arc::new(MemoryStore::new("master", vec![en(), pl()]));
    for node in [&item, &referenced, &logo, &report] {
        store.put(node.clone()).unwrap();
    }

    let sink = Arc::new(CollectingSink::new());
    let resolver = FieldResolver::new(store.clone()).with_sink(sink.clone());

    Fixture {
        store,
        sink,
        resolver,
        item,
        referenced,
        logo,
        report,
        dangling,
    }
}
