mod common;

use chrono::{Duration, TimeZone, Utc};
use common::fixture;
use common::names::*;
use folio_fields::{
    epoch_min, Coerced, DiagnosticKind, FieldResolver, NumberFormat, ResolverConfig, ValueKind,
};
use folio_model::{ContentNode, Field};
use folio_types::NodeId;
use pretty_assertions::assert_eq;

fn node_with(key: &str, field: Field) -> ContentNode {
    ContentNode::new("/sitecore/content/Scratch", NodeId::new(), "Scratch", common::en())
        .with_field(key, field)
}

// ── Integers ─────────────────────────────────────────────────────

#[test]
fn integer_parses_stored_value() {
    let f = fixture();
    assert_eq!(f.resolver.integer(&f.item, INTEGER), 123);
    assert!(f.sink.is_empty());
}

#[test]
fn integer_tolerates_surrounding_whitespace() {
    let f = fixture();
    let node = node_with("n", Field::text("  -42 "));
    assert_eq!(f.resolver.integer(&node, "n"), -42);
}

#[test]
fn integer_missing_field_is_minus_one() {
    let f = fixture();
    assert_eq!(f.resolver.integer(&f.item, NOT_EXISTING), -1);
    assert_eq!(f.sink.take()[0].kind, DiagnosticKind::MissingField);
}

#[test]
fn integer_malformed_is_minus_one_and_reported() {
    let f = fixture();
    assert_eq!(f.resolver.integer(&f.item, INTEGER_MALFORMED), -1);

    let records = f.sink.take();
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].kind,
        DiagnosticKind::Malformed {
            expected: ValueKind::Integer,
            raw: "12a".to_string(),
        }
    );
    assert!(records[0].message.contains("as Integer"));
}

#[test]
fn integer_rejects_values_outside_i32() {
    let f = fixture();
    let node = node_with("n", Field::text("2147483648"));
    assert!(f.resolver.coerce_integer(&node, "n").is_malformed());
}

#[test]
fn coerce_integer_keeps_absent_and_malformed_apart() {
    let f = fixture();
    let r = &f.resolver;
    assert_eq!(r.coerce_integer(&f.item, INTEGER), Coerced::Present(123));
    assert_eq!(r.coerce_integer(&f.item, NOT_EXISTING), Coerced::Absent);
    assert_eq!(
        r.coerce_integer(&f.item, INTEGER_MALFORMED),
        Coerced::Malformed("12a".to_string())
    );
}

#[test]
fn stored_minus_one_is_present() {
    let f = fixture();
    let node = node_with("n", Field::text("-1"));
    assert_eq!(f.resolver.coerce_integer(&node, "n"), Coerced::Present(-1));
    assert!(f.sink.is_empty());
}

// ── Doubles ──────────────────────────────────────────────────────

#[test]
fn double_parses_invariant_value() {
    let f = fixture();
    assert_eq!(f.resolver.double(&f.item, DOUBLE, None), 3.14159265358979);
}

#[test]
fn double_accepts_invariant_group_separator() {
    let f = fixture();
    assert_eq!(f.resolver.double(&f.item, ANOTHER_DOUBLE, None), 100000.001);
}

#[test]
fn invariant_format_ignores_resolver_configuration() {
    let f = fixture();
    let comma_decimal = ResolverConfig {
        number_format: NumberFormat::new(",", " "),
        ..ResolverConfig::default()
    };
    let polish = FieldResolver::with_config(f.store.clone(), comma_decimal);
    let invariant = NumberFormat::default();

    for resolver in [&f.resolver, &polish] {
        assert_eq!(
            resolver.double(&f.item, ANOTHER_DOUBLE, Some(&invariant)),
            100000.001
        );
    }
}

#[test]
fn configured_format_is_used_by_default() {
    let f = fixture();
    let comma_decimal = ResolverConfig {
        number_format: NumberFormat::new(",", " "),
        ..ResolverConfig::default()
    };
    let polish = FieldResolver::with_config(f.store.clone(), comma_decimal);
    let node = node_with("n", Field::text("2,5"));
    assert_eq!(polish.double(&node, "n", None), 2.5);
}

#[test]
fn double_with_explicit_format() {
    let f = fixture();
    let polish = NumberFormat::new(",", " ");
    let node = node_with("n", Field::text("1 234,5"));
    assert_eq!(f.resolver.double(&node, "n", Some(&polish)), 1234.5);
}

#[test]
fn double_default_ignores_other_formats() {
    let f = fixture();
    let node = node_with("n", Field::text("3,14"));
    // Read with the invariant format, the comma is a group separator.
    assert_eq!(f.resolver.double(&node, "n", None), 314.0);
    assert_eq!(
        f.resolver.double(&node, "n", Some(&NumberFormat::new(",", "."))),
        3.14
    );
}

#[test]
fn double_missing_and_malformed_are_minus_one() {
    let f = fixture();
    let node = node_with("n", Field::text("abc"));
    assert_eq!(f.resolver.double(&f.item, NOT_EXISTING, None), -1.0);
    assert_eq!(f.resolver.double(&node, "n", None), -1.0);

    let kinds: Vec<_> = f.sink.take().into_iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::MissingField,
            DiagnosticKind::Malformed {
                expected: ValueKind::Double,
                raw: "abc".to_string(),
            },
        ]
    );
}

#[test]
fn coerce_double_reports_presence() {
    let f = fixture();
    assert!(f.resolver.coerce_double(&f.item, DOUBLE, None).is_present());
    assert!(f.resolver.coerce_double(&f.item, NOT_EXISTING, None).is_absent());
    assert_eq!(f.resolver.coerce_double(&f.item, TEXT, None).ok(), None);
}

// ── Checkboxes ───────────────────────────────────────────────────

#[test]
fn checked_boolean_reads_checkbox_fields() {
    let f = fixture();
    assert!(f.resolver.checked_boolean(&f.item, CHECKBOX));
    assert!(!f.resolver.checked_boolean(&f.item, CHECKBOX_UNCHECKED));
}

#[test]
fn checked_boolean_missing_is_false() {
    let f = fixture();
    assert!(!f.resolver.checked_boolean(&f.item, NOT_EXISTING));
    assert_eq!(f.sink.len(), 1);
}

#[test]
fn checked_boolean_accepts_true_text() {
    let f = fixture();
    let node = node_with("a", Field::text("True")).with_field("b", Field::text("0"));
    assert!(f.resolver.checked_boolean(&node, "a"));
    assert!(!f.resolver.checked_boolean(&node, "b"));
}

#[test]
fn checked_boolean_is_false_for_other_shapes() {
    let f = fixture();
    assert!(!f.resolver.checked_boolean(&f.item, LINK_EXTERNAL));
    assert!(!f.resolver.checked_boolean(&f.item, DATE_FROM));
}

// ── Dates ────────────────────────────────────────────────────────

#[test]
fn temporal_reads_compact_iso() {
    let f = fixture();
    let node = node_with("d", Field::date_raw("20240131T093000Z"));
    assert_eq!(
        f.resolver.temporal(&node, "d"),
        Some(Utc.with_ymd_and_hms(2024, 1, 31, 9, 30, 0).unwrap())
    );
}

#[test]
fn temporal_empty_is_epoch_min() {
    let f = fixture();
    assert_eq!(f.resolver.temporal(&f.item, DATE_EMPTY), Some(epoch_min()));
    assert!(!f.resolver.is_temporal_set(&f.item, DATE_EMPTY));
    assert!(f.sink.is_empty());
}

#[test]
fn temporal_missing_is_none() {
    let f = fixture();
    assert_eq!(f.resolver.temporal(&f.item, NOT_EXISTING), None);
    assert_eq!(f.resolver.temporal_value_or_min(&f.item, NOT_EXISTING), epoch_min());
}

#[test]
fn temporal_malformed_is_epoch_min_and_reported() {
    let f = fixture();
    assert_eq!(f.resolver.temporal(&f.item, DATE_MALFORMED), Some(epoch_min()));
    assert!(f.resolver.coerce_temporal(&f.item, DATE_MALFORMED).is_malformed());

    let records = f.sink.take();
    assert_eq!(records.len(), 2);
    assert!(matches!(
        records[0].kind,
        DiagnosticKind::Malformed {
            expected: ValueKind::DateTime,
            ..
        }
    ));
}

#[test]
fn is_temporal_set_for_stored_dates() {
    let f = fixture();
    assert!(f.resolver.is_temporal_set(&f.item, DATE_FROM));
    assert!(!f.resolver.is_temporal_set(&f.item, NOT_EXISTING));
}

// ── Activity windows ─────────────────────────────────────────────

#[test]
fn is_active_within_window() {
    let f = fixture();
    assert!(f.resolver.is_active(&f.item, DATE_FROM, DATE_TO));
}

#[test]
fn is_active_at_outside_window() {
    let f = fixture();
    let now = Utc::now();
    let r = &f.resolver;
    assert!(!r.is_active_at(&f.item, DATE_FROM, DATE_TO, now + Duration::days(2)));
    assert!(!r.is_active_at(&f.item, DATE_FROM, DATE_TO, now - Duration::days(2)));
}

#[test]
fn is_active_unset_bounds_are_open() {
    let f = fixture();
    let now = Utc::now();
    let r = &f.resolver;
    let far_future = now + Duration::days(3650);
    let far_past = now - Duration::days(3650);

    assert!(r.is_active_at(&f.item, DATE_EMPTY, DATE_TO, far_past));
    assert!(r.is_active_at(&f.item, DATE_FROM, DATE_EMPTY, far_future));
    assert!(r.is_active_at(&f.item, DATE_EMPTY, DATE_EMPTY, far_future));
    assert!(r.is_active_at(&f.item, NOT_EXISTING, NOT_EXISTING, now));
}

#[test]
fn is_active_future_start_without_end_is_inactive() {
    let f = fixture();
    let now = Utc::now();
    let node = node_with("from", Field::date(now + Duration::days(1)))
        .with_field("to", Field::date_raw(""));
    assert!(!f.resolver.is_active_at(&node, "from", "to", now));
}

#[test]
fn is_active_past_end_without_start_is_inactive() {
    let f = fixture();
    let now = Utc::now();
    let node = node_with("from", Field::date_raw(""))
        .with_field("to", Field::date(now - Duration::days(1)));
    assert!(!f.resolver.is_active_at(&node, "from", "to", now));
}

#[test]
fn is_active_bounds_are_inclusive() {
    let f = fixture();
    let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let node = node_with("from", Field::date(at)).with_field("to", Field::date(at));
    assert!(f.resolver.is_active_at(&node, "from", "to", at));
    assert!(!f.resolver.is_active_at(&node, "from", "to", at + Duration::seconds(1)));
}

#[test]
fn is_active_with_reversed_window_is_never_active() {
    let f = fixture();
    assert!(!f.resolver.is_active(&f.item, DATE_TO, DATE_FROM));
}

// ── Coerced ──────────────────────────────────────────────────────

#[test]
fn coerced_or_sentinel() {
    assert_eq!(Coerced::Present(5).or_sentinel(-1), 5);
    assert_eq!(Coerced::<i32>::Absent.or_sentinel(-1), -1);
    assert_eq!(Coerced::<i32>::Malformed("x".into()).or_sentinel(-1), -1);
}
