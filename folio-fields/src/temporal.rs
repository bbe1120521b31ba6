//! Parsing of stored date-time values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Naive layouts tried in order after an optional trailing `Z` is removed.
const NAIVE_FORMATS: &[&str] = &[
    "%Y%m%dT%H%M%S",
    "%Y%m%dT%H%M%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// The "unset" date: `0001-01-01T00:00:00Z`.
///
/// An empty date field reads as this value. Activity windows treat it as an
/// open bound.
pub fn epoch_min() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Parses a stored date-time. Values without an offset are UTC.
///
/// Empty text is [`epoch_min`]; text that matches no known layout is `None`.
pub fn parse_temporal(raw: &str) -> Option<DateTime<Utc>> {
    let text = raw.trim();
    if text.is_empty() {
        return Some(epoch_min());
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Some(with_offset.with_timezone(&Utc));
    }

    let naive_text = text.strip_suffix(['Z', 'z']).unwrap_or(text);
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(naive_text, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(naive_text, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(naive_text, "%Y-%m-%d"))
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
