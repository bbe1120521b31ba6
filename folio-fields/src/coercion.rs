//! Conversion of raw field text into typed values.
//!
//! Each conversion comes in two forms: a `coerce_*` method returning
//! [`Coerced`], which keeps "missing" and "malformed" apart, and a getter
//! returning the value or a fixed sentinel (`-1`, `-1.0`). Both report
//! problems through the resolver's diagnostic sink.

use crate::diagnostics::{Diagnostic, ValueKind};
use crate::temporal::{epoch_min, parse_temporal};
use crate::{FieldResolver, NumberFormat};
use chrono::{DateTime, Utc};
use folio_model::{ContentNode, FieldShape};

/// Outcome of converting a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced<T> {
    Present(T),
    /// The node has no such field.
    Absent,
    /// The field exists; its raw text did not parse.
    Malformed(String),
}

impl<T> Coerced<T> {
    /// Collapses absence and malformation into `sentinel`.
    pub fn or_sentinel(self, sentinel: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent | Self::Malformed(_) => sentinel,
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Malformed(_) => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

/// Checkbox fields are checked by `1`; `true` is accepted from imported content.
fn is_checked(raw: &str) -> bool {
    let raw = raw.trim();
    raw == "1" || raw.eq_ignore_ascii_case("true")
}

impl FieldResolver {
    fn coerce_with<T>(
        &self,
        node: &ContentNode,
        key: &str,
        expected: ValueKind,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Coerced<T> {
        let Some(field) = self.field(node, key) else {
            return Coerced::Absent;
        };
        match parse(field.raw()) {
            Some(value) => Coerced::Present(value),
            None => {
                self.emit(Diagnostic::malformed(node, key, expected, field.raw()));
                Coerced::Malformed(field.raw().to_string())
            }
        }
    }

    /// Parses the field as a base-10 `i32`.
    pub fn coerce_integer(&self, node: &ContentNode, key: &str) -> Coerced<i32> {
        self.coerce_with(node, key, ValueKind::Integer, |raw| raw.trim().parse().ok())
    }

    /// The field as an integer, or `-1` if it is missing or malformed.
    ///
    /// A stored `-1` is indistinguishable from a failure here; use
    /// [`coerce_integer`](Self::coerce_integer) when that matters.
    pub fn integer(&self, node: &ContentNode, key: &str) -> i32 {
        self.coerce_integer(node, key).or_sentinel(-1)
    }

    /// Parses the field as a double using `format`, or the resolver's
    /// configured format when `None`.
    pub fn coerce_double(
        &self,
        node: &ContentNode,
        key: &str,
        format: Option<&NumberFormat>,
    ) -> Coerced<f64> {
        let format = format.unwrap_or(&self.config.number_format);
        self.coerce_with(node, key, ValueKind::Double, |raw| format.parse(raw))
    }

    /// The field as a double, or `-1.0` if it is missing or malformed.
    pub fn double(&self, node: &ContentNode, key: &str, format: Option<&NumberFormat>) -> f64 {
        self.coerce_double(node, key, format).or_sentinel(-1.0)
    }

    /// True iff the field exists and is checked.
    pub fn checked_boolean(&self, node: &ContentNode, key: &str) -> bool {
        match self.field(node, key) {
            Some(field) => match field.shape() {
                FieldShape::Checkbox | FieldShape::Text => is_checked(field.raw()),
                FieldShape::Date
                | FieldShape::Link(_)
                | FieldShape::Reference { .. }
                | FieldShape::Multilist { .. }
                | FieldShape::Image { .. } => false,
            },
            None => false,
        }
    }

    /// Parses the field as a date-time. Empty text is [`epoch_min`].
    pub fn coerce_temporal(&self, node: &ContentNode, key: &str) -> Coerced<DateTime<Utc>> {
        self.coerce_with(node, key, ValueKind::DateTime, parse_temporal)
    }

    /// The field's date-time: `None` when the field is missing, [`epoch_min`]
    /// when it is empty or malformed.
    pub fn temporal(&self, node: &ContentNode, key: &str) -> Option<DateTime<Utc>> {
        match self.coerce_temporal(node, key) {
            Coerced::Present(value) => Some(value),
            Coerced::Malformed(_) => Some(epoch_min()),
            Coerced::Absent => None,
        }
    }

    /// True iff the field holds a date other than [`epoch_min`].
    pub fn is_temporal_set(&self, node: &ContentNode, key: &str) -> bool {
        self.temporal(node, key).is_some_and(|value| value != epoch_min())
    }

    /// The field's date-time, with [`epoch_min`] for missing fields too.
    pub fn temporal_value_or_min(&self, node: &ContentNode, key: &str) -> DateTime<Utc> {
        self.temporal(node, key).unwrap_or_else(epoch_min)
    }

    /// True iff now lies within the window given by two date fields.
    ///
    /// See [`is_active_at`](Self::is_active_at).
    pub fn is_active(&self, node: &ContentNode, from_key: &str, to_key: &str) -> bool {
        self.is_active_at(node, from_key, to_key, Utc::now())
    }

    /// True iff `now` lies within `[from, to]`.
    ///
    /// A bound that is missing, empty or [`epoch_min`] is open.
    pub fn is_active_at(
        &self,
        node: &ContentNode,
        from_key: &str,
        to_key: &str,
        now: DateTime<Utc>,
    ) -> bool {
        let unset = epoch_min();
        let started = match self.temporal(node, from_key) {
            Some(from) if from != unset => from <= now,
            _ => true,
        };
        let not_ended = match self.temporal(node, to_key) {
            Some(to) if to != unset => to >= now,
            _ => true,
        };
        started && not_ended
    }
}
