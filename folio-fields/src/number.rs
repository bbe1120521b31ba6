//! Locale-invariant number parsing.
//!
//! Stored numbers must parse the same way on every machine, so parsing never
//! consults the process locale. Separators come from an explicit
//! [`NumberFormat`] instead.

/// Group separator accepted when a format leaves its own group separator empty.
const INVARIANT_GROUP_SEPARATOR: &str = ",";

/// Decimal and group separators used to read stored numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: String,
    pub group_separator: String,
}

impl Default for NumberFormat {
    /// `.` as decimal separator, no group separator: `120000.123`.
    fn default() -> Self {
        Self::new(".", "")
    }
}

impl NumberFormat {
    pub fn new(decimal_separator: impl Into<String>, group_separator: impl Into<String>) -> Self {
        Self {
            decimal_separator: decimal_separator.into(),
            group_separator: group_separator.into(),
        }
    }

    fn effective_group_separator(&self) -> Option<&str> {
        let group = if self.group_separator.is_empty() {
            INVARIANT_GROUP_SEPARATOR
        } else {
            self.group_separator.as_str()
        };
        (group != self.decimal_separator).then_some(group)
    }

    /// Parses `text` as a floating point number.
    ///
    /// Accepts surrounding whitespace, a leading or trailing sign, negative
    /// numbers in parentheses, group separators in the integer part and an
    /// exponent. Returns `None` for anything else.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let mut body = text.trim();
        let mut negative = false;

        if let Some(inner) = body.strip_prefix('(').and_then(|b| b.strip_suffix(')')) {
            negative = true;
            body = inner.trim();
        }
        if let Some(rest) = body.strip_prefix('-') {
            negative = !negative;
            body = rest;
        } else if let Some(rest) = body.strip_prefix('+') {
            body = rest;
        } else if let Some(rest) = body.strip_suffix('-') {
            negative = !negative;
            body = rest.trim_end();
        } else if let Some(rest) = body.strip_suffix('+') {
            body = rest.trim_end();
        }

        let (mantissa, exponent) = match body.find(['e', 'E']) {
            Some(at) => (&body[..at], Some(&body[at + 1..])),
            None => (body, None),
        };

        let (integer, fraction) = if self.decimal_separator.is_empty() {
            (mantissa, "")
        } else {
            mantissa
                .split_once(self.decimal_separator.as_str())
                .unwrap_or((mantissa, ""))
        };

        let integer = match self.effective_group_separator() {
            Some(group) if !integer.starts_with(group) => integer.replace(group, ""),
            _ => integer.to_string(),
        };

        let digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }
        if !digits(&integer) || !digits(fraction) {
            return None;
        }

        let mut canonical = String::with_capacity(integer.len() + fraction.len() + 8);
        if negative {
            canonical.push('-');
        }
        canonical.push_str(if integer.is_empty() { "0" } else { &integer });
        if !fraction.is_empty() {
            canonical.push('.');
            canonical.push_str(fraction);
        }
        if let Some(exponent) = exponent {
            let unsigned = exponent
                .strip_prefix(['+', '-'])
                .unwrap_or(exponent);
            if unsigned.is_empty() || !digits(unsigned) {
                return None;
            }
            canonical.push('e');
            canonical.push_str(exponent);
        }

        canonical.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}
