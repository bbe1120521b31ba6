//! Turning editor-supplied text into node names.
//!
//! Node names end up in paths and URLs, so they are restricted to ASCII
//! letters, digits and dashes.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Letters that carry no decomposable diacritic and need an explicit mapping.
fn transliterate(c: char) -> Option<&'static str> {
    let mapped = match c {
        'Ł' => "L",
        'ł' => "l",
        'Đ' => "D",
        'đ' => "d",
        'Ø' => "O",
        'ø' => "o",
        'ß' => "ss",
        'Æ' => "AE",
        'æ' => "ae",
        'Œ' => "OE",
        'œ' => "oe",
        'Þ' => "Th",
        'þ' => "th",
        'ı' => "i",
        _ => return None,
    };
    Some(mapped)
}

/// Strips diacritics from Latin text: `"Łabądek"` becomes `"Labadek"`.
///
/// Characters outside the Latin script are left untouched.
pub fn latin_to_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfd() {
        if is_combining_mark(c) {
            continue;
        }
        match transliterate(c) {
            Some(mapped) => out.push_str(mapped),
            None => out.push(c),
        }
    }
    out
}

/// Converts a hexadecimal code point (`"0044"`) into its character.
pub fn to_unichar(hex: &str) -> Option<char> {
    u32::from_str_radix(hex.trim(), 16)
        .ok()
        .and_then(char::from_u32)
}

/// Builds a valid node name from display text.
///
/// Diacritics are stripped, dots dropped, every other character that is not
/// an ASCII letter or digit becomes a dash, and dash runs collapse:
/// `"ul. Łąkowa 89"` becomes `"ul-Lakowa-89"`.
pub fn valid_item_name(text: &str) -> String {
    let mut name = String::with_capacity(text.len());
    for c in latin_to_ascii(text.trim()).chars() {
        if c == '.' {
            continue;
        }
        let c = if c.is_ascii_alphanumeric() { c } else { '-' };
        if c == '-' && name.ends_with('-') {
            continue;
        }
        name.push(c);
    }
    name
}
