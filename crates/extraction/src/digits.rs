//! Digit script normalization.
//!
//! Listing pages mix Persian-Arabic (U+06F0..U+06F9) and Arabic-Indic
//! (U+0660..U+0669) digits, sometimes within one fragment. Everything
//! numeric must pass through here before parsing.

/// Map every Persian-Arabic and Arabic-Indic digit to its ASCII
/// equivalent, leaving all other characters unchanged.
///
/// Total over all strings and idempotent.
pub fn normalize_digits(text: &str) -> String {
    text.chars().map(normalize_digit).collect()
}

#[inline]
fn normalize_digit(c: char) -> char {
    match c {
        '\u{06F0}'..='\u{06F9}' => ascii_digit(c as u32 - 0x06F0),
        '\u{0660}'..='\u{0669}' => ascii_digit(c as u32 - 0x0660),
        _ => c,
    }
}

#[inline]
fn ascii_digit(value: u32) -> char {
    char::from(b'0' + value as u8)
}
