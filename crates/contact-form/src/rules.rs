// File: src/rules.rs
// Purpose: Field rules for the contact form

use once_cell::sync::Lazy;
use regex::Regex;

use crate::outcome::ValidationOutcome;

pub const NAME_MESSAGE: &str = "Please enter your full name (at least 2 characters).";
pub const PHONE_MESSAGE: &str = "Enter a valid phone number (7–15 digits).";
pub const MESSAGE_MESSAGE: &str = "Message must be at least 10 characters.";

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

// ASCII digits only; `\d` would also accept other Unicode digits.
static PHONE_DIGITS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{7,15}$").expect("phone pattern is a valid regex"));

/// Whitespace as a browser's `trim()` and `\s` see it: the ECMAScript
/// WhiteSpace and LineTerminator sets.
///
/// Not `char::is_whitespace`, which also matches U+0085 (NEL).
fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strips surrounding whitespace from a raw field value
pub fn trim_value(raw: &str) -> &str {
    raw.trim_matches(is_form_whitespace)
}

/// Length in UTF-16 code units, the unit a browser's `length` counts.
///
/// Differs from `chars().count()` only for astral-plane characters such as
/// emoji, which count as two.
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Removes whitespace and the separators `-`, `(`, `)`, `+` from a phone number.
///
/// Dots, letters and everything else are left in place.
pub fn strip_phone(raw: &str) -> String {
    raw.chars()
        .filter(|&c| !is_form_whitespace(c) && !matches!(c, '-' | '(' | ')' | '+'))
        .collect()
}

/// Full name: at least 2 characters after trimming
pub fn validate_name(raw: &str) -> ValidationOutcome {
    ValidationOutcome::check(utf16_len(trim_value(raw)) >= NAME_MIN_CHARS, NAME_MESSAGE)
}

/// Phone: 7 to 15 digits once separators are stripped
pub fn validate_phone(raw: &str) -> ValidationOutcome {
    let digits = strip_phone(raw);
    ValidationOutcome::check(PHONE_DIGITS_REGEX.is_match(&digits), PHONE_MESSAGE)
}

/// Message: at least 10 characters after trimming
pub fn validate_message(raw: &str) -> ValidationOutcome {
    ValidationOutcome::check(
        utf16_len(trim_value(raw)) >= MESSAGE_MIN_CHARS,
        MESSAGE_MESSAGE,
    )
}
