//! Keystroke-level input shaping for roster draft fields.
//!
//! # Responsibility
//! - Decide whether a proposed full field value may replace the current draft.
//!
//! # Invariants
//! - Empty input is always accepted so a field can be cleared.
//! - These are typing filters, not final-format checks: incomplete phone
//!   numbers such as `1` or `123-` are valid fragments.

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_FRAGMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]*$").expect("valid name fragment regex"));
static PHONE_FRAGMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{0,3}(-?[0-9]{0,3}){0,2}$").expect("valid phone fragment regex")
});

/// Returns whether `value` may stand as the name draft.
///
/// Letters and whitespace only, any length.
pub fn is_valid_name_fragment(value: &str) -> bool {
    value.is_empty() || NAME_FRAGMENT_RE.is_match(value)
}

/// Returns whether `value` may stand as the phone draft.
///
/// Up to three digit groups of at most three digits, joined by optional
/// single dashes.
pub fn is_valid_phone_fragment(value: &str) -> bool {
    value.is_empty() || PHONE_FRAGMENT_RE.is_match(value)
}
