//! Rules on the raw shape of a line.
//!
//! These are plain regex rules: they look at the untrimmed line text and
//! need no field extraction.

use flint_core::{RegexMatcher, Rule, RuleSeverity};

/// Rule code for leading-whitespace.
pub const LEADING_WHITESPACE: &str = "FL001";
/// Rule code for trailing-whitespace.
pub const TRAILING_WHITESPACE: &str = "FL002";
/// Rule code for leading-asterisk.
pub const LEADING_ASTERISK: &str = "FL003";
/// Rule code for single-character-filter.
pub const SINGLE_CHARACTER_FILTER: &str = "FL004";
/// Rule code for redundant-sole-wildcard.
pub const REDUNDANT_SOLE_WILDCARD: &str = "FL009";
/// Rule code for redundant-sole-anchor.
pub const REDUNDANT_SOLE_ANCHOR: &str = "FL010";

pub(crate) fn regex(pattern: &'static str) -> RegexMatcher {
    RegexMatcher::parse(pattern)
        .unwrap_or_else(|e| panic!("built-in pattern {pattern:?} is invalid: {e}"))
}

/// Line starts with whitespace.
#[must_use]
pub fn leading_whitespace() -> Rule {
    Rule::new(
        LEADING_WHITESPACE,
        "leading-whitespace",
        "Leading whitespace",
        regex(r"^\s+"),
    )
    .severity(RuleSeverity::Warning)
}

/// Non-comment line ends with whitespace.
#[must_use]
pub fn trailing_whitespace() -> Rule {
    Rule::new(
        TRAILING_WHITESPACE,
        "trailing-whitespace",
        "Trailing whitespace",
        // Trailing whitespace is fine in comments.
        regex(r"^\s*[^!].*\s+$"),
    )
    .severity(RuleSeverity::Warning)
}

/// Filter starts with a redundant `*`. Off unless enabled.
#[must_use]
pub fn leading_asterisk() -> Rule {
    Rule::new(
        LEADING_ASTERISK,
        "leading-asterisk",
        "Leading asterisk",
        regex(r"^\s*\*"),
    )
    .severity(RuleSeverity::Off)
}

/// Whole filter is one character.
#[must_use]
pub fn single_character_filter() -> Rule {
    Rule::new(
        SINGLE_CHARACTER_FILTER,
        "single-character-filter",
        "Single-character filter",
        regex(r"^\s*[^!\s]\s*$"),
    )
}

/// `*$options`: the wildcard adds nothing.
#[must_use]
pub fn redundant_sole_wildcard() -> Rule {
    Rule::new(
        REDUNDANT_SOLE_WILDCARD,
        "redundant-sole-wildcard",
        "Redundant sole wildcard",
        regex(r"^\s*\*\s*\$"),
    )
    .severity(RuleSeverity::Warning)
}

/// `|$options`: the anchor adds nothing.
#[must_use]
pub fn redundant_sole_anchor() -> Rule {
    Rule::new(
        REDUNDANT_SOLE_ANCHOR,
        "redundant-sole-anchor",
        "Redundant sole anchor",
        regex(r"^\s*\|\s*\$"),
    )
    .severity(RuleSeverity::Warning)
}
