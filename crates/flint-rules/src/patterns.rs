//! Rules on the URL pattern of network filters.

use flint_core::extract::extract_pattern;
use flint_core::{FnMatcher, Rule, RuleSeverity};
use regex::Regex;
use std::sync::LazyLock;

/// Rule code for looks-like-host.
pub const LOOKS_LIKE_HOST: &str = "FL005";
/// Rule code for url-pattern-too-short.
pub const URL_PATTERN_TOO_SHORT: &str = "FL016";
/// Rule code for url-pattern-whitespace.
pub const URL_PATTERN_WHITESPACE: &str = "FL017";

/// Bare ASCII hostname with optional port. Group 1 is the host.
///
/// Letters are spelled out rather than case-folded: `(?i)` in Unicode mode
/// also folds `ſ` and the Kelvin sign into `[a-z]`.
static HOST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*([A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*(?::[0-9]+)?)\s*$",
    )
    .unwrap()
});

/// Pattern is a bare hostname without anchors, which is ambiguous.
///
/// The severity differs per dialect.
#[must_use]
pub fn looks_like_host(severity: RuleSeverity) -> Rule {
    Rule::new(
        LOOKS_LIKE_HOST,
        "looks-like-host",
        "URL pattern looks like a host",
        FnMatcher::new(|line: &str| {
            let caps = HOST_RE.captures(extract_pattern(line)?)?;
            Some(vec![
                Some(line.to_string()),
                caps.get(1).map(|m| m.as_str().to_string()),
            ])
        }),
    )
    .severity(severity)
    .message("{1} looks like a host")
}

/// Pattern has fewer than three characters. Off unless enabled.
#[must_use]
pub fn url_pattern_too_short() -> Rule {
    Rule::new(
        URL_PATTERN_TOO_SHORT,
        "url-pattern-too-short",
        "URL pattern too short",
        FnMatcher::new(|line: &str| {
            let pattern = extract_pattern(line)?.trim();
            (!pattern.is_empty() && pattern.chars().count() < 3)
                .then(|| vec![Some(line.to_string()), Some(pattern.to_string())])
        }),
    )
    .severity(RuleSeverity::Off)
    .message("URL pattern {1} is too short")
}

/// Pattern contains whitespace.
#[must_use]
pub fn url_pattern_whitespace() -> Rule {
    Rule::new(
        URL_PATTERN_WHITESPACE,
        "url-pattern-whitespace",
        "URL pattern contains whitespace",
        FnMatcher::new(|line: &str| {
            let pattern = extract_pattern(line)?;
            pattern
                .chars()
                .any(char::is_whitespace)
                .then(|| vec![Some(line.to_string()), Some(pattern.to_string())])
        }),
    )
    .message("URL pattern {1} contains whitespace")
}
