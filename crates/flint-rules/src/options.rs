//! Rules on `$`-options of network filters.

use crate::vocabulary::{Vocabulary, EXPERIMENTAL_OPTIONS};

use flint_core::extract::extract_options;
use flint_core::{Captures, FnMatcher, OptionEntry, Rule, RuleSeverity};

/// Rule code for invalid-option.
pub const INVALID_OPTION: &str = "FL011";
/// Rule code for non-standard-alias.
pub const NON_STANDARD_ALIAS: &str = "FL012";
/// Rule code for experimental-option.
pub const EXPERIMENTAL_OPTION: &str = "FL013";
/// Rule code for mixed-case-option.
pub const MIXED_CASE_OPTION: &str = "FL014";
/// Rule code for option-whitespace.
pub const OPTION_WHITESPACE: &str = "FL015";

/// Reports the first option for which `test` holds, capturing the option
/// name as written.
fn first_option(line: &str, test: impl Fn(&OptionEntry<'_>) -> bool) -> Option<Captures> {
    let option = extract_options(line)?.into_iter().find(|o| test(o))?;
    Some(vec![Some(line.to_string()), Some(option.name.to_string())])
}

fn folded(option: &OptionEntry<'_>) -> String {
    option.compact_name().to_lowercase()
}

/// Option name is not in the dialect's whitelist.
#[must_use]
pub fn invalid_option(vocabulary: Vocabulary) -> Rule {
    Rule::new(
        INVALID_OPTION,
        "invalid-option",
        "Invalid option",
        FnMatcher::new(move |line: &str| {
            first_option(line, |o| !vocabulary.contains(&folded(o)))
        }),
    )
    .message("Invalid option {1}")
}

/// Option is a shorthand alias of a standard name.
#[must_use]
pub fn non_standard_alias(aliases: &'static [&'static str]) -> Rule {
    Rule::new(
        NON_STANDARD_ALIAS,
        "non-standard-alias",
        "Non-standard alias",
        FnMatcher::new(move |line: &str| {
            first_option(line, |o| aliases.contains(&folded(o).as_str()))
        }),
    )
    .message("Non-standard alias {1}")
}

/// Option is experimental and may change.
#[must_use]
pub fn experimental_option() -> Rule {
    Rule::new(
        EXPERIMENTAL_OPTION,
        "experimental-option",
        "Experimental option",
        FnMatcher::new(|line: &str| {
            first_option(line, |o| EXPERIMENTAL_OPTIONS.contains(&folded(o).as_str()))
        }),
    )
    .severity(RuleSeverity::Warning)
    .message("Option {1} is experimental")
}

/// Option name is not all lowercase. Captures the name without whitespace.
#[must_use]
pub fn mixed_case_option() -> Rule {
    Rule::new(
        MIXED_CASE_OPTION,
        "mixed-case-option",
        "Mixed-case option",
        FnMatcher::new(|line: &str| {
            let name = extract_options(line)?
                .iter()
                .map(OptionEntry::compact_name)
                .find(|name| *name != name.to_lowercase())?;
            Some(vec![Some(line.to_string()), Some(name)])
        }),
    )
    .severity(RuleSeverity::Warning)
    .message("Mixed-case option {1}")
}

/// Option name contains whitespace.
#[must_use]
pub fn option_whitespace() -> Rule {
    Rule::new(
        OPTION_WHITESPACE,
        "option-whitespace",
        "Option contains whitespace",
        FnMatcher::new(|line: &str| {
            first_option(line, |o| o.name.chars().any(char::is_whitespace))
        }),
    )
    .message("Option {1} contains whitespace")
}
