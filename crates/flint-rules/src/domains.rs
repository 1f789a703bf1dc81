//! Rules on domain lists.
//!
//! Domains come from the prefix of a cosmetic filter or from the `domain=`
//! option of a network filter; see [`flint_core::extract::extract_domains`].

use flint_core::extract::extract_domains;
use flint_core::{Captures, FnMatcher, Rule};

/// Rule code for blank-domain.
pub const BLANK_DOMAIN: &str = "FL006";
/// Rule code for domain-whitespace.
pub const DOMAIN_WHITESPACE: &str = "FL007";
/// Rule code for domain-non-hostname-character.
pub const DOMAIN_NON_HOSTNAME_CHARACTER: &str = "FL008";

/// A domain entry is empty or only `~`.
#[must_use]
pub fn blank_domain() -> Rule {
    Rule::new(
        BLANK_DOMAIN,
        "blank-domain",
        "Blank domain",
        FnMatcher::new(|line: &str| {
            extract_domains(line)?
                .into_iter()
                .any(is_blank)
                .then(|| vec![Some(line.to_string())])
        }),
    )
}

/// A domain entry contains whitespace.
#[must_use]
pub fn domain_whitespace() -> Rule {
    Rule::new(
        DOMAIN_WHITESPACE,
        "domain-whitespace",
        "Domain contains whitespace",
        FnMatcher::new(|line: &str| {
            let domain = extract_domains(line)?
                .into_iter()
                .find(|d| d.chars().any(char::is_whitespace))?;
            Some(vec![Some(line.to_string()), Some(domain.to_string())])
        }),
    )
    .message("Domain {1} contains whitespace")
}

/// A domain entry contains a character outside `[a-z0-9.-]`.
///
/// Domain names must be IDNA-encoded, so anything else is a typo or an
/// unencoded internationalized name. Whitespace is left to
/// [`domain_whitespace`].
#[must_use]
pub fn domain_non_hostname_character() -> Rule {
    Rule::new(
        DOMAIN_NON_HOSTNAME_CHARACTER,
        "domain-non-hostname-character",
        "Domain contains non-hostname character",
        FnMatcher::new(non_hostname_character),
    )
    .message("Domain {1} contains non-hostname character {2}")
}

fn non_hostname_character(line: &str) -> Option<Captures> {
    extract_domains(line)?.into_iter().find_map(|domain| {
        let trimmed = domain.trim();
        let name = trimmed.strip_prefix('~').unwrap_or(trimmed);
        let bad = name.chars().find(|&c| {
            !(c.is_ascii_alphanumeric() || c == '.' || c == '-' || c.is_whitespace())
        })?;
        Some(vec![
            Some(line.to_string()),
            Some(domain.to_string()),
            Some(bad.to_string()),
        ])
    })
}

fn is_blank(domain: &str) -> bool {
    let domain = domain.trim();
    domain.strip_prefix('~').unwrap_or(domain).trim().is_empty()
}
