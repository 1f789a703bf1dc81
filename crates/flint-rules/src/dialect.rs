//! Dialects and their rule sets.

use crate::domains::{blank_domain, domain_non_hostname_character, domain_whitespace};
use crate::lines::{
    leading_asterisk, leading_whitespace, redundant_sole_anchor, redundant_sole_wildcard,
    single_character_filter, trailing_whitespace,
};
use crate::options::{
    experimental_option, invalid_option, mixed_case_option, non_standard_alias, option_whitespace,
};
use crate::patterns::{looks_like_host, url_pattern_too_short, url_pattern_whitespace};
use crate::vocabulary::{Vocabulary, DEFAULT_ALIASES};

use flint_core::{ConfigError, Rule, RuleSeverity, RuleSet};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Filter-list dialects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Adblock Plus syntax.
    #[default]
    Default,
    /// uBlock Origin syntax.
    Ublock,
}

impl Dialect {
    /// Every dialect, in listing order.
    pub const ALL: [Self; 2] = [Self::Default, Self::Ublock];

    /// Returns the dialect's identifier.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ublock => "ublock",
        }
    }

    /// Returns the identifiers of all dialects.
    #[must_use]
    pub fn known() -> Vec<&'static str> {
        Self::ALL.iter().map(|d| d.name()).collect()
    }

    /// Returns this dialect's rules in declared order.
    #[must_use]
    pub fn rules(self) -> Vec<Rule> {
        match self {
            Self::Default => {
                let mut rules = line_rules();
                rules.extend([redundant_sole_wildcard(), redundant_sole_anchor()]);
                rules.extend(field_rules(RuleSeverity::Warning));
                rules.extend([
                    invalid_option(Vocabulary::DEFAULT),
                    non_standard_alias(DEFAULT_ALIASES),
                    experimental_option(),
                    mixed_case_option(),
                    option_whitespace(),
                    url_pattern_too_short(),
                    url_pattern_whitespace(),
                ]);
                rules
            }
            Self::Ublock => {
                let mut rules = line_rules();
                rules.extend(field_rules(RuleSeverity::Error));
                rules.extend([
                    invalid_option(Vocabulary::UBLOCK),
                    experimental_option(),
                    mixed_case_option(),
                    option_whitespace(),
                    url_pattern_too_short(),
                    url_pattern_whitespace(),
                ]);
                rules
            }
        }
    }

    /// Builds the rule set for this dialect.
    #[must_use]
    pub fn rule_set(self) -> RuleSet {
        RuleSet::new(self.name()).with_rules(self.rules())
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| ConfigError::UnknownDialect {
                name: s.to_string(),
                known: Self::known(),
            })
    }
}

/// Shape checks shared by every dialect; they come first.
fn line_rules() -> Vec<Rule> {
    vec![
        leading_whitespace(),
        trailing_whitespace(),
        leading_asterisk(),
        single_character_filter(),
    ]
}

/// Pattern and domain checks shared by every dialect.
fn field_rules(host_severity: RuleSeverity) -> [Rule; 4] {
    [
        looks_like_host(host_severity),
        blank_domain(),
        domain_whitespace(),
        domain_non_hostname_character(),
    ]
}

/// Loads the rule set for a dialect identifier; `None` selects the default.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownDialect`] if `id` names no dialect.
pub fn load(id: Option<&str>) -> Result<RuleSet, ConfigError> {
    let dialect: Dialect = match id {
        Some(id) => id.parse()?,
        None => Dialect::default(),
    };
    let rule_set = dialect.rule_set();
    debug!("Loaded {} rules for dialect {}", rule_set.len(), dialect);
    Ok(rule_set)
}
