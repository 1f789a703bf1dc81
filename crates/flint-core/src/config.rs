//! Configuration types for flint.

use crate::rule::Rule;
use crate::rule_set::RuleSet;
use crate::types::RuleSeverity;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::warn;

/// Top-level configuration for flint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Filter-list dialect (e.g., "default", "ublock").
    #[serde(default)]
    pub dialect: Option<String>,

    /// Evaluate only error-severity rules.
    #[serde(default)]
    pub errors_only: Option<bool>,

    /// Per-rule configurations, keyed by rule name or code.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Returns the effective severity override for a rule, if any.
    ///
    /// `enabled = false` wins over an explicit severity.
    #[must_use]
    pub fn rule_severity(&self, rule: &str) -> Option<RuleSeverity> {
        let config = self.rules.get(rule)?;
        if config.enabled == Some(false) {
            return Some(RuleSeverity::Off);
        }
        config.severity
    }

    /// Applies per-rule overrides to `rule_set`.
    ///
    /// `enabled = true` without a severity turns a rule that is off by
    /// default on as a warning, and leaves any other rule as it is.
    /// Entries naming unknown rules are logged and skipped.
    pub fn apply(&self, rule_set: &mut RuleSet) {
        for (id, rule_config) in &self.rules {
            let Some(current) = rule_set.get(id).map(Rule::rule_severity) else {
                warn!(
                    "Unknown rule in configuration for dialect {}: {}",
                    rule_set.dialect(),
                    id
                );
                continue;
            };
            let severity = match self.rule_severity(id) {
                Some(severity) => severity,
                None if rule_config.enabled == Some(true) && current == RuleSeverity::Off => {
                    RuleSeverity::Warning
                }
                None => continue,
            };
            rule_set.set_severity(id, severity);
        }
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<RuleSeverity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// The requested dialect does not exist.
    #[error("Unknown dialect '{name}' (expected one of: {})", .known.join(", "))]
    UnknownDialect {
        /// Requested dialect.
        name: String,
        /// Dialects that exist.
        known: Vec<&'static str>,
    },

    /// A rule named on the command line does not exist.
    #[error("Unknown rule '{name}' for dialect {dialect}")]
    UnknownRule {
        /// Requested rule name or code.
        name: String,
        /// Dialect that was searched.
        dialect: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{RegexMatcher, Rule};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.dialect.is_none());
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
dialect = "ublock"
errors_only = true

[rules.leading-whitespace]
severity = "off"

[rules.FL009]
severity = "only"

[rules.trailing-whitespace]
enabled = false
severity = "error"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.dialect.as_deref(), Some("ublock"));
        assert_eq!(config.errors_only, Some(true));
        assert_eq!(
            config.rule_severity("leading-whitespace"),
            Some(RuleSeverity::Off)
        );
        assert_eq!(config.rule_severity("FL009"), Some(RuleSeverity::Only));
        assert_eq!(
            config.rule_severity("trailing-whitespace"),
            Some(RuleSeverity::Off)
        );
        assert_eq!(config.rule_severity("other"), None);
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("dialect = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        let err = Config::parse("[rules.x]\nseverity = \"loud\"").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config"));
    }

    #[test]
    fn test_apply_overrides() {
        let mut set = RuleSet::new("test").with_rules([
            Rule::new("T1", "one", "one", RegexMatcher::parse("a").unwrap()),
            Rule::new("T2", "two", "two", RegexMatcher::parse("b").unwrap()),
        ]);
        let config = Config::parse(
            "[rules.one]\nseverity = \"warning\"\n[rules.T2]\nenabled = false\n[rules.ghost]\nseverity = \"off\"\n",
        )
        .unwrap();
        config.apply(&mut set);
        assert_eq!(set.get("one").map(Rule::rule_severity), Some(RuleSeverity::Warning));
        assert_eq!(set.get("two").map(Rule::rule_severity), Some(RuleSeverity::Off));
    }

    #[test]
    fn test_enabled_turns_on_off_rules() {
        let mut set = RuleSet::new("test").with_rules([
            Rule::new("T1", "dormant", "dormant", RegexMatcher::parse("a").unwrap())
                .severity(RuleSeverity::Off),
            Rule::new("T2", "loud", "loud", RegexMatcher::parse("b").unwrap())
                .severity(RuleSeverity::Error),
            Rule::new("T3", "quiet", "quiet", RegexMatcher::parse("c").unwrap())
                .severity(RuleSeverity::Off),
        ]);
        let config = Config::parse(
            "[rules.dormant]\nenabled = true\n[rules.loud]\nenabled = true\n[rules.T3]\nenabled = true\nseverity = \"error\"\n",
        )
        .unwrap();
        config.apply(&mut set);
        assert_eq!(set.get("dormant").map(Rule::rule_severity), Some(RuleSeverity::Warning));
        assert_eq!(set.get("loud").map(Rule::rule_severity), Some(RuleSeverity::Error));
        assert_eq!(set.get("quiet").map(Rule::rule_severity), Some(RuleSeverity::Error));
    }

    #[test]
    fn test_unknown_entries_leave_rules_untouched() {
        let mut set = RuleSet::new("test").with_rules([Rule::new(
            "T1",
            "one",
            "one",
            RegexMatcher::parse("a").unwrap(),
        )]);
        let before = set.get("one").map(Rule::rule_severity);
        for toml in ["[rules.ghost]\n", "[rules.ghost]\nenabled = true\n", "[rules.ghost]\nseverity = \"off\"\n"] {
            Config::parse(toml).unwrap().apply(&mut set);
            assert_eq!(set.get("one").map(Rule::rule_severity), before, "{toml}");
            assert!(set.get("ghost").is_none());
        }
    }

    #[test]
    fn unknown_dialect_message() {
        let err = ConfigError::UnknownDialect {
            name: "nonsense".into(),
            known: vec!["default", "ublock"],
        };
        assert_eq!(
            err.to_string(),
            "Unknown dialect 'nonsense' (expected one of: default, ublock)"
        );
    }
}
