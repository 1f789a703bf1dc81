//! Ordered rule sets.

use crate::rule::Rule;
use crate::types::RuleSeverity;

/// An ordered list of rules for one dialect.
///
/// Built once and reused for every line of every file.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    dialect: String,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates an empty rule set for `dialect`.
    #[must_use]
    pub fn new(dialect: impl Into<String>) -> Self {
        Self {
            dialect: dialect.into(),
            rules: Vec::new(),
        }
    }

    /// Appends rules, preserving their order.
    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Returns the dialect name.
    #[must_use]
    pub fn dialect(&self) -> &str {
        &self.dialect
    }

    /// Returns all rules in declared order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Looks up a rule by name or code.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.is(id))
    }

    /// Returns the rules a run evaluates.
    ///
    /// If any rule is tagged `only`, exactly those rules in declared order;
    /// otherwise every rule.
    #[must_use]
    pub fn effective(&self) -> Vec<&Rule> {
        let only: Vec<&Rule> = self
            .rules
            .iter()
            .filter(|r| r.rule_severity() == RuleSeverity::Only)
            .collect();

        if only.is_empty() {
            self.rules.iter().collect()
        } else {
            only
        }
    }

    /// Overrides the severity of the rule named `id` (name or code).
    ///
    /// Returns false if no such rule exists.
    pub fn set_severity(&mut self, id: &str, severity: RuleSeverity) -> bool {
        match self.rules.iter_mut().find(|r| r.is(id)) {
            Some(rule) => {
                rule.set_severity(severity);
                true
            }
            None => false,
        }
    }
}
