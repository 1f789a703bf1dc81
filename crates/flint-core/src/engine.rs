//! The rule engine: lines × rules → ordered diagnostics.

use crate::message::Message;
use crate::rule::Rule;
use crate::rule_set::RuleSet;
use crate::types::{Diagnostic, FileReport, Severity};

use std::path::Path;
use tracing::{debug, trace};

/// Run-mode switches for an engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunMode {
    /// Evaluate only rules that report errors.
    pub errors_only: bool,
}

/// Evaluates a fixed rule set against lines.
///
/// The active rules are computed once at construction. Diagnostics come out
/// in line order and, within a line, in rule declaration order.
#[derive(Debug)]
pub struct Engine<'a> {
    rules: Vec<(&'a Rule, Severity)>,
}

impl<'a> Engine<'a> {
    /// Creates an engine for `rule_set` under `mode`.
    ///
    /// Rules tagged `off` are dropped first, then the `only` restriction is
    /// applied, then `errors_only` drops every rule not reporting errors.
    #[must_use]
    pub fn new(rule_set: &'a RuleSet, mode: RunMode) -> Self {
        let rules = rule_set
            .effective()
            .into_iter()
            .filter_map(|rule| {
                let Some(severity) = rule.rule_severity().reported() else {
                    debug!("Skipping disabled rule: {}", rule.name());
                    return None;
                };
                if mode.errors_only && severity != Severity::Error {
                    debug!("Skipping non-error rule: {}", rule.name());
                    return None;
                }
                Some((rule, severity))
            })
            .collect();

        Self { rules }
    }

    /// Returns the number of rules that will be evaluated.
    #[must_use]
    pub fn active_rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Names of the rules that will be evaluated, in order.
    pub fn active_rules(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.rules.iter().map(|(rule, _)| rule.name())
    }

    /// Lints numbered lines belonging to `file`.
    pub fn run<'l, I>(&self, file: &Path, lines: I) -> FileReport
    where
        I: IntoIterator<Item = (usize, &'l str)>,
    {
        let mut report = FileReport::new(file);

        for (number, text) in lines {
            for &(rule, severity) in &self.rules {
                let Some(captures) = rule.try_match(text) else {
                    continue;
                };
                trace!("{}:{} matched {}", file.display(), number, rule.name());

                report.push(Diagnostic {
                    file: file.to_path_buf(),
                    line: number,
                    severity,
                    code: rule.code().to_string(),
                    rule: rule.name().to_string(),
                    message: Message::render(rule.template(), &captures),
                    text: text.to_string(),
                });
            }
        }

        report
    }

    /// Lints decoded file content.
    pub fn run_source(&self, file: &Path, content: &str) -> FileReport {
        self.run(file, crate::source::lines(content))
    }
}
