//! Rule definitions and the matcher capability.

use crate::message::Captures;
use crate::types::RuleSeverity;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Something that can test a single line.
///
/// A successful match returns ordered captures: element 0 is the matched
/// text, elements `1..` are sub-fields used by the rule's message template.
/// Matchers are pure functions of the line text.
///
/// # Example
///
/// ```ignore
/// use flint_core::{FnMatcher, Matcher};
///
/// let matcher = FnMatcher::new(|line: &str| {
///     line.contains("ads").then(|| vec![Some(line.to_string())])
/// });
/// assert!(matcher.try_match("/ads/").is_some());
/// ```
pub trait Matcher: Send + Sync {
    /// Tests `line`, returning captures on a match.
    fn try_match(&self, line: &str) -> Option<Captures>;
}

/// Matcher backed by a regular expression.
///
/// Captures mirror the regex groups; groups that did not participate are
/// `None`.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    /// Wraps a compiled regex.
    #[must_use]
    pub fn new(regex: Regex) -> Self {
        Self { regex }
    }

    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid regex.
    pub fn parse(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::new)
    }
}

impl Matcher for RegexMatcher {
    fn try_match(&self, line: &str) -> Option<Captures> {
        let caps = self.regex.captures(line)?;
        Some(
            caps.iter()
                .map(|m| m.map(|m| m.as_str().to_string()))
                .collect(),
        )
    }
}

/// Matcher backed by a closure.
pub struct FnMatcher<F> {
    f: F,
}

impl<F> FnMatcher<F>
where
    F: Fn(&str) -> Option<Captures> + Send + Sync,
{
    /// Wraps `f`.
    #[must_use]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Matcher for FnMatcher<F>
where
    F: Fn(&str) -> Option<Captures> + Send + Sync,
{
    fn try_match(&self, line: &str) -> Option<Captures> {
        (self.f)(line)
    }
}

/// An immutable rule descriptor: identity, matcher, severity and message
/// template.
#[derive(Clone)]
pub struct Rule {
    code: &'static str,
    name: &'static str,
    description: &'static str,
    severity: RuleSeverity,
    message: &'static str,
    matcher: Arc<dyn Matcher>,
}

impl Rule {
    /// Creates a rule. Severity defaults to `error`, the message to the
    /// description.
    #[must_use]
    pub fn new(
        code: &'static str,
        name: &'static str,
        description: &'static str,
        matcher: impl Matcher + 'static,
    ) -> Self {
        Self {
            code,
            name,
            description,
            severity: RuleSeverity::Error,
            message: description,
            matcher: Arc::new(matcher),
        }
    }

    /// Sets the severity.
    #[must_use]
    pub fn severity(mut self, severity: RuleSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the message template (`{i}` placeholders refer to captures).
    #[must_use]
    pub fn message(mut self, template: &'static str) -> Self {
        self.message = template;
        self
    }

    /// Returns the rule code (e.g., "FL001").
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Returns the kebab-case name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns a brief description of what this rule checks.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Returns the severity tag.
    #[must_use]
    pub fn rule_severity(&self) -> RuleSeverity {
        self.severity
    }

    /// Returns the message template.
    #[must_use]
    pub fn template(&self) -> &'static str {
        self.message
    }

    /// Runs the matcher on `line`.
    #[must_use]
    pub fn try_match(&self, line: &str) -> Option<Captures> {
        self.matcher.try_match(line)
    }

    /// Whether this rule answers to `id`, either its name or its code.
    #[must_use]
    pub fn is(&self, id: &str) -> bool {
        self.name == id || self.code.eq_ignore_ascii_case(id)
    }

    pub(crate) fn set_severity(&mut self, severity: RuleSeverity) {
        self.severity = severity;
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("severity", &self.severity)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
