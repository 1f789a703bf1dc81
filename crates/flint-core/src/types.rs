//! Core types for lint diagnostics and results.

use crate::message::Message;
use miette::{LabeledSpan, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity of a reported diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reported, does not fail the run.
    Warning,
    /// Fails the run.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Severity tag carried by a rule definition.
///
/// `Off` and `Only` control which rules run; they never appear on a
/// [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    /// Matches are errors.
    Error,
    /// Matches are warnings.
    Warning,
    /// Rule is disabled.
    Off,
    /// Rule runs exclusively with the other `only` rules; matches are errors.
    Only,
}

impl RuleSeverity {
    /// Returns the severity a match of this rule is reported with.
    #[must_use]
    pub fn reported(self) -> Option<Severity> {
        match self {
            Self::Error | Self::Only => Some(Severity::Error),
            Self::Warning => Some(Severity::Warning),
            Self::Off => None,
        }
    }
}

impl std::fmt::Display for RuleSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Off => write!(f, "off"),
            Self::Only => write!(f, "only"),
        }
    }
}

/// One rule match against one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// File the line belongs to.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Reported severity.
    pub severity: Severity,
    /// Rule code (e.g., "FL001").
    pub code: String,
    /// Rule name (e.g., "leading-whitespace").
    pub rule: String,
    /// Rendered message.
    pub message: Message,
    /// The raw line text.
    pub text: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}] {}",
            self.file.display(),
            self.line,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// Result of linting a single file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileReport {
    /// File identifier.
    pub file: PathBuf,
    /// Diagnostics in line order, then rule order.
    pub diagnostics: Vec<Diagnostic>,
    /// Whether any error-severity diagnostic occurred.
    pub has_errors: bool,
}

impl FileReport {
    /// Creates an empty report for `file`.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    /// Records a diagnostic, updating the error flag.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity == Severity::Error {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }
}

/// Result of linting one or more files.
#[derive(Debug, Default, Serialize)]
pub struct LintResult {
    /// Per-file reports in the order files were linted.
    pub files: Vec<FileReport>,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any file had an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.files.iter().any(|f| f.has_errors)
    }

    /// Iterates over all diagnostics, file by file.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.files.iter().flat_map(|f| f.diagnostics.iter())
    }

    /// Returns the number of files linted.
    #[must_use]
    pub fn files_checked(&self) -> usize {
        self.files.len()
    }

    /// Counts diagnostics as `(errors, warnings)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        self.diagnostics()
            .fold((0, 0), |(errors, warnings), d| match d.severity {
                Severity::Error => (errors + 1, warnings),
                Severity::Warning => (errors, warnings + 1),
            })
    }

    /// Adds a file report.
    pub fn push(&mut self, report: FileReport) {
        self.files.push(report);
    }
}

/// A [`Diagnostic`] shaped for `miette` graphical rendering.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct LineReport {
    message: String,
    code: String,
    rule: String,
    severity: Severity,
    snippet: NamedSource<String>,
    span: SourceSpan,
}

impl From<&Diagnostic> for LineReport {
    fn from(d: &Diagnostic) -> Self {
        let start = d.text.len() - d.text.trim_start().len();
        let len = d.text.trim().len();
        Self {
            message: d.message.to_string(),
            code: d.code.clone(),
            rule: d.rule.clone(),
            severity: d.severity,
            snippet: NamedSource::new(format!("{}:{}", d.file.display(), d.line), d.text.clone()),
            span: SourceSpan::from((start, len)),
        }
    }
}

impl miette::Diagnostic for LineReport {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(&self.code))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        })
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.snippet)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.rule.clone()),
            self.span,
        ))))
    }
}
