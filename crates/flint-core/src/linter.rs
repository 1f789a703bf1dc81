//! File-level orchestration of lint runs.

use crate::config::{Config, ConfigError};
use crate::engine::{Engine, RunMode};
use crate::rule_set::RuleSet;
use crate::types::{FileReport, LintResult, RuleSeverity};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while linting.
#[derive(Debug, Error)]
pub enum LintError {
    /// A filter list could not be read or decoded.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Builder for configuring a [`Linter`].
#[derive(Debug, Default)]
pub struct LinterBuilder {
    rule_set: Option<RuleSet>,
    config: Option<Config>,
    only: Vec<String>,
    errors_only: Option<bool>,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule set to run.
    #[must_use]
    pub fn rule_set(mut self, rule_set: RuleSet) -> Self {
        self.rule_set = Some(rule_set);
        self
    }

    /// Sets the configuration whose per-rule overrides and run mode apply.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Marks a rule (name or code) as `only`.
    #[must_use]
    pub fn only(mut self, rule: impl Into<String>) -> Self {
        self.only.push(rule.into());
        self
    }

    /// Sets errors-only mode, overriding the configuration.
    #[must_use]
    pub fn errors_only(mut self, errors_only: bool) -> Self {
        self.errors_only = Some(errors_only);
        self
    }

    /// Builds the linter.
    ///
    /// Overrides are applied in order: configuration file first, then
    /// `only` rules.
    ///
    /// # Errors
    ///
    /// Returns an error if an `only` rule does not exist in the rule set.
    pub fn build(self) -> Result<Linter, LintError> {
        let config = self.config.unwrap_or_default();
        let mut rule_set = self.rule_set.unwrap_or_default();

        config.apply(&mut rule_set);

        for id in &self.only {
            if !rule_set.set_severity(id, RuleSeverity::Only) {
                return Err(ConfigError::UnknownRule {
                    name: id.clone(),
                    dialect: rule_set.dialect().to_string(),
                }
                .into());
            }
        }

        let mode = RunMode {
            errors_only: self
                .errors_only
                .or(config.errors_only)
                .unwrap_or(false),
        };

        Ok(Linter { rule_set, mode })
    }
}

/// Lints filter lists with a fixed rule set and run mode.
///
/// Use [`Linter::builder()`] to construct an instance.
#[derive(Debug)]
pub struct Linter {
    rule_set: RuleSet,
    mode: RunMode,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the rule set after overrides.
    #[must_use]
    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Returns the run mode.
    #[must_use]
    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Returns the number of rules each line is checked against.
    #[must_use]
    pub fn active_rule_count(&self) -> usize {
        self.engine().active_rule_count()
    }

    /// Lints decoded content identified as `file`.
    #[must_use]
    pub fn lint_str(&self, file: impl AsRef<Path>, content: &str) -> FileReport {
        self.lint_with(&self.engine(), file.as_ref(), content)
    }

    /// Reads and lints one file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read as UTF-8 text.
    pub fn lint_file(&self, path: &Path) -> Result<FileReport, LintError> {
        let content = read(path)?;
        Ok(self.lint_str(path, &content))
    }

    /// Reads and lints several files, each independently.
    ///
    /// # Errors
    ///
    /// Returns the first read error; no partial result is returned.
    pub fn lint_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<LintResult, LintError> {
        let engine = self.engine();
        info!(
            "Linting {} file(s) with dialect {} ({} rules)",
            paths.len(),
            self.rule_set.dialect(),
            engine.active_rule_count()
        );
        debug!("Active rules: {}", engine.active_rules().collect::<Vec<_>>().join(", "));

        let mut result = LintResult::new();
        for path in paths {
            let path = path.as_ref();
            let content = read(path)?;
            result.push(self.lint_with(&engine, path, &content));
        }

        let (errors, warnings) = result.count_by_severity();
        info!(
            "Lint complete: {} error(s), {} warning(s) in {} file(s)",
            errors,
            warnings,
            result.files_checked()
        );

        Ok(result)
    }

    fn engine(&self) -> Engine<'_> {
        Engine::new(&self.rule_set, self.mode)
    }

    fn lint_with(&self, engine: &Engine<'_>, file: &Path, content: &str) -> FileReport {
        debug!("Linting: {}", file.display());
        if crate::source::has_header(content) {
            debug!("Skipping dialect header in {}", file.display());
        }
        engine.run_source(file, content)
    }
}

fn read(path: &Path) -> Result<String, LintError> {
    std::fs::read_to_string(path).map_err(|e| LintError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
