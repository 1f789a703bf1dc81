//! Check command implementation.

use anyhow::{Context, Result};
use flint_core::{LintResult, Linter};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Name used for standard input in reports.
const STDIN_NAME: &str = "<stdin>";

/// Flags of the check command.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Dialect from the command line; overrides the config file.
    pub dialect: Option<String>,
    /// Forces errors-only mode on.
    pub errors_only: bool,
    /// Rules to mark `only`.
    pub only: Vec<String>,
    /// Output format.
    pub format: OutputFormat,
}

/// Runs the check command.
///
/// # Errors
///
/// Returns an error if the configuration or dialect is invalid or an input
/// cannot be read.
pub fn run(files: &[PathBuf], options: &CheckOptions, source: &ConfigSource) -> Result<ExitCode> {
    let linter = build_linter(options, source)?;

    let result = lint_inputs(&linter, files)?;

    super::output::print(&result, options.format)?;

    if result.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn build_linter(options: &CheckOptions, source: &ConfigSource) -> Result<Linter> {
    let config = source.load()?;

    let dialect = options.dialect.as_deref().or(config.dialect.as_deref());
    let rule_set = flint_rules::load(dialect).context("Invalid dialect")?;

    let mut builder = Linter::builder().rule_set(rule_set).config(config);
    for id in &options.only {
        builder = builder.only(id.trim());
    }
    if options.errors_only {
        builder = builder.errors_only(true);
    }

    builder.build().context("Invalid rule selection")
}

fn lint_inputs(linter: &Linter, files: &[PathBuf]) -> Result<LintResult> {
    let reads_stdin = files.is_empty() || files.iter().any(|f| f == Path::new("-"));
    if !reads_stdin {
        return Ok(linter.lint_files(files)?);
    }

    let stdin_only = [PathBuf::from("-")];
    let inputs = if files.is_empty() { &stdin_only[..] } else { files };

    tracing::info!(
        "Linting {} input(s) with dialect {} ({} rules)",
        inputs.len(),
        linter.rule_set().dialect(),
        linter.active_rule_count()
    );

    let mut result = LintResult::new();
    for input in inputs {
        let report = if input == Path::new("-") {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read standard input")?;
            linter.lint_str(STDIN_NAME, &content)
        } else {
            linter.lint_file(input)?
        };
        result.push(report);
    }

    Ok(result)
}
