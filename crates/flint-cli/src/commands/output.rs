//! Shared output formatting for lint results.

use anyhow::Result;
use colored::{ColoredString, Colorize};
use flint_core::{Diagnostic, LineReport, LintResult, Message, Segment, Severity};
use std::fmt::Write as _;

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(result)),
        OutputFormat::Compact => print!("{}", render_compact(result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Pretty => print_pretty(result),
    }
    Ok(())
}

/// `file:line: SEVERITY: message`, then the raw line between blank lines.
fn render_text(result: &LintResult) -> String {
    let mut out = String::new();

    for diagnostic in result.diagnostics() {
        let _ = writeln!(
            out,
            "{}:{}: {}: {}",
            diagnostic.file.display().to_string().bright_black(),
            diagnostic.line,
            severity_label(diagnostic.severity),
            styled_message(&diagnostic.message),
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", diagnostic.text);
        let _ = writeln!(out);
    }

    let (errors, warnings) = result.count_by_severity();
    let summary = format!(
        "Found {} error(s), {} warning(s) in {} file(s)",
        errors,
        warnings,
        result.files_checked()
    );
    let summary = if errors > 0 {
        summary.red()
    } else if warnings > 0 {
        summary.yellow()
    } else {
        summary.green()
    };
    let _ = writeln!(out, "{summary}");

    out
}

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "ERROR".red(),
        Severity::Warning => "WARNING".yellow(),
    }
}

fn styled_message(message: &Message) -> String {
    message
        .segments()
        .iter()
        .map(|segment| match segment {
            Segment::Value(_) | Segment::Blank(_) => segment.to_string().bold().cyan().to_string(),
            Segment::Text(_) | Segment::Unfilled(_) => segment.to_string().bold().to_string(),
        })
        .collect()
}

fn render_compact(result: &LintResult) -> String {
    result
        .diagnostics()
        .map(|diagnostic| format!("{diagnostic}\n"))
        .collect()
}

fn print_pretty(result: &LintResult) {
    for diagnostic in result.diagnostics() {
        println!("{:?}", pretty_report(diagnostic));
    }
    let (errors, warnings) = result.count_by_severity();
    println!("{errors} error(s), {warnings} warning(s)");
}

fn pretty_report(diagnostic: &Diagnostic) -> miette::Report {
    miette::Report::new(LineReport::from(diagnostic))
}
