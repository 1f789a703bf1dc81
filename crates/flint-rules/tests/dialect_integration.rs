//! Integration test: built-in dialects end-to-end via Linter.
//!
//! Uses the fixture list under `tests/fixtures/` plus single-line inputs to
//! check rule order, run-mode filtering and dialect differences.

use flint_core::{Config, ConfigError, Diagnostic, Linter, RuleSeverity, Severity};
use flint_rules::{load, Dialect};
use std::path::PathBuf;

fn fixture() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample.txt");
    std::fs::read_to_string(path).expect("fixture should exist")
}

fn linter(dialect: Option<&str>) -> Linter {
    Linter::builder()
        .rule_set(load(dialect).expect("dialect should load"))
        .build()
        .expect("linter should build")
}

fn rules(diagnostics: &[Diagnostic]) -> Vec<(usize, &str)> {
    diagnostics
        .iter()
        .map(|d| (d.line, d.rule.as_str()))
        .collect()
}

fn render(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Single lines ──

#[test]
fn padded_host_reports_three_findings() {
    let report = linter(None).lint_str("list.txt", "   example.com  ");

    assert_eq!(
        rules(&report.diagnostics),
        [
            (1, "leading-whitespace"),
            (1, "trailing-whitespace"),
            (1, "looks-like-host"),
        ]
    );
    assert!(report.diagnostics.iter().all(|d| d.severity == Severity::Warning));
    assert_eq!(report.diagnostics[2].message.to_string(), "example.com looks like a host");
    assert!(!report.has_errors);
}

#[test]
fn padded_host_is_an_error_in_ublock() {
    let report = linter(Some("ublock")).lint_str("list.txt", "   example.com  ");
    let host = report
        .diagnostics
        .iter()
        .find(|d| d.rule == "looks-like-host")
        .expect("should report host");

    assert_eq!(host.severity, Severity::Error);
    assert!(report.has_errors);
}

#[test]
fn domain_whitespace_names_the_domain() {
    let report = linter(None).lint_str("list.txt", "a$script,domain=x y.com");
    let finding = report
        .diagnostics
        .iter()
        .find(|d| d.code == "FL007")
        .expect("should report domain whitespace");

    assert_eq!(finding.severity, Severity::Error);
    assert_eq!(finding.message.to_string(), "Domain x y.com contains whitespace");
    assert_eq!(finding.text, "a$script,domain=x y.com");
    assert!(report.has_errors);
}

#[test]
fn comments_and_blank_lines_are_clean() {
    let report = linter(None).lint_str("list.txt", "! Title: x   \n\n!\n! $Bogus,domain=a b\n");
    assert!(report.diagnostics.is_empty(), "{:#?}", report.diagnostics);
}

#[test]
fn aliases_only_flagged_in_default_dialect() {
    let line = "||ads.example^$3p,xhr";

    let default = linter(None).lint_str("list.txt", line);
    let ublock = linter(Some("ublock")).lint_str("list.txt", line);

    assert_eq!(rules(&default.diagnostics), [(1, "non-standard-alias")]);
    assert_eq!(default.diagnostics[0].message.to_string(), "Non-standard alias 3p");
    assert!(ublock.diagnostics.is_empty());
}

#[test]
fn redundant_prefix_reported_before_domain_checks() {
    let report = linter(None).lint_str("list.txt", "*$domain=a b");
    assert_eq!(
        rules(&report.diagnostics),
        [(1, "redundant-sole-wildcard"), (1, "domain-whitespace")]
    );
}

#[test]
fn unknown_dialect_is_a_configuration_error() {
    let err = load(Some("nonsense")).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownDialect { .. }));
    assert_eq!(
        err.to_string(),
        "Unknown dialect 'nonsense' (expected one of: default, ublock)"
    );
}

// ── Whole file ──

#[test]
fn fixture_findings_in_order() {
    let report = linter(None).lint_str("sample.txt", &fixture());

    insta::assert_snapshot!(render(&report.diagnostics), @r"
    sample.txt:5: warning [FL001] Leading whitespace
    sample.txt:6: warning [FL005] ads.example looks like a host
    sample.txt:7: warning [FL014] Mixed-case option Script
    sample.txt:8: error [FL006] Blank domain
    sample.txt:9: error [FL011] Invalid option bogus
    ");
    assert!(report.has_errors);
}

#[test]
fn errors_only_matches_filtered_full_run() {
    let content = fixture();
    for dialect in Dialect::ALL {
        let full = linter(Some(dialect.name())).lint_str("sample.txt", &content);
        let errors = Linter::builder()
            .rule_set(dialect.rule_set())
            .errors_only(true)
            .build()
            .unwrap()
            .lint_str("sample.txt", &content);

        let filtered: Vec<_> = full
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .cloned()
            .collect();

        assert_eq!(errors.diagnostics, filtered, "dialect {dialect}");
        assert_eq!(errors.has_errors, full.has_errors, "dialect {dialect}");
    }
}

#[test]
fn only_restricts_to_named_rules() {
    let linter = Linter::builder()
        .rule_set(load(None).unwrap())
        .only("leading-whitespace")
        .only("FL014")
        .build()
        .unwrap();
    let report = linter.lint_str("sample.txt", &fixture());

    assert_eq!(
        rules(&report.diagnostics),
        [(5, "leading-whitespace"), (7, "mixed-case-option")]
    );
    assert!(report.diagnostics.iter().all(|d| d.severity == Severity::Error));
    assert!(report.has_errors);
}

#[test]
fn only_survives_errors_only() {
    let linter = Linter::builder()
        .rule_set(load(None).unwrap())
        .only("trailing-whitespace")
        .errors_only(true)
        .build()
        .unwrap();
    let report = linter.lint_str("list.txt", "||a^ \n||b^");

    assert_eq!(rules(&report.diagnostics), [(1, "trailing-whitespace")]);
}

#[test]
fn config_overrides_apply() {
    let config = Config::parse(
        "[rules.leading-whitespace]\nenabled = false\n\n[rules.FL016]\nseverity = \"warning\"\n",
    )
    .unwrap();
    let linter = Linter::builder()
        .rule_set(load(None).unwrap())
        .config(config)
        .build()
        .unwrap();

    assert_eq!(
        linter.rule_set().get("leading-whitespace").unwrap().rule_severity(),
        RuleSeverity::Off
    );
    let report = linter.lint_str("list.txt", " ab$script");
    assert_eq!(
        rules(&report.diagnostics),
        [(1, "looks-like-host"), (1, "url-pattern-too-short")]
    );
}

#[test]
fn repeated_runs_are_identical() {
    let linter = linter(None);
    let content = fixture();
    let first = linter.lint_str("sample.txt", &content);
    let second = linter.lint_str("sample.txt", &content);

    assert_eq!(first.diagnostics, second.diagnostics);
    assert_eq!(first.has_errors, second.has_errors);
}

#[test]
fn byte_order_mark_before_header_is_ignored() {
    let linter = linter(None);

    let report = linter.lint_str("list.txt", "\u{feff}[Adblock Plus 2.0]\n||ads.example^\n");
    assert!(report.diagnostics.is_empty(), "{:#?}", report.diagnostics);

    let plain = linter.lint_str("sample.txt", &fixture());
    let marked = linter.lint_str("sample.txt", &format!("\u{feff}{}", fixture()));
    assert_eq!(plain.diagnostics, marked.diagnostics);
}

#[test]
fn crlf_input_matches_lf_input() {
    let lf = fixture();
    let crlf = lf.replace('\n', "\r\n");
    let linter = linter(None);

    let a = linter.lint_str("sample.txt", &lf);
    let b = linter.lint_str("sample.txt", &crlf);
    assert_eq!(rules(&a.diagnostics), rules(&b.diagnostics));
}
