//! List rules command implementation.

use anyhow::{Context, Result};

use crate::config_resolver::ConfigSource;

/// Runs the list-rules command.
///
/// Severities shown include any overrides from the configuration file.
///
/// # Errors
///
/// Returns an error if the configuration or dialect is invalid.
pub fn run(dialect: Option<String>, source: &ConfigSource) -> Result<()> {
    let config = source.load()?;
    let dialect = dialect.or_else(|| config.dialect.clone());

    let mut rule_set = flint_rules::load(dialect.as_deref()).context("Invalid dialect")?;
    config.apply(&mut rule_set);

    println!("Rules for dialect {}:\n", rule_set.dialect());
    println!("{:<8} {:<32} {:<9} Description", "Code", "Name", "Severity");
    println!("{}", "-".repeat(80));

    for rule in rule_set.rules() {
        println!(
            "{:<8} {:<32} {:<9} {}",
            rule.code(),
            rule.name(),
            rule.rule_severity().to_string(),
            rule.description()
        );
    }

    println!("\nDialects: {}", flint_rules::Dialect::known().join(", "));
    println!("\nUse --only to run specific rules, e.g.:");
    println!("  flint check --only leading-whitespace,FL011 list.txt");

    Ok(())
}
