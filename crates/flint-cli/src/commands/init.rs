//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# flint configuration

# Filter-list dialect: "default" (Adblock Plus) or "ublock"
# dialect = "default"

# Evaluate only rules that report errors
# errors_only = false

# Rule configurations, keyed by rule name or code.
# severity is one of "error", "warning", "off" or "only".
# enabled = false turns a rule off; enabled = true turns a rule that is
# off by default on as a warning.
# Run `flint list-rules` to see every rule.

[rules.url-pattern-too-short]
enabled = true

# [rules.leading-whitespace]
# severity = "error"
"#;

/// Runs the init command.
///
/// # Errors
///
/// Returns an error if `flint.toml` exists and `force` is not set, or if the
/// file cannot be written.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("flint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Created flint.toml");
    println!("\nNext steps:");
    println!("  1. Edit flint.toml to configure rules");
    println!("  2. Run: flint check <list.txt>");

    Ok(())
}
