//! flint CLI tool.
//!
//! Usage:
//! ```bash
//! flint check [OPTIONS] [FILES]...
//! flint list-rules [--dialect D]
//! flint init [--force]
//! ```
//!
//! Exit status is 0 when no error was found, 1 when any file has an
//! error-severity finding and 2 when the run itself failed.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Linter for ad-blocking filter lists
#[derive(Parser)]
#[command(name = "flint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint filter lists
    Check {
        /// Files to lint; `-` or none reads standard input
        files: Vec<PathBuf>,

        /// Filter-list dialect
        #[arg(short, long, env = "FLINT_DIALECT")]
        dialect: Option<String>,

        /// Only evaluate rules that report errors
        #[arg(long)]
        errors_only: bool,

        /// Only run these rules (comma-separated names or codes)
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List the rules of a dialect
    ListRules {
        /// Filter-list dialect
        #[arg(short, long, env = "FLINT_DIALECT")]
        dialect: Option<String>,
    },

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// One-line-per-finding compact format.
    Compact,
    /// JSON output.
    Json,
    /// Graphical report with the offending line as labelled source.
    Pretty,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let source = config_resolver::ConfigSource::discover(&cwd, cli.config.as_deref());

    match cli.command {
        Commands::Check {
            files,
            dialect,
            errors_only,
            only,
            format,
        } => {
            let options = commands::check::CheckOptions {
                dialect,
                errors_only,
                only,
                format,
            };
            commands::check::run(&files, &options, &source)
        }
        Commands::ListRules { dialect } => {
            commands::list_rules::run(dialect, &source)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init { force } => {
            commands::init::run(force)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
