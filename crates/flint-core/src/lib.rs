//! # flint-core
//!
//! Core framework for linting ad-blocking filter lists.
//!
//! This crate provides the pieces that do the grammar and rule work:
//!
//! - [`extract`] functions that pull URL patterns, options and domains out
//!   of a single line without a full filter parser
//! - [`Rule`] descriptors built on the [`Matcher`] capability
//! - [`RuleSet`] for an ordered, dialect-specific rule list
//! - [`Engine`] that evaluates rules line by line into [`Diagnostic`]s
//! - [`Linter`] for configuring and running whole files
//!
//! ## Example
//!
//! ```ignore
//! use flint_core::Linter;
//!
//! let linter = Linter::builder()
//!     .rule_set(flint_rules::load(None)?)
//!     .build()?;
//!
//! let report = linter.lint_str("list.txt", "  ||ads.example^\n");
//! assert!(!report.has_errors);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod engine;
pub mod extract;
mod linter;
mod message;
mod rule;
mod rule_set;
pub mod source;
mod types;

pub use config::{Config, ConfigError, RuleConfig};
pub use engine::{Engine, RunMode};
pub use extract::{LineKind, OptionEntry};
pub use linter::{LintError, Linter, LinterBuilder};
pub use message::{Captures, Message, Segment};
pub use rule::{FnMatcher, Matcher, RegexMatcher, Rule};
pub use rule_set::RuleSet;
pub use types::{Diagnostic, FileReport, LineReport, LintResult, RuleSeverity, Severity};
