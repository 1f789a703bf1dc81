//! # flint-rules
//!
//! Built-in lint rules and dialects for flint.
//!
//! Rules are plain [`Rule`] values assembled into one [`RuleSet`] per
//! dialect. Codes are shared across dialects for the same check.
//!
//! ## Available Rules
//!
//! | Code | Name | Default | Description |
//! |------|------|---------|-------------|
//! | FL001 | `leading-whitespace` | warning | Line starts with whitespace |
//! | FL002 | `trailing-whitespace` | warning | Non-comment line ends with whitespace |
//! | FL003 | `leading-asterisk` | off | Filter starts with `*` |
//! | FL004 | `single-character-filter` | error | Whole filter is one character |
//! | FL005 | `looks-like-host` | warning / error (ublock) | Unanchored pattern is a bare hostname |
//! | FL006 | `blank-domain` | error | Empty domain entry |
//! | FL007 | `domain-whitespace` | error | Domain entry contains whitespace |
//! | FL008 | `domain-non-hostname-character` | error | Domain entry contains a non-hostname character |
//! | FL009 | `redundant-sole-wildcard` | warning (default) | `*$options` |
//! | FL010 | `redundant-sole-anchor` | warning (default) | `\|$options` |
//! | FL011 | `invalid-option` | error | Option not in the dialect's vocabulary |
//! | FL012 | `non-standard-alias` | error (default) | Option is a shorthand alias |
//! | FL013 | `experimental-option` | warning | Option is experimental |
//! | FL014 | `mixed-case-option` | warning | Option name is not lowercase |
//! | FL015 | `option-whitespace` | error | Option name contains whitespace |
//! | FL016 | `url-pattern-too-short` | off | Pattern shorter than three characters |
//! | FL017 | `url-pattern-whitespace` | error | Pattern contains whitespace |
//!
//! ## Usage
//!
//! ```ignore
//! use flint_core::Linter;
//!
//! let linter = Linter::builder()
//!     .rule_set(flint_rules::load(Some("ublock"))?)
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dialect;
pub mod domains;
pub mod lines;
pub mod options;
pub mod patterns;
pub mod vocabulary;

pub use dialect::{load, Dialect};
pub use vocabulary::Vocabulary;

/// Re-export core types for convenience.
pub use flint_core::{ConfigError, Rule, RuleSet, RuleSeverity};
