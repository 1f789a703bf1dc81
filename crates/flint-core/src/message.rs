//! Positional message templates.
//!
//! A rule message such as `"Domain {1} contains non-hostname character {2}"`
//! is filled from the rule's match captures. Rendering keeps one decision per
//! placeholder so a reporter can style values without re-parsing text:
//!
//! - missing capture: the placeholder stays as literal `{i}`
//! - whitespace-only capture: shown quoted, so it stays visible
//! - anything else: the trimmed value, emphasised by the reporter

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{(\d+)\}").unwrap());

/// Ordered match captures. Element 0 is the matched text, the rest are
/// sub-fields; a `None` element is a capture that did not participate.
pub type Captures = Vec<Option<String>>;

/// One piece of a rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Template text between placeholders.
    Text(String),
    /// Placeholder whose capture is absent; rendered as `{index}`.
    Unfilled(usize),
    /// Capture made only of whitespace (possibly empty).
    Blank(String),
    /// Trimmed capture value.
    Value(String),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) | Self::Value(text) => f.write_str(text),
            Self::Unfilled(index) => write!(f, "{{{index}}}"),
            Self::Blank(text) => write!(f, "'{text}'"),
        }
    }
}

/// A message rendered from a template and captures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    segments: Vec<Segment>,
}

impl Message {
    /// Renders `template` against `captures`.
    #[must_use]
    pub fn render(template: &str, captures: &[Option<String>]) -> Self {
        let mut segments = Vec::new();
        let mut last = 0;

        for caps in PLACEHOLDER_RE.captures_iter(template) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Text(template[last..whole.start()].to_string()));
            }
            last = whole.end();

            let index = caps[1].parse::<usize>().ok();
            let capture = index.and_then(|i| captures.get(i)).and_then(Option::as_deref);

            segments.push(match (index, capture) {
                (_, Some(value)) if value.trim().is_empty() => Segment::Blank(value.to_string()),
                (_, Some(value)) => Segment::Value(value.trim().to_string()),
                (Some(i), None) => Segment::Unfilled(i),
                // Index too large for usize; keep the raw token.
                (None, None) => Segment::Text(whole.as_str().to_string()),
            });
        }

        if last < template.len() {
            segments.push(Segment::Text(template[last..].to_string()));
        }

        Self { segments }
    }

    /// Creates a message holding plain text.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Text(text.into())],
        }
    }

    /// Returns the rendered segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
