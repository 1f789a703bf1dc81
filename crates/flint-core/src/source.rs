//! Splitting decoded filter-list text into numbered lines.

use regex::Regex;
use std::sync::LazyLock;

/// Dialect-version header such as `[Adblock Plus 2.0]`.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[Adblock Plus [0-9]+(?:\.[0-9]+)*\][ \t]*(?:\r?\n|$)").unwrap());

/// UTF-8 byte order mark, kept by `read_to_string`.
const BOM: char = '\u{feff}';

/// Returns the numbered lines of `content`.
///
/// Both `\n` and `\r\n` terminators are accepted. A leading
/// `[Adblock Plus X.Y]` header is skipped; numbering still follows the
/// physical lines of the file, so the first linted line is then line 2. A
/// trailing terminator produces a final empty line. A leading byte order
/// mark is dropped.
#[must_use]
pub fn lines(content: &str) -> Vec<(usize, &str)> {
    let content = strip_bom(content);
    let (first, body) = match HEADER_RE.find(content) {
        Some(header) => (2, &content[header.end()..]),
        None => (1, content),
    };

    if first == 2 && body.is_empty() && !content.ends_with('\n') {
        // Header was the whole file.
        return Vec::new();
    }

    body.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .map(|(i, line)| (i + first, line))
        .collect()
}

/// Returns true if `content` starts with a dialect-version header.
#[must_use]
pub fn has_header(content: &str) -> bool {
    HEADER_RE.is_match(strip_bom(content))
}

fn strip_bom(content: &str) -> &str {
    content.strip_prefix(BOM).unwrap_or(content)
}
