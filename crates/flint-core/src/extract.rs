//! Structural field extraction for filter-list lines.
//!
//! Filter syntax is lenient and overlapping: cosmetic and network filters
//! share prefixes, and option lists carry no escaping. Rather than parsing a
//! full AST, these functions pull out just the fields lint rules look at:
//!
//! - the URL pattern of a network filter
//! - the `$`-option list of a network filter
//! - the domain list of a cosmetic filter or of a `domain=` option
//!
//! Every function is total and reads only the line it is given. A field that
//! does not apply to the line yields `None`, which is distinct from an empty
//! list. Surrounding whitespace of the whole line is ignored (it has rules of
//! its own) but whitespace inside fields is preserved so rules can see it.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Cosmetic separator (`##`, `#@#`, `#?#`, `#$#`) not preceded by an anchor,
/// path or quote character. Group 1 is the domain prefix.
static COSMETIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^([^/|@"!]*?)#[@?$]?#.+"#).unwrap());

/// Trailing `$`-option suffix of a network filter.
static OPTIONS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\$\s*~?[\s0-9A-Za-z_-]+(?:=[^,]*)?(?:\s*,\s*~?[\s0-9A-Za-z_-]+(?:=[^,]*)?)*$",
    )
    .unwrap()
});

/// One comma-separated entry of an option suffix.
static OPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(~?[\s0-9A-Za-z_-]+)(?:=([^,]*))?").unwrap());

/// Kind of a filter-list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Empty or whitespace-only.
    Blank,
    /// Starts with `!` after optional whitespace.
    Comment,
    /// Element hiding / styling filter.
    Cosmetic,
    /// URL filter, optionally an `@@` exception with options.
    Network,
}

/// A single `$`-option of a network filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionEntry<'a> {
    /// Option name as written, including a leading `~` and any whitespace.
    pub name: &'a str,
    /// Raw value up to the next comma, if the option has `=`.
    pub value: Option<&'a str>,
}

impl<'a> OptionEntry<'a> {
    /// Creates an option entry.
    #[must_use]
    pub fn new(name: &'a str, value: Option<&'a str>) -> Self {
        Self { name, value }
    }

    /// Returns the name with all whitespace removed.
    #[must_use]
    pub fn compact_name(&self) -> String {
        strip_whitespace(self.name)
    }
}

/// Classifies a line.
#[must_use]
pub fn classify(line: &str) -> LineKind {
    let line = line.trim();

    if line.is_empty() {
        LineKind::Blank
    } else if line.starts_with('!') {
        LineKind::Comment
    } else if COSMETIC_RE.is_match(line) {
        LineKind::Cosmetic
    } else {
        LineKind::Network
    }
}

/// Extracts the URL pattern of a network filter.
///
/// The `@@` exception marker and the option suffix are removed; nothing else
/// is trimmed, so `"a $script"` yields `"a "`.
#[must_use]
pub fn extract_pattern(line: &str) -> Option<&str> {
    let line = line.trim();

    if classify(line) != LineKind::Network {
        return None;
    }

    let line = line.strip_prefix("@@").unwrap_or(line);

    match OPTIONS_RE.find(line) {
        Some(options) => Some(&line[..options.start()]),
        None => Some(line),
    }
}

/// Extracts the option list of a network filter.
///
/// Returns `None` for non-network lines and for network filters without an
/// option suffix. Values end at the next comma: there is no escaping.
#[must_use]
pub fn extract_options(line: &str) -> Option<Vec<OptionEntry<'_>>> {
    let line = line.trim();

    if classify(line) != LineKind::Network {
        return None;
    }

    let suffix = OPTIONS_RE.find(line)?.as_str();
    Some(split_options(&suffix[1..]))
}

/// Extracts the domain list of a line.
///
/// For cosmetic filters this is the comma-separated prefix before the
/// separator (`None` when the prefix is empty). For network filters it is the
/// `|`-separated value of the first `domain=` option.
#[must_use]
pub fn extract_domains(line: &str) -> Option<Vec<&str>> {
    let line = line.trim();

    match classify(line) {
        LineKind::Blank | LineKind::Comment => None,
        LineKind::Cosmetic => {
            let prefix = COSMETIC_RE.captures(line)?.get(1)?.as_str();
            if prefix.is_empty() {
                None
            } else {
                Some(prefix.split(',').collect())
            }
        }
        LineKind::Network => extract_options(line)?
            .into_iter()
            .find(|option| option.compact_name() == "domain" && option.value.is_some())
            .and_then(|option| option.value)
            .map(|value| value.split('|').collect()),
    }
}

/// Removes every whitespace character from `text`.
#[must_use]
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn split_options(body: &str) -> Vec<OptionEntry<'_>> {
    body.split(',')
        .filter_map(|option| {
            let caps = OPTION_RE.captures(option)?;
            let name = caps.get(1)?.as_str();
            Some(OptionEntry::new(name, caps.get(2).map(|m| m.as_str())))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_lines() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   \t"), LineKind::Blank);
        assert_eq!(classify("! comment"), LineKind::Comment);
        assert_eq!(classify("  !indented"), LineKind::Comment);
        assert_eq!(classify("##.ad"), LineKind::Cosmetic);
        assert_eq!(classify("example.com#@#.ad"), LineKind::Cosmetic);
        assert_eq!(classify("example.com#?#.ad:has(a)"), LineKind::Cosmetic);
        assert_eq!(classify("example.com#$#abort-on-property-read x"), LineKind::Cosmetic);
        assert_eq!(classify("||ads.example^"), LineKind::Network);
        assert_eq!(classify("/ads/#foo##bar"), LineKind::Network);
        assert_eq!(classify("@@||example.com#a##b"), LineKind::Network);
        assert_eq!(classify("##"), LineKind::Network);
    }

    #[test]
    fn comment_lines_have_no_fields() {
        for line in ["!", "! Title: x", "  !$script,domain=a.com", "!example.com##.ad"] {
            assert_eq!(extract_pattern(line), None, "{line}");
            assert_eq!(extract_options(line), None, "{line}");
            assert_eq!(extract_domains(line), None, "{line}");
        }
    }

    #[test]
    fn blank_lines_have_no_fields() {
        assert_eq!(extract_pattern("   "), None);
        assert_eq!(extract_options(""), None);
        assert_eq!(extract_domains(" "), None);
    }

    #[test]
    fn pattern_strips_options_and_exception_marker() {
        assert_eq!(
            extract_pattern("||ads.example^$script,domain=a.com"),
            Some("||ads.example^")
        );
        assert_eq!(extract_pattern("@@||example.com^$document"), Some("||example.com^"));
        assert_eq!(extract_pattern("/banner/*"), Some("/banner/*"));
        assert_eq!(extract_pattern("example.com##.ad"), None);
    }

    #[test]
    fn pattern_keeps_inner_whitespace() {
        assert_eq!(extract_pattern("a $script"), Some("a "));
        assert_eq!(extract_pattern("/ad banner/"), Some("/ad banner/"));
        assert_eq!(extract_pattern("   example.com  "), Some("example.com"));
    }

    #[test]
    fn pattern_ignores_dollar_that_does_not_start_options() {
        assert_eq!(extract_pattern("/price$/"), Some("/price$/"));
        assert_eq!(extract_pattern("a$b$script"), Some("a$b"));
    }

    #[test]
    fn options_are_split_in_order() {
        let options = extract_options("||ads.example^$script,domain=a.com|~b.com").unwrap();
        assert_eq!(
            options,
            vec![
                OptionEntry::new("script", None),
                OptionEntry::new("domain", Some("a.com|~b.com")),
            ]
        );
    }

    #[test]
    fn options_keep_negation_and_whitespace() {
        let options = extract_options("foo$~third-party, scr ipt").unwrap();
        assert_eq!(options[0].name, "~third-party");
        assert_eq!(options[1].name, "scr ipt");
        assert_eq!(options[1].compact_name(), "script");
    }

    #[test]
    fn options_absent_without_suffix() {
        assert_eq!(extract_options("||ads.example^"), None);
        assert_eq!(extract_options("example.com##.ad"), None);
    }

    #[test]
    fn option_value_may_contain_equals() {
        let options = extract_options("foo$csp=script-src 'self'=x").unwrap();
        assert_eq!(options, vec![OptionEntry::new("csp", Some("script-src 'self'=x"))]);
    }

    #[test]
    fn comma_in_value_starts_new_option() {
        // No escaping: the comma ends the value.
        let options = extract_options("foo$csp=a,b").unwrap();
        assert_eq!(
            options,
            vec![OptionEntry::new("csp", Some("a")), OptionEntry::new("b", None)]
        );
    }

    #[test]
    fn cosmetic_domains() {
        assert_eq!(
            extract_domains("example.com,~other.com##.ad"),
            Some(vec!["example.com", "~other.com"])
        );
        assert_eq!(extract_domains("a.com, b.com#@#.ad"), Some(vec!["a.com", " b.com"]));
    }

    #[test]
    fn cosmetic_without_prefix_has_no_domains() {
        assert_eq!(extract_domains("##.ad"), None);
    }

    #[test]
    fn network_domains_come_from_first_domain_option() {
        assert_eq!(
            extract_domains("||ads.example^$script,domain=a.com|~b.com,domain=c.com"),
            Some(vec!["a.com", "~b.com"])
        );
        assert_eq!(
            extract_domains("a$script,domain=x y.com"),
            Some(vec!["x y.com"])
        );
        assert_eq!(extract_domains("||ads.example^$script"), None);
        assert_eq!(extract_domains("||ads.example^$domain"), None);
    }

    #[test]
    fn blank_domain_entries_are_preserved() {
        assert_eq!(extract_domains("a.com,,b.com##.ad"), Some(vec!["a.com", "", "b.com"]));
        assert_eq!(extract_domains("foo$domain=a.com|"), Some(vec!["a.com", ""]));
    }

    #[test]
    fn extraction_is_repeatable() {
        let line = "@@||x.example^$~script,domain=a.com";
        assert_eq!(extract_options(line), extract_options(line));
        assert_eq!(extract_domains(line), extract_domains(line));
        assert_eq!(extract_pattern(line), extract_pattern(line));
    }
}
