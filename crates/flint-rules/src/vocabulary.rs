//! Option vocabularies for each dialect.
//!
//! Names are lowercase and carry their `~` negation explicitly: an option
//! that cannot be inverted appears only without `~`.

/// Content types that may be inverted with `~`.
#[rustfmt::skip]
const CONTENT_TYPES: &[&str] = &[
    "other", "~other",
    "script", "~script",
    "image", "~image",
    "stylesheet", "~stylesheet",
    "object", "~object",
    "subdocument", "~subdocument",
    "websocket", "~websocket",
    "webrtc", "~webrtc",
    "ping", "~ping",
    "xmlhttprequest", "~xmlhttprequest",
    "media", "~media",
    "font", "~font",
];

/// Options considered experimental in every dialect.
pub const EXPERIMENTAL_OPTIONS: &[&str] = &["header"];

/// Shorthand aliases Adblock Plus accepts but does not document as standard.
#[rustfmt::skip]
pub const DEFAULT_ALIASES: &[&str] = &[
    "css", "~css",
    "frame", "~frame",
    "xhr", "~xhr",
    "doc",
    "ehide",
    "ghide",
    "3p", "~3p",
    "1p", "~1p",
    "first-party", "~first-party",
];

/// Adblock Plus options other than content types and aliases.
#[rustfmt::skip]
const DEFAULT_EXTRA: &[&str] = &[
    "popup",
    "csp",
    "rewrite",
    "document",
    "genericblock",
    "elemhide",
    "generichide",
    "domain",
    "third-party", "~third-party",
    "match-case", "~match-case",
];

/// Aliases understood by uBlock Origin.
#[rustfmt::skip]
pub const UBLOCK_ALIASES: &[&str] = &[
    "css", "~css",
    "frame", "~frame",
    "xhr", "~xhr",
    "doc",
    "ehide",
    "ghide",
    "shide",
    "3p", "~3p",
    "1p", "~1p",
    "first-party", "~first-party",
];

/// uBlock Origin options other than content types and aliases.
#[rustfmt::skip]
const UBLOCK_EXTRA: &[&str] = &[
    "popup",
    "popunder",
    "cname",
    "document",
    "inline-script",
    "inline-font",
    "all",
    "csp",
    "empty",
    "mp4",
    "redirect",
    "redirect-rule",
    "removeparam",
    "elemhide",
    "generichide",
    "specifichide",
    "domain",
    "third-party", "~third-party",
    "match-case", "~match-case",
    "strict3p", "~strict3p",
    "strict1p", "~strict1p",
    "denyallow",
    "badfilter",
    "important",
];

/// A dialect's option whitelist.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    groups: &'static [&'static [&'static str]],
}

impl Vocabulary {
    /// Adblock Plus vocabulary.
    pub const DEFAULT: Self = Self {
        groups: &[CONTENT_TYPES, DEFAULT_EXTRA, EXPERIMENTAL_OPTIONS, DEFAULT_ALIASES],
    };

    /// uBlock Origin vocabulary.
    pub const UBLOCK: Self = Self {
        groups: &[CONTENT_TYPES, UBLOCK_EXTRA, EXPERIMENTAL_OPTIONS, UBLOCK_ALIASES],
    };

    /// Whether `name` (already compacted and lowercased) is valid.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.groups.iter().any(|group| group.contains(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabulary() {
        let v = Vocabulary::DEFAULT;
        for name in ["script", "~script", "domain", "header", "xhr", "~third-party"] {
            assert!(v.contains(name), "{name}");
        }
        for name in ["~popup", "redirect", "important", "shide", "Script"] {
            assert!(!v.contains(name), "{name}");
        }
    }

    #[test]
    fn ublock_vocabulary() {
        let v = Vocabulary::UBLOCK;
        for name in ["redirect-rule", "important", "shide", "~strict3p", "all"] {
            assert!(v.contains(name), "{name}");
        }
        for name in ["rewrite", "genericblock", "~important"] {
            assert!(!v.contains(name), "{name}");
        }
    }
}
