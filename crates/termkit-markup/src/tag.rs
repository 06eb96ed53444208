//! Color-tag substitution, the second pipeline stage.
//!
//! Scans for `{word}` and `{/}` tokens: brace, optional leading slash, zero
//! or more ASCII letters, brace. `{/}` always becomes `</span>`; a word from
//! the fixed vocabulary opens a classed `<span>`; anything else passes
//! through as literal text, so unknown names degrade gracefully instead of
//! failing.
//!
//! Open/close balance is not tracked. Every recognized opener emits an
//! opening element and every closer emits a closing element regardless of
//! matching; malformed input yields malformed but browser-tolerant output.

use regex::Regex;
use std::sync::OnceLock;

/// The closed tag vocabulary of the `{tag}` mini-language.
///
/// Names outside this set are not tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Primary,
    Success,
    Warning,
    Danger,
    Text,
    Bright,
    Muted,
    Tertiary,
    Bold,
}

impl Tag {
    /// All tags, in vocabulary order.
    pub const ALL: [Tag; 9] = [
        Tag::Primary,
        Tag::Success,
        Tag::Warning,
        Tag::Danger,
        Tag::Text,
        Tag::Bright,
        Tag::Muted,
        Tag::Tertiary,
        Tag::Bold,
    ];

    /// Look up a tag by its markup name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "primary" => Some(Self::Primary),
            "success" => Some(Self::Success),
            "warning" => Some(Self::Warning),
            "danger" => Some(Self::Danger),
            "text" => Some(Self::Text),
            "bright" => Some(Self::Bright),
            "muted" => Some(Self::Muted),
            "tertiary" => Some(Self::Tertiary),
            "bold" => Some(Self::Bold),
            _ => None,
        }
    }

    /// The markup name, also used as the CSS class suffix.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Text => "text",
            Self::Bright => "bright",
            Self::Muted => "muted",
            Self::Tertiary => "tertiary",
            Self::Bold => "bold",
        }
    }
}

/// Token pattern: brace, optional leading slash, zero or more ASCII letters,
/// brace. Compiled once.
fn token_regex() -> &'static Regex {
    static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    TOKEN_REGEX.get_or_init(|| Regex::new(r"\{/?[A-Za-z]*\}").expect("invalid token regex"))
}

/// Substitute tag tokens into the output buffer.
///
/// `class_prefix` namespaces the emitted span classes
/// (`<span class="<prefix>-<tag>">`).
pub fn substitute_tags_into(out: &mut String, s: &str, class_prefix: &str) {
    let mut last = 0usize;
    for m in token_regex().find_iter(s) {
        out.push_str(&s[last..m.start()]);
        // Strip the surrounding braces; both are single ASCII bytes.
        let inner = &s[m.start() + 1..m.end() - 1];
        if inner == "/" {
            out.push_str("</span>");
        } else if let Some(tag) = Tag::from_name(inner) {
            out.push_str("<span class=\"");
            out.push_str(class_prefix);
            out.push('-');
            out.push_str(tag.name());
            out.push_str("\">");
        } else {
            // Unknown word: not a tag, keep the token as literal text.
            out.push_str(m.as_str());
        }
        last = m.end();
    }
    out.push_str(&s[last..]);
}

/// Substitute tag tokens, returning a new string.
#[must_use]
pub fn substitute_tags(s: &str, class_prefix: &str) -> String {
    let mut out = String::with_capacity(s.len() + 32);
    substitute_tags_into(&mut out, s, class_prefix);
    out
}
