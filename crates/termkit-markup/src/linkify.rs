//! URL autolinking, the final pipeline stage.
//!
//! Runs after tag substitution so link text is not re-parsed for tag syntax
//! and the generated anchor markup is not itself escaped. The character
//! class excludes angle brackets and quotes, so a URL abutting generated
//! element markup stops at the element boundary.

use regex::Regex;
use std::sync::OnceLock;

/// Match `http://` or `https://` followed by one or more characters that are
/// not whitespace, angle brackets, or quotes. Compiled once.
fn url_regex() -> &'static Regex {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    URL_REGEX.get_or_init(|| Regex::new(r#"https?://[^\s<>"']+"#).expect("invalid URL regex"))
}

/// Wrap URL matches in anchor elements, appending to the output buffer.
///
/// Each anchor opens in a new tab, carries `rel="noopener noreferrer"`, and
/// exposes a `<prefix>-link` class as the styling hook.
pub fn linkify_into(out: &mut String, s: &str, class_prefix: &str) {
    let mut last = 0usize;
    for m in url_regex().find_iter(s) {
        out.push_str(&s[last..m.start()]);
        let url = m.as_str();
        out.push_str("<a href=\"");
        out.push_str(url);
        out.push_str("\" class=\"");
        out.push_str(class_prefix);
        out.push_str("-link\" target=\"_blank\" rel=\"noopener noreferrer\">");
        out.push_str(url);
        out.push_str("</a>");
        last = m.end();
    }
    out.push_str(&s[last..]);
}

/// Wrap URL matches in anchor elements, returning a new string.
#[must_use]
pub fn linkify(s: &str, class_prefix: &str) -> String {
    let mut out = String::with_capacity(s.len() + 64);
    linkify_into(&mut out, s, class_prefix);
    out
}
