//! HTML entity escaping, the first pipeline stage.
//!
//! Runs before tag substitution so literal angle brackets in source text
//! cannot be reinterpreted as markup once element tags have been inserted,
//! and before autolinking so URL detection sees text in its displayed form.
//!
//! The escaper is idempotent over its own output: an `&` that already
//! starts one of the three entities it emits (`&amp;`, `&lt;`, `&gt;`) is
//! copied through unchanged, so text that has been escaped once is never
//! escaped twice.

use memchr::memchr3;

/// Whether `s` contains any character the escaper inspects.
#[inline]
#[must_use]
pub fn needs_escape(s: &str) -> bool {
    memchr3(b'&', b'<', b'>', s.as_bytes()).is_some()
}

/// Escape `&`, `<`, and `>` into the output buffer.
///
/// An `&` that already begins `&amp;`, `&lt;`, or `&gt;` is left alone
/// (idempotence); any other entity, e.g. `&quot;`, is not recognized and
/// its ampersand is escaped like any other.
pub fn escape_into(out: &mut String, s: &str) {
    for (idx, c) in s.char_indices() {
        match c {
            '&' => {
                let rest = &s[idx..];
                if rest.starts_with("&amp;")
                    || rest.starts_with("&lt;")
                    || rest.starts_with("&gt;")
                {
                    // Already escaped; the entity body is copied by the
                    // following iterations.
                    out.push('&');
                } else {
                    out.push_str("&amp;");
                }
            }
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Escape `&`, `<`, and `>`, returning a new string.
///
/// Input with nothing to escape is copied verbatim after a single byte scan.
#[must_use]
pub fn escape(s: &str) -> String {
    if !needs_escape(s) {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 8);
    escape_into(&mut out, s);
    out
}
