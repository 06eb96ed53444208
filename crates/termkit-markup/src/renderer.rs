//! Pipeline composition: escape, then tag substitution, then autolinking.

use crate::escape;
use crate::linkify;
use crate::tag;

/// Default CSS class namespace for generated elements.
pub const DEFAULT_CLASS_PREFIX: &str = "tk";

/// Configuration for the terminal text rendering pipeline.
///
/// The renderer holds no state between calls: [`render`](Self::render)
/// allocates its output fresh on every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalRenderer {
    class_prefix: String,
    autolink: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.into(),
            autolink: true,
        }
    }
}

impl TerminalRenderer {
    /// Create a renderer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CSS class namespace for spans and link anchors.
    #[must_use]
    pub fn class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Enable or disable URL autolinking.
    #[must_use]
    pub fn autolink(mut self, autolink: bool) -> Self {
        self.autolink = autolink;
        self
    }

    /// The configured class namespace.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.class_prefix
    }

    /// Render raw terminal text to HTML.
    ///
    /// The passes run in strict order: escaping first, so source text can
    /// never smuggle element syntax past the later passes; tag substitution
    /// second; autolinking last, so link text is never re-parsed for tag
    /// syntax. Total over all inputs: malformed tag markup degrades to
    /// literal text or dangling close elements, never to an error.
    #[must_use]
    pub fn render(&self, input: &str) -> String {
        #[cfg(feature = "tracing")]
        let render_span = tracing::debug_span!(
            "markup.render",
            input_len = input.len(),
            output_len = tracing::field::Empty
        );
        #[cfg(feature = "tracing")]
        let _render_guard = render_span.enter();

        let mut escaped = String::with_capacity(input.len() + 16);
        escape::escape_into(&mut escaped, input);

        let mut tagged = String::with_capacity(escaped.len() + 32);
        tag::substitute_tags_into(&mut tagged, &escaped, &self.class_prefix);

        let out = if self.autolink {
            let mut linked = String::with_capacity(tagged.len() + 64);
            linkify::linkify_into(&mut linked, &tagged, &self.class_prefix);
            linked
        } else {
            tagged
        };

        #[cfg(feature = "tracing")]
        render_span.record("output_len", out.len());

        out
    }
}

/// Render with the default configuration.
#[must_use]
pub fn render(input: &str) -> String {
    TerminalRenderer::default().render(input)
}
