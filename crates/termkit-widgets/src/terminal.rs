//! Terminal view.
//!
//! Line-oriented consumer of the rendering pipeline: raw markup lines go
//! in, one `<pre>` block of rendered HTML comes out. The view holds raw
//! text only; rendering happens fresh on every [`to_html`](TerminalView::to_html)
//! call, so the pipeline stays stateless.

use termkit_markup::TerminalRenderer;

/// Buffer of raw terminal lines with an attached renderer.
#[derive(Debug, Clone, Default)]
pub struct TerminalView {
    renderer: TerminalRenderer,
    lines: Vec<String>,
}

impl TerminalView {
    /// Create an empty view with the default renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the renderer configuration.
    #[must_use]
    pub fn with_renderer(mut self, renderer: TerminalRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Append a raw line of markup text.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The raw lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of raw lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Render every line and wrap the result in a
    /// `<pre class="<prefix>-terminal">` block.
    #[must_use]
    pub fn to_html(&self) -> String {
        let body_len: usize = self.lines.iter().map(String::len).sum();
        let mut out = String::with_capacity(body_len + 64);
        out.push_str("<pre class=\"");
        out.push_str(self.renderer.prefix());
        out.push_str("-terminal\">");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&self.renderer.render(line));
        }
        out.push_str("</pre>");
        out
    }
}
