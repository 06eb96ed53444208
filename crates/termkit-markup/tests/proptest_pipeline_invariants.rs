//! Property tests for the rendering pipeline.
//!
//! The pipeline is total: any input string, including degenerate or
//! malformed tag syntax, must produce a best-effort output without
//! panicking.

use proptest::prelude::*;
use termkit_markup::{TerminalRenderer, escape, render};

proptest! {
    #[test]
    fn render_is_total(input in ".*") {
        let _ = render(&input);
    }

    #[test]
    fn render_is_total_over_brace_heavy_input(input in r"[{}/a-z \n]*") {
        let _ = render(&input);
    }

    #[test]
    fn escape_output_has_no_raw_specials(input in ".*") {
        let out = escape(&input);
        // Every remaining `&` must start an entity we emitted.
        for (i, c) in out.char_indices() {
            prop_assert!(c != '<' && c != '>');
            if c == '&' {
                let rest = &out[i..];
                prop_assert!(
                    rest.starts_with("&amp;") || rest.starts_with("&lt;") || rest.starts_with("&gt;")
                );
            }
        }
    }

    #[test]
    fn escape_preserves_clean_text(input in r"[a-zA-Z0-9 .,!?'\x22-]*") {
        prop_assert_eq!(escape(&input), input);
    }

    #[test]
    fn escape_is_idempotent(input in ".*") {
        let once = escape(&input);
        prop_assert_eq!(escape(&once), once.clone());
    }

    #[test]
    fn render_of_escaped_text_adds_nothing(input in r"[a-zA-Z0-9 .,!?&<>-]*") {
        // No braces, no URLs: rendering already-escaped text is a no-op.
        let once = escape(&input);
        prop_assert_eq!(render(&once), once.clone());
    }

    #[test]
    fn tagless_linkless_input_round_trips_through_render(
        input in r"[a-zA-Z0-9 .,!?-]*"
    ) {
        // No braces, no URLs, nothing to escape: render is the identity.
        prop_assert_eq!(render(&input), input);
    }

    #[test]
    fn render_is_deterministic(input in ".*") {
        let renderer = TerminalRenderer::new();
        prop_assert_eq!(renderer.render(&input), renderer.render(&input));
    }
}
