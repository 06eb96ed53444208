#![forbid(unsafe_code)]

//! Terminal text rendering pipeline.
//!
//! Converts raw terminal-flavored text into HTML through three passes that
//! run in strict order:
//!
//! 1. [`escape`] — entity-escape `&`, `<`, and `>` so literal angle
//!    brackets in source text can never be reinterpreted as markup later.
//! 2. [`tag`] — rewrite `{tag}` / `{/}` tokens from a fixed color-tag
//!    vocabulary into `<span>` elements.
//! 3. [`linkify`] — wrap `http(s)://` runs in anchor elements.
//!
//! # This crate provides
//! - [`TerminalRenderer`] composing the full pipeline with a configurable
//!   CSS class namespace.
//! - [`render`] as a default-configuration convenience.
//! - Each pass as a standalone function for reuse and targeted testing.
//!
//! The pipeline is pure and total: any input string produces a best-effort
//! output string and nothing here panics. Unbalanced tag markup degrades to
//! literal text or dangling close elements; the browser's lenient HTML
//! parser is relied upon for the rest.

pub mod escape;
pub mod linkify;
pub mod renderer;
pub mod tag;

pub use escape::{escape, escape_into};
pub use linkify::{linkify, linkify_into};
pub use renderer::{DEFAULT_CLASS_PREFIX, TerminalRenderer, render};
pub use tag::{Tag, substitute_tags, substitute_tags_into};
