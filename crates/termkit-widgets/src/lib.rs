#![forbid(unsafe_code)]

//! Composite orchestrators for termkit.
//!
//! Each orchestrator owns its items and a
//! [`SelectionController`](termkit_select::SelectionController), registers
//! the item handles in traversal order, and exposes the protocol surface:
//! a single current-selection property, per-item identity tokens with
//! read-only active flags, an activation entry point that emits a
//! [`SelectionChange`](termkit_select::SelectionChange), and a silent
//! setter for externally assigned state.

pub mod activity_bar;
pub mod sidebar;
pub mod tabs;
pub mod terminal;
pub mod tree;

pub use activity_bar::{ActivityBar, ActivityItem};
pub use sidebar::{Sidebar, SidebarPanel};
pub use tabs::{Tab, TabStrip};
pub use terminal::TerminalView;
pub use tree::{TreeItem, TreeView};

#[cfg(feature = "state-persistence")]
pub use tree::TreeViewState;
