#![forbid(unsafe_code)]

//! Selection-propagation protocol for composite containers.
//!
//! # Role
//! One container (a tab strip, a tree view, an activity bar, a sidebar)
//! owns the notion of "current selection" for a dynamic set of descendant
//! items. Items report activation upward; the container updates its state
//! and pushes the resulting flags back down onto every registered item.
//! This crate makes that protocol explicit:
//!
//! - [`ItemHandle`] — shared, cheaply cloneable per-item state (identity
//!   token, display label, active and focus-target flags). Flag mutation is
//!   crate-private: items cannot flip their own flags, the invariant lives
//!   in the type rather than in a convention.
//! - [`SelectionController`] — owned by the container; holds the selection
//!   state, the registered handles in traversal order, and the change
//!   subscribers.
//! - [`ItemActivation`] / [`SelectionChange`] — the upward and outward
//!   event payloads.
//!
//! # Ordering
//! Everything is synchronous and single-threaded. Within one controller the
//! descendant walk always completes before subscribers are notified, so a
//! listener observing a [`SelectionChange`] sees fully consistent item
//! flags.

pub mod controller;
pub mod event;
pub mod handle;

pub use controller::{SelectionController, SelectionMode, Subscription};
pub use event::{ItemActivation, SelectionChange};
pub use handle::ItemHandle;
