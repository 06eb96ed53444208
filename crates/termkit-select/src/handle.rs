//! Shared item handles.
//!
//! An [`ItemHandle`] is a cheaply cloneable view of one selectable item's
//! state, stored in shared reference-counted storage. Containers keep one
//! clone registered with their controller and hand further clones to
//! whoever renders the item; all clones observe the same flags.
//!
//! # Invariants
//!
//! - The active and focus-target flags are mutated only by the owning
//!   controller's synchronization walk. The mutators are crate-private, so
//!   item code cannot flip its own flags.
//! - The identity token is fixed at construction; uniqueness within a
//!   container's scope is the caller's responsibility.

use crate::event::ItemActivation;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

struct ItemInner {
    token: String,
    label: String,
    active: bool,
    focus_target: bool,
}

/// Shared handle to one selectable item's state.
///
/// Cloning creates a new handle to the **same** inner state.
pub struct ItemHandle {
    inner: Rc<RefCell<ItemInner>>,
}

// Manual Clone: shares the same Rc.
impl Clone for ItemHandle {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl fmt::Debug for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ItemHandle")
            .field("token", &inner.token)
            .field("label", &inner.label)
            .field("active", &inner.active)
            .field("focus_target", &inner.focus_target)
            .finish()
    }
}

impl ItemHandle {
    /// Create a handle with the given identity token and display label.
    ///
    /// Flags start false; the owning controller's first walk assigns them.
    #[must_use]
    pub fn new(token: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ItemInner {
                token: token.into(),
                label: label.into(),
                active: false,
                focus_target: false,
            })),
        }
    }

    /// The identity token.
    #[must_use]
    pub fn token(&self) -> String {
        self.inner.borrow().token.clone()
    }

    /// Whether this handle carries the given identity token.
    #[must_use]
    pub fn has_token(&self, token: &str) -> bool {
        self.inner.borrow().token == token
    }

    /// The display label.
    #[must_use]
    pub fn label(&self) -> String {
        self.inner.borrow().label.clone()
    }

    /// Update the display label (the token never changes).
    pub fn set_label(&self, label: impl Into<String>) {
        self.inner.borrow_mut().label = label.into();
    }

    /// Whether the owning container currently marks this item selected.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.inner.borrow().active
    }

    /// Whether this item is the roving keyboard entry point.
    ///
    /// At most one handle per container carries the flag, and only while the
    /// container has no active item.
    #[must_use]
    pub fn is_focus_target(&self) -> bool {
        self.inner.borrow().focus_target
    }

    /// The activation payload this item dispatches upward when clicked.
    #[must_use]
    pub fn activation(&self) -> ItemActivation {
        let inner = self.inner.borrow();
        ItemActivation::new(inner.token.clone(), inner.label.clone())
    }

    /// Whether two handles share the same underlying state.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn set_active(&self, active: bool) {
        self.inner.borrow_mut().active = active;
    }

    pub(crate) fn set_focus_target(&self, focus_target: bool) {
        self.inner.borrow_mut().focus_target = focus_target;
    }
}
