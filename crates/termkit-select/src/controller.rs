//! The selection controller.
//!
//! One controller is owned by each container. It is the only writer of the
//! selection state and of every registered item's flags: descendants report
//! activation *to* it, and it pushes the resulting flags *down* in a single
//! synchronous walk.
//!
//! # Invariants
//!
//! 1. After any transition, an item's active flag is true iff its token
//!    equals the controller's selection state.
//! 2. The walk over registered handles completes before any subscriber is
//!    notified, so listeners always observe consistent item flags.
//! 3. With the focus fallback enabled, zero active items implies exactly
//!    one focus-target item (the first registered), and one active item
//!    implies zero focus targets. An empty controller has neither.
//! 4. A selection token matching no registered handle marks nothing active;
//!    this is a defined state, not an error.

use crate::event::SelectionChange;
use crate::handle::ItemHandle;
use std::rc::{Rc, Weak};

/// A change listener stored as a strong `Rc` inside the [`Subscription`]
/// guard, handed to the controller as `Weak`.
type ListenerRc = Rc<dyn Fn(&SelectionChange)>;
type ListenerWeak = Weak<dyn Fn(&SelectionChange)>;

/// How a controller interprets re-activation of the currently selected
/// token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Zero-or-one selection; re-activating the current item keeps it
    /// selected.
    #[default]
    Radio,
    /// Re-activating the current item deactivates it.
    Toggle,
}

/// Container-owned selection state, registered item handles, and change
/// subscribers.
pub struct SelectionController {
    mode: SelectionMode,
    focus_fallback: bool,
    selected: Option<String>,
    items: Vec<ItemHandle>,
    /// Listeners stored as weak references; dead entries are pruned on
    /// notify.
    listeners: Vec<ListenerWeak>,
}

impl std::fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionController")
            .field("mode", &self.mode)
            .field("focus_fallback", &self.focus_fallback)
            .field("selected", &self.selected)
            .field("item_count", &self.items.len())
            .field("listener_count", &self.listeners.len())
            .finish()
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(SelectionMode::Radio)
    }
}

impl SelectionController {
    /// Create an empty controller with no selection.
    #[must_use]
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            focus_fallback: false,
            selected: None,
            items: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Enable the roving-focus fallback: whenever no item is active, the
    /// first registered item is flagged as the keyboard entry point.
    #[must_use]
    pub fn with_focus_fallback(mut self, enabled: bool) -> Self {
        self.focus_fallback = enabled;
        self.sync();
        self
    }

    /// Pre-set the selection. The walk runs immediately (before any user
    /// interaction) and no change event is emitted.
    #[must_use]
    pub fn with_selected(mut self, token: impl Into<String>) -> Self {
        self.selected = Some(token.into());
        self.sync();
        self
    }

    /// Register an item handle. Registration order defines traversal order;
    /// containers with nested items register depth-first, which flattens
    /// the hierarchy for the walk.
    ///
    /// The walk re-runs so a handle matching the current selection is
    /// marked active as soon as it connects.
    pub fn register(&mut self, handle: ItemHandle) {
        self.items.push(handle);
        self.sync();
    }

    /// Remove the first handle carrying `token`, clearing its flags.
    ///
    /// The selection state is left untouched: a selection pointing at a
    /// removed item simply marks nothing active.
    pub fn unregister(&mut self, token: &str) -> Option<ItemHandle> {
        let idx = self.items.iter().position(|h| h.has_token(token))?;
        let handle = self.items.remove(idx);
        handle.set_active(false);
        handle.set_focus_target(false);
        self.sync();
        Some(handle)
    }

    /// Registered handles in traversal order.
    #[must_use]
    pub fn items(&self) -> &[ItemHandle] {
        &self.items
    }

    /// Number of registered handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no handles are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The current selection token, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether `token` is the current selection.
    #[must_use]
    pub fn is_selected(&self, token: &str) -> bool {
        self.selected.as_deref() == Some(token)
    }

    /// The current focus-fallback target, if one is flagged.
    #[must_use]
    pub fn focus_target(&self) -> Option<&ItemHandle> {
        self.items.iter().find(|h| h.is_focus_target())
    }

    /// User-activation transition: an item with `token` was clicked.
    ///
    /// In [`SelectionMode::Radio`] the token becomes the selection; in
    /// [`SelectionMode::Toggle`] activating the current token clears the
    /// selection instead. The walk runs, then subscribers are notified, and
    /// the change is returned for the container to re-emit.
    pub fn activate(&mut self, token: &str) -> SelectionChange {
        let toggled_off =
            self.mode == SelectionMode::Toggle && self.selected.as_deref() == Some(token);
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "selection.activate", token, toggled_off);
        self.selected = if toggled_off {
            None
        } else {
            Some(token.to_string())
        };
        self.sync();
        let change = self.current_change();
        self.notify(&change);
        change
    }

    /// Deselect, notify subscribers, and return the cleared change.
    pub fn clear(&mut self) -> SelectionChange {
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "selection.clear");
        self.selected = None;
        self.sync();
        let change = SelectionChange::cleared();
        self.notify(&change);
        change
    }

    /// External-state transition: the container's selection property was
    /// assigned programmatically. The walk runs but no change event is
    /// emitted, so a container mirroring an upstream event cannot feed it
    /// back.
    pub fn set_selected(&mut self, token: Option<&str>) {
        self.selected = token.map(str::to_string);
        self.sync();
    }

    /// Subscribe to selection changes. Listeners run in registration order,
    /// strictly after the descendant walk has completed.
    ///
    /// Returns a [`Subscription`] guard; dropping it unsubscribes.
    pub fn subscribe(&mut self, listener: impl Fn(&SelectionChange) + 'static) -> Subscription {
        let strong: ListenerRc = Rc::new(listener);
        self.listeners.push(Rc::downgrade(&strong));
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Number of registered listeners (including dead ones not yet pruned).
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Push the selection state down onto every registered handle, then
    /// recompute the focus fallback.
    fn sync(&mut self) {
        let selected = self.selected.as_deref();
        let mut any_active = false;
        for handle in &self.items {
            let on = selected.is_some_and(|token| handle.has_token(token));
            handle.set_active(on);
            any_active |= on;
        }
        let fallback = self.focus_fallback && !any_active;
        for (idx, handle) in self.items.iter().enumerate() {
            handle.set_focus_target(fallback && idx == 0);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "selection.sync",
            selected = selected.unwrap_or(""),
            any_active,
            item_count = self.items.len()
        );
    }

    /// The outward payload for the current state: token plus the matching
    /// handle's label, or the cleared payload when nothing is selected.
    fn current_change(&self) -> SelectionChange {
        match self.selected.as_deref() {
            Some(token) => {
                let label = self
                    .items
                    .iter()
                    .find(|h| h.has_token(token))
                    .map(ItemHandle::label)
                    .unwrap_or_default();
                SelectionChange::new(token, label)
            }
            None => SelectionChange::cleared(),
        }
    }

    fn notify(&mut self, change: &SelectionChange) {
        // Prune dead listeners, then collect live ones so no borrow is held
        // while callbacks run.
        self.listeners.retain(|w| w.strong_count() > 0);
        let live: Vec<ListenerRc> = self.listeners.iter().filter_map(Weak::upgrade).collect();
        for listener in &live {
            listener(change);
        }
    }
}

/// RAII guard for a change listener. Dropping the guard drops the strong
/// reference, so the controller's weak entry fails to upgrade and is pruned
/// on the next notification.
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
