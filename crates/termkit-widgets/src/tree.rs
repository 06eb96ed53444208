//! Tree view orchestrator.
//!
//! A hierarchy of labeled, selectable items. Item handles are registered
//! depth-first, so the selection walk reaches every descendant regardless
//! of nesting (flattened traversal). A click updates the selection and
//! re-emits the public select event; when nothing matches the current
//! selection, the first top-level item is flagged as the roving keyboard
//! entry point so the tree always exposes exactly one focusable item.

use termkit_select::{ItemHandle, SelectionChange, SelectionController, SelectionMode, Subscription};

#[cfg(feature = "state-persistence")]
use std::collections::HashSet;

/// A node in the tree hierarchy.
#[derive(Debug, Clone)]
pub struct TreeItem {
    handle: ItemHandle,
    children: Vec<TreeItem>,
    expanded: bool,
}

impl TreeItem {
    /// Create an item with an identity token and a display label.
    ///
    /// Items start expanded, matching the light-DOM default where nested
    /// content is present unless collapsed.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            handle: ItemHandle::new(value, label),
            children: Vec::new(),
            expanded: true,
        }
    }

    /// Add a child item.
    #[must_use]
    pub fn child(mut self, item: TreeItem) -> Self {
        self.children.push(item);
        self
    }

    /// Set children from a vec.
    #[must_use]
    pub fn with_children(mut self, items: Vec<TreeItem>) -> Self {
        self.children = items;
        self
    }

    /// Set whether this item is expanded.
    #[must_use]
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// The identity token.
    #[must_use]
    pub fn value(&self) -> String {
        self.handle.token()
    }

    /// The display label.
    #[must_use]
    pub fn label(&self) -> String {
        self.handle.label()
    }

    /// The child items.
    #[must_use]
    pub fn children(&self) -> &[TreeItem] {
        &self.children
    }

    /// Whether this item has children.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether this item is expanded.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the tree currently marks this item selected.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.handle.is_active()
    }

    /// Whether this item is the roving keyboard entry point.
    #[must_use]
    pub fn is_focus_target(&self) -> bool {
        self.handle.is_focus_target()
    }

    /// Shared handle for rendering layers.
    #[must_use]
    pub fn handle(&self) -> &ItemHandle {
        &self.handle
    }

    /// Count all visible (expanded) items, including this one.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        let mut count = 1;
        if self.expanded {
            for child in &self.children {
                count += child.visible_count();
            }
        }
        count
    }

    /// Depth-first registration: this item, then its descendants.
    fn register_into(&self, controller: &mut SelectionController) {
        controller.register(self.handle.clone());
        for child in &self.children {
            child.register_into(controller);
        }
    }

    fn find_mut(&mut self, value: &str) -> Option<&mut TreeItem> {
        if self.handle.has_token(value) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(value))
    }

    #[cfg(feature = "state-persistence")]
    fn collect_expanded(&self, out: &mut Vec<String>) {
        if self.expanded && self.has_children() {
            out.push(self.value());
        }
        for child in &self.children {
            child.collect_expanded(out);
        }
    }

    #[cfg(feature = "state-persistence")]
    fn apply_expanded(&mut self, expanded: &HashSet<&str>) {
        if self.has_children() {
            self.expanded = expanded.contains(self.handle.token().as_str());
        }
        for child in &mut self.children {
            child.apply_expanded(expanded);
        }
    }
}

/// Saved tree view state: the selection token plus the expanded item set,
/// in traversal order.
#[cfg(feature = "state-persistence")]
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TreeViewState {
    pub selected: Option<String>,
    pub expanded: Vec<String>,
}

/// Tree view: owns the item hierarchy and its selection state.
#[derive(Debug)]
pub struct TreeView {
    items: Vec<TreeItem>,
    controller: SelectionController,
}

impl Default for TreeView {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TreeView {
    /// Create a view from top-level items. Nothing is selected; the roving
    /// fallback flags the first item as the keyboard entry point.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = TreeItem>) -> Self {
        let items: Vec<TreeItem> = items.into_iter().collect();
        let mut controller =
            SelectionController::new(SelectionMode::Radio).with_focus_fallback(true);
        for item in &items {
            item.register_into(&mut controller);
        }
        Self { items, controller }
    }

    /// Pre-select an item. The walk runs immediately; no event is emitted.
    #[must_use]
    pub fn with_selected(mut self, value: &str) -> Self {
        self.controller.set_selected(Some(value));
        self
    }

    /// Top-level items.
    #[must_use]
    pub fn items(&self) -> &[TreeItem] {
        &self.items
    }

    /// The selected item's identity token, if any.
    #[must_use]
    pub fn selected_value(&self) -> Option<&str> {
        self.controller.selected()
    }

    /// The roving keyboard entry point, if one is flagged.
    #[must_use]
    pub fn focus_target(&self) -> Option<&ItemHandle> {
        self.controller.focus_target()
    }

    /// Handle an item activation (click). Updates the selection, walks all
    /// descendants, notifies listeners, and returns the public select event
    /// for further bubbling.
    pub fn click(&mut self, value: &str) -> SelectionChange {
        self.controller.activate(value)
    }

    /// External selection assignment: same walk, no event. A token matching
    /// no descendant leaves nothing selected and restores the roving
    /// fallback.
    pub fn set_selected(&mut self, value: Option<&str>) {
        self.controller.set_selected(value);
    }

    /// Toggle an item's expanded state. Returns the new state, or `None`
    /// when no item carries `value`.
    ///
    /// Expansion is purely presentational: collapsed descendants stay
    /// registered and keep receiving selection flags.
    pub fn toggle_expanded(&mut self, value: &str) -> Option<bool> {
        let item = self.items.iter_mut().find_map(|i| i.find_mut(value))?;
        item.expanded = !item.expanded;
        Some(item.expanded)
    }

    /// Count all visible items across the top-level forest.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.items.iter().map(TreeItem::visible_count).sum()
    }

    /// Subscribe to the tree's selection-changed events.
    pub fn subscribe(&mut self, listener: impl Fn(&SelectionChange) + 'static) -> Subscription {
        self.controller.subscribe(listener)
    }

    /// Snapshot selection and expansion for persistence.
    #[cfg(feature = "state-persistence")]
    #[must_use]
    pub fn snapshot(&self) -> TreeViewState {
        let mut expanded = Vec::new();
        for item in &self.items {
            item.collect_expanded(&mut expanded);
        }
        TreeViewState {
            selected: self.controller.selected().map(str::to_string),
            expanded,
        }
    }

    /// Restore a snapshot through the silent path (no event).
    #[cfg(feature = "state-persistence")]
    pub fn restore(&mut self, state: &TreeViewState) {
        let expanded: HashSet<&str> = state.expanded.iter().map(String::as_str).collect();
        for item in &mut self.items {
            item.apply_expanded(&expanded);
        }
        self.controller.set_selected(state.selected.as_deref());
    }
}
