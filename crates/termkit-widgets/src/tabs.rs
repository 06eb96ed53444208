//! Tab strip orchestrator.
//!
//! A horizontal group of tabs with exactly-zero-or-one selection, keyboard
//! order navigation, and closable tabs. The strip intercepts item
//! activation: the item-level payload is consumed and only the strip's own
//! [`SelectionChange`] goes out to listeners.

use termkit_select::{ItemHandle, SelectionChange, SelectionController, SelectionMode, Subscription};

/// A single tab entry.
#[derive(Debug, Clone)]
pub struct Tab {
    handle: ItemHandle,
    closable: bool,
}

impl Tab {
    /// Create a tab with an identity token and a display label.
    #[must_use]
    pub fn new(tab_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            handle: ItemHandle::new(tab_id, label),
            closable: false,
        }
    }

    /// Set whether this tab can be closed.
    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// The identity token.
    #[must_use]
    pub fn tab_id(&self) -> String {
        self.handle.token()
    }

    /// The display label.
    #[must_use]
    pub fn label(&self) -> String {
        self.handle.label()
    }

    /// Whether this tab can be closed.
    #[must_use]
    pub const fn is_closable(&self) -> bool {
        self.closable
    }

    /// Whether the strip currently marks this tab selected.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.handle.is_active()
    }

    /// Shared handle for rendering layers.
    #[must_use]
    pub fn handle(&self) -> &ItemHandle {
        &self.handle
    }
}

/// Tab strip: owns the tabs and their selection state.
#[derive(Debug, Default)]
pub struct TabStrip {
    tabs: Vec<Tab>,
    controller: SelectionController,
}

impl TabStrip {
    /// Create a strip from an iterator of tabs. Nothing is selected.
    #[must_use]
    pub fn new(tabs: impl IntoIterator<Item = Tab>) -> Self {
        let tabs: Vec<Tab> = tabs.into_iter().collect();
        let mut controller = SelectionController::new(SelectionMode::Radio);
        for tab in &tabs {
            controller.register(tab.handle.clone());
        }
        Self { tabs, controller }
    }

    /// Pre-select a tab. The descendant walk runs immediately; no event is
    /// emitted.
    #[must_use]
    pub fn with_selected(mut self, tab_id: &str) -> Self {
        self.controller.set_selected(Some(tab_id));
        self
    }

    /// Immutable tab slice.
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// The selected tab's identity token, if any.
    #[must_use]
    pub fn selected_tab_id(&self) -> Option<&str> {
        self.controller.selected()
    }

    /// Handle a tab activation (click). Updates the selection, walks the
    /// tabs, notifies listeners, and returns the strip's change event.
    pub fn click(&mut self, tab_id: &str) -> SelectionChange {
        self.controller.activate(tab_id)
    }

    /// External selection assignment: same walk, no event.
    pub fn set_selected(&mut self, tab_id: Option<&str>) {
        self.controller.set_selected(tab_id);
    }

    /// Select the tab after the current one, or the first when nothing is
    /// selected. Returns `None` at the end of the strip.
    pub fn select_next(&mut self) -> Option<SelectionChange> {
        if self.tabs.is_empty() {
            return None;
        }
        let next = match self.selected_index() {
            None => 0,
            Some(idx) if idx + 1 < self.tabs.len() => idx + 1,
            Some(_) => return None,
        };
        let tab_id = self.tabs[next].tab_id();
        Some(self.click(&tab_id))
    }

    /// Select the tab before the current one, or the first when nothing is
    /// selected. Returns `None` at the start of the strip.
    pub fn select_previous(&mut self) -> Option<SelectionChange> {
        if self.tabs.is_empty() {
            return None;
        }
        let previous = match self.selected_index() {
            None => 0,
            Some(0) => return None,
            Some(idx) => idx - 1,
        };
        let tab_id = self.tabs[previous].tab_id();
        Some(self.click(&tab_id))
    }

    /// Append a tab; a pre-set selection matching its token picks it up.
    pub fn add_tab(&mut self, tab: Tab) {
        self.controller.register(tab.handle.clone());
        self.tabs.push(tab);
    }

    /// Close a tab if it is closable, returning it.
    ///
    /// When the closed tab was selected, selection moves to the tab now at
    /// its position (or the new last tab) through the silent path.
    pub fn close_tab(&mut self, tab_id: &str) -> Option<Tab> {
        let idx = self.tabs.iter().position(|t| t.handle.has_token(tab_id))?;
        if !self.tabs[idx].is_closable() {
            return None;
        }
        let was_selected = self.controller.is_selected(tab_id);
        let tab = self.tabs.remove(idx);
        self.controller.unregister(tab_id);

        if self.tabs.is_empty() {
            self.controller.set_selected(None);
        } else if was_selected {
            let neighbor = idx.min(self.tabs.len() - 1);
            let neighbor_id = self.tabs[neighbor].tab_id();
            self.controller.set_selected(Some(neighbor_id.as_str()));
        }
        Some(tab)
    }

    /// Subscribe to the strip's selection-changed events.
    pub fn subscribe(&mut self, listener: impl Fn(&SelectionChange) + 'static) -> Subscription {
        self.controller.subscribe(listener)
    }

    fn selected_index(&self) -> Option<usize> {
        let selected = self.controller.selected()?;
        self.tabs.iter().position(|t| t.handle.has_token(selected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn strip() -> TabStrip {
        TabStrip::new(vec![
            Tab::new("one", "One"),
            Tab::new("two", "Two"),
            Tab::new("three", "Three"),
        ])
    }

    // --- Selection & switching ---

    #[test]
    fn nothing_selected_initially() {
        let strip = strip();
        assert_eq!(strip.selected_tab_id(), None);
        assert!(strip.tabs().iter().all(|t| !t.is_active()));
    }

    #[test]
    fn with_selected_marks_exactly_one() {
        let strip = strip().with_selected("two");
        let active: Vec<String> = strip
            .tabs()
            .iter()
            .filter(|t| t.is_active())
            .map(Tab::tab_id)
            .collect();
        assert_eq!(active, vec!["two".to_string()]);
    }

    #[test]
    fn click_moves_selection_and_returns_event() {
        let mut strip = strip();
        let change = strip.click("three");
        assert_eq!(change, SelectionChange::new("three", "Three"));
        assert!(strip.tabs()[2].is_active());

        strip.click("one");
        assert!(!strip.tabs()[2].is_active());
        assert!(strip.tabs()[0].is_active());
    }

    #[test]
    fn set_selected_nonexistent_clears_all_flags() {
        let mut strip = strip().with_selected("two");
        strip.set_selected(Some("ghost"));
        assert!(strip.tabs().iter().all(|t| !t.is_active()));
    }

    #[test]
    fn set_selected_does_not_emit() {
        let mut strip = strip();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);
        let _sub = strip.subscribe(move |change| seen_clone.borrow_mut().push(change.clone()));

        strip.set_selected(Some("two"));
        assert!(seen.borrow().is_empty());

        strip.click("one");
        assert_eq!(seen.borrow().len(), 1);
    }

    // --- Keyboard order navigation ---

    #[test]
    fn select_next_from_empty_selection_picks_first() {
        let mut strip = strip();
        let change = strip.select_next().expect("change");
        assert_eq!(change.token, "one");
    }

    #[test]
    fn select_next_and_previous_walk_the_strip() {
        let mut strip = strip().with_selected("one");
        assert_eq!(strip.select_next().expect("change").token, "two");
        assert_eq!(strip.select_next().expect("change").token, "three");
        assert!(strip.select_next().is_none());
        assert_eq!(strip.select_previous().expect("change").token, "two");
    }

    #[test]
    fn select_previous_at_start_is_none() {
        let mut strip = strip().with_selected("one");
        assert!(strip.select_previous().is_none());
        assert_eq!(strip.selected_tab_id(), Some("one"));
    }

    #[test]
    fn navigation_on_empty_strip_is_none() {
        let mut strip = TabStrip::new(Vec::new());
        assert!(strip.select_next().is_none());
        assert!(strip.select_previous().is_none());
    }

    // --- Tab lifecycle ---

    #[test]
    fn add_tab_picks_up_preset_selection() {
        let mut strip = TabStrip::new(vec![Tab::new("one", "One")]);
        strip.set_selected(Some("late"));
        strip.add_tab(Tab::new("late", "Late"));
        assert!(strip.tabs()[1].is_active());
    }

    #[test]
    fn close_tab_respects_closable() {
        let mut strip = TabStrip::new(vec![
            Tab::new("pinned", "Pinned"),
            Tab::new("temp", "Temp").closable(true),
        ]);
        assert!(strip.close_tab("pinned").is_none());
        let closed = strip.close_tab("temp").expect("closable tab");
        assert_eq!(closed.tab_id(), "temp");
        assert_eq!(strip.tabs().len(), 1);
    }

    #[test]
    fn closing_selected_tab_moves_selection_to_neighbor() {
        let mut strip = TabStrip::new(vec![
            Tab::new("a", "A").closable(true),
            Tab::new("b", "B").closable(true),
            Tab::new("c", "C").closable(true),
        ])
        .with_selected("b");
        strip.close_tab("b");
        assert_eq!(strip.selected_tab_id(), Some("c"));
        assert!(strip.tabs()[1].is_active());
    }

    #[test]
    fn closing_selected_last_tab_moves_selection_back() {
        let mut strip = TabStrip::new(vec![
            Tab::new("a", "A").closable(true),
            Tab::new("b", "B").closable(true),
        ])
        .with_selected("b");
        strip.close_tab("b");
        assert_eq!(strip.selected_tab_id(), Some("a"));
    }

    #[test]
    fn closing_only_tab_clears_selection() {
        let mut strip = TabStrip::new(vec![Tab::new("only", "Only").closable(true)])
            .with_selected("only");
        strip.close_tab("only");
        assert!(strip.tabs().is_empty());
        assert_eq!(strip.selected_tab_id(), None);
    }

    #[test]
    fn closing_unselected_tab_keeps_selection() {
        let mut strip = TabStrip::new(vec![
            Tab::new("a", "A"),
            Tab::new("b", "B").closable(true),
        ])
        .with_selected("a");
        strip.close_tab("b");
        assert_eq!(strip.selected_tab_id(), Some("a"));
        assert!(strip.tabs()[0].is_active());
    }

    #[test]
    fn close_unknown_tab_is_none() {
        let mut strip = strip();
        assert!(strip.close_tab("ghost").is_none());
        assert_eq!(strip.tabs().len(), 3);
    }
}
