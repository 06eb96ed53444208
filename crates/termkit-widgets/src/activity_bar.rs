//! Activity bar orchestrator.
//!
//! A vertical strip of toggleable items with zero-or-one active at a time.
//! Unlike the tab strip, activating the already-active item deactivates it:
//! the change event then carries an empty token and label, which downstream
//! containers (the sidebar) interpret as "hide".

use termkit_select::{ItemHandle, SelectionChange, SelectionController, SelectionMode, Subscription};

/// A single activity bar entry.
#[derive(Debug, Clone)]
pub struct ActivityItem {
    handle: ItemHandle,
}

impl ActivityItem {
    /// Create an item with an identity token and a display label.
    #[must_use]
    pub fn new(item_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            handle: ItemHandle::new(item_id, label),
        }
    }

    /// The identity token.
    #[must_use]
    pub fn item_id(&self) -> String {
        self.handle.token()
    }

    /// The display label.
    #[must_use]
    pub fn label(&self) -> String {
        self.handle.label()
    }

    /// Whether the bar currently marks this item active.
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

/// Activity bar: owns the items and their toggleable activation state.
#[derive(Debug, Default)]
pub struct ActivityBar {
    items: Vec<ActivityItem>,
    controller: SelectionController,
}

impl ActivityBar {
    /// Create a bar from an iterator of items. Nothing is active.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = ActivityItem>) -> Self {
        let items: Vec<ActivityItem> = items.into_iter().collect();
        let mut controller = SelectionController::new(SelectionMode::Toggle);
        for item in &items {
            controller.register(item.handle.clone());
        }
        Self { items, controller }
    }

    /// Pre-activate an item. The walk runs immediately; no event is
    /// emitted.
    #[must_use]
    pub fn with_active(mut self, item_id: &str) -> Self {
        self.controller.set_selected(Some(item_id));
        self
    }

    /// Immutable item slice.
    #[must_use]
    pub fn items(&self) -> &[ActivityItem] {
        &self.items
    }

    /// The active item's identity token, if any.
    #[must_use]
    pub fn active_item_id(&self) -> Option<&str> {
        self.controller.selected()
    }

    /// Handle an item activation (click).
    ///
    /// Clicking the active item toggles it off: the state becomes empty and
    /// the returned change is cleared. Clicking any other item activates
    /// exactly that item, deactivating the previous one.
    pub fn click(&mut self, item_id: &str) -> SelectionChange {
        self.controller.activate(item_id)
    }

    /// External activation assignment: same walk, no event.
    pub fn set_active(&mut self, item_id: Option<&str>) {
        self.controller.set_selected(item_id);
    }

    /// Subscribe to the bar's selection-changed events.
    pub fn subscribe(&mut self, listener: impl Fn(&SelectionChange) + 'static) -> Subscription {
        self.controller.subscribe(listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn bar() -> ActivityBar {
        ActivityBar::new(vec![
            ActivityItem::new("explorer", "Explorer"),
            ActivityItem::new("search", "Search"),
            ActivityItem::new("scm", "Source Control"),
        ])
    }

    #[test]
    fn click_activates_exactly_one() {
        let mut bar = bar();
        let change = bar.click("search");
        assert_eq!(change, SelectionChange::new("search", "Search"));
        let active: Vec<String> = bar
            .items()
            .iter()
            .filter(|i| i.is_active())
            .map(ActivityItem::item_id)
            .collect();
        assert_eq!(active, vec!["search".to_string()]);
    }

    #[test]
    fn reclick_toggles_off_and_emits_cleared() {
        let mut bar = bar();
        bar.click("explorer");
        let change = bar.click("explorer");
        assert!(change.is_cleared());
        assert_eq!(change.token, "");
        assert_eq!(change.label, "");
        assert_eq!(bar.active_item_id(), None);
        assert!(bar.items().iter().all(|i| !i.is_active()));
    }

    #[test]
    fn clicking_other_item_swaps_activation() {
        let mut bar = bar();
        bar.click("explorer");
        let change = bar.click("scm");
        assert_eq!(change.token, "scm");
        assert!(!bar.items()[0].is_active());
        assert!(bar.items()[2].is_active());
    }

    #[test]
    fn toggle_cycle_reactivates() {
        let mut bar = bar();
        bar.click("search");
        bar.click("search");
        let change = bar.click("search");
        assert_eq!(change.token, "search");
        assert!(bar.items()[1].is_active());
    }

    #[test]
    fn set_active_is_silent() {
        let mut bar = bar();
        let hits = Rc::new(RefCell::new(Vec::new()));
        let hits_clone = Rc::clone(&hits);
        let _sub = bar.subscribe(move |change| hits_clone.borrow_mut().push(change.clone()));

        bar.set_active(Some("scm"));
        assert!(hits.borrow().is_empty());
        assert!(bar.items()[2].is_active());
    }

    #[test]
    fn with_active_marks_item_before_interaction() {
        let bar = bar().with_active("explorer");
        assert!(bar.items()[0].is_active());
        assert_eq!(bar.active_item_id(), Some("explorer"));
    }

    #[test]
    fn unknown_item_id_marks_nothing() {
        let mut bar = bar();
        let change = bar.click("ghost");
        assert_eq!(change.token, "ghost");
        assert_eq!(change.label, "");
        assert!(bar.items().iter().all(|i| !i.is_active()));
    }
}
