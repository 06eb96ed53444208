//! Sidebar orchestrator.
//!
//! Hosts panels of which zero or one is visible. The sidebar can be driven
//! directly ([`show`](Sidebar::show), event-emitting) or mirrored from an
//! upstream container's change event ([`sync`](Sidebar::sync)), which goes
//! through the silent external-set path so mirroring can never echo the
//! event back upstream.

use termkit_select::{ItemHandle, SelectionChange, SelectionController, SelectionMode, Subscription};

/// A single sidebar panel.
#[derive(Debug, Clone)]
pub struct SidebarPanel {
    handle: ItemHandle,
}

impl SidebarPanel {
    /// Create a panel with an identity token and a title.
    #[must_use]
    pub fn new(panel_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            handle: ItemHandle::new(panel_id, title),
        }
    }

    /// The identity token.
    #[must_use]
    pub fn panel_id(&self) -> String {
        self.handle.token()
    }

    /// The panel title.
    #[must_use]
    pub fn title(&self) -> String {
        self.handle.label()
    }

    /// Whether this panel is the visible one.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.handle.is_active()
    }

    /// Shared handle for rendering layers.
    #[must_use]
    pub fn handle(&self) -> &ItemHandle {
        &self.handle
    }
}

/// Sidebar: owns the panels and the zero-or-one visibility state.
#[derive(Debug, Default)]
pub struct Sidebar {
    panels: Vec<SidebarPanel>,
    controller: SelectionController,
}

impl Sidebar {
    /// Create a sidebar from an iterator of panels. Nothing is visible.
    #[must_use]
    pub fn new(panels: impl IntoIterator<Item = SidebarPanel>) -> Self {
        let panels: Vec<SidebarPanel> = panels.into_iter().collect();
        let mut controller = SelectionController::new(SelectionMode::Radio);
        for panel in &panels {
            controller.register(panel.handle.clone());
        }
        Self { panels, controller }
    }

    /// Pre-show a panel. The walk runs immediately; no event is emitted.
    #[must_use]
    pub fn with_visible(mut self, panel_id: &str) -> Self {
        self.controller.set_selected(Some(panel_id));
        self
    }

    /// Immutable panel slice.
    #[must_use]
    pub fn panels(&self) -> &[SidebarPanel] {
        &self.panels
    }

    /// The visible panel's identity token, if any.
    #[must_use]
    pub fn visible_panel_id(&self) -> Option<&str> {
        self.controller.selected()
    }

    /// The visible panel, if any.
    #[must_use]
    pub fn visible_panel(&self) -> Option<&SidebarPanel> {
        self.panels.iter().find(|p| p.is_visible())
    }

    /// Show a panel directly, notifying listeners.
    pub fn show(&mut self, panel_id: &str) -> SelectionChange {
        self.controller.activate(panel_id)
    }

    /// Hide the visible panel, notifying listeners.
    pub fn hide(&mut self) -> SelectionChange {
        self.controller.clear()
    }

    /// Mirror an upstream change event (e.g. from the activity bar).
    ///
    /// Runs through the silent path: the sidebar's own listeners are not
    /// notified, so mirroring cannot create a feedback loop.
    pub fn sync(&mut self, change: &SelectionChange) {
        if change.is_cleared() {
            self.controller.set_selected(None);
        } else {
            self.controller.set_selected(Some(change.token.as_str()));
        }
    }

    /// External visibility assignment: same walk, no event.
    pub fn set_visible(&mut self, panel_id: Option<&str>) {
        self.controller.set_selected(panel_id);
    }

    /// Subscribe to the sidebar's selection-changed events.
    pub fn subscribe(&mut self, listener: impl Fn(&SelectionChange) + 'static) -> Subscription {
        self.controller.subscribe(listener)
    }
}
