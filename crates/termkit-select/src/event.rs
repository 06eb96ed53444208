//! Event payloads for the selection protocol.

/// Item-level activation payload: what a descendant dispatches upward when
/// the user activates it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemActivation {
    /// Identity token of the activated item.
    pub token: String,
    /// Display label of the activated item.
    pub label: String,
}

impl ItemActivation {
    /// Create an activation payload.
    #[must_use]
    pub fn new(token: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            label: label.into(),
        }
    }
}

/// Container-level selection-changed payload, re-emitted to external
/// listeners after the descendant walk has completed.
///
/// Both fields are empty when the change is a deselection (toggle-off or an
/// explicit clear).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionChange {
    /// Identity token of the newly selected item, or empty.
    pub token: String,
    /// Display label of the newly selected item, or empty.
    pub label: String,
}

impl SelectionChange {
    /// Create a selection payload.
    #[must_use]
    pub fn new(token: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            label: label.into(),
        }
    }

    /// The payload for a deselection.
    #[must_use]
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Whether this change represents a deselection.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.token.is_empty()
    }
}
