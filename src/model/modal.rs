//! Modal stack for managing overlays
//!
//! Only the top modal receives input. Dialog-local state (cursor rows,
//! typed text) lives in the enum variant or in the dialog component.

/// Represents a modal overlay that can be displayed on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Help dialog showing all keyboard shortcuts
    Help,
    /// Filter options for the events list
    Filter,
    /// Ticket purchase wizard
    Checkout,
    /// Name prompt for saving the current search
    SaveSearch { name: String },
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        tracing::debug!(?modal, depth = self.stack.len() + 1, "Modal opened");
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        let modal = self.stack.pop();
        if let Some(closed) = &modal {
            tracing::debug!(modal = ?closed, depth = self.stack.len(), "Modal closed");
        }
        modal
    }

    /// Get a reference to the top modal without removing it
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
