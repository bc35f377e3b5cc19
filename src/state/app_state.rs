//! Application state definitions

use super::forms::SettingsForm;

/// Visibility of the settings modal.
///
/// The form state lives inside the `Open` variant, so closing the modal
/// discards it and the next open starts from a fresh, empty form.
#[derive(Debug, Clone, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(SettingsForm),
}

/// Top-level application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Settings modal visibility and, when open, its form
    pub modal: ModalState,
}

impl AppState {
    /// Open the settings modal with a fresh, empty form
    pub fn open_modal(&mut self) {
        self.modal = ModalState::Open(SettingsForm::new());
        tracing::debug!("settings modal opened");
    }

    /// Close the settings modal, discarding any form state
    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
        tracing::debug!("settings modal closed");
    }

    /// Check if the settings modal is open
    pub fn is_modal_open(&self) -> bool {
        matches!(self.modal, ModalState::Open(_))
    }

    /// Get the open modal's form, if any
    pub fn form_mut(&mut self) -> Option<&mut SettingsForm> {
        match &mut self.modal {
            ModalState::Closed => None,
            ModalState::Open(form) => Some(form),
        }
    }
}
