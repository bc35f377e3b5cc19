//! UI module for rendering the TUI

mod components;
mod forms;
mod home;

use crate::app::App;
use crate::state::ModalState;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // The trigger screen is always rendered; the modal overlays it when open
    home::draw(frame, area, app);

    if let ModalState::Open(ref form) = app.state.modal {
        components::dialog::render_settings_dialog(frame, form, &app.config);
    }
}
