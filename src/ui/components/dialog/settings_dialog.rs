//! Settings modal dialog component

use super::base::{centered_area, render_dialog_frame};
use crate::config::TuiConfig;
use crate::state::SettingsForm;
use crate::ui::forms::draw_settings_form;
use ratatui::{style::Color, Frame};

/// Height of the form controls: two fields plus the submit button
const FORM_HEIGHT: u16 = 9;
/// Height of one snapshot panel
const PANEL_HEIGHT: u16 = 6;

/// Render the "Edit Settings" modal over the current frame
pub fn render_settings_dialog(frame: &mut Frame, form: &SettingsForm, config: &TuiConfig) {
    let area = frame.area();
    let panels = config.snapshot_panels_enabled();

    let dialog_width = config
        .effective_dialog_max_width()
        .min(area.width.saturating_sub(4));

    // Borders + form + help line, plus both panels when enabled
    let mut dialog_height = 2 + FORM_HEIGHT + 1;
    if panels {
        dialog_height += 2 * PANEL_HEIGHT;
    }

    let dialog_area = centered_area(area, dialog_width, dialog_height);
    let inner = render_dialog_frame(frame, dialog_area, "Edit Settings", Color::Cyan);

    draw_settings_form(frame, inner, form, panels);
}
