//! Dialog components

mod base;
mod settings_dialog;

pub use settings_dialog::render_settings_dialog;
