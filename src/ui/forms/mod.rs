//! Form rendering module

mod field_renderer;
mod settings_form;

pub use settings_form::draw_settings_form;
