//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, Form};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Feedback message shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Self {
        let config = TuiConfig::load().unwrap_or_else(|err| {
            tracing::warn!("failed to load config, using defaults: {err:#}");
            TuiConfig::default()
        });

        Self {
            state: AppState::default(),
            config,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event, dispatching by modal visibility
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.is_modal_open() {
            self.handle_modal_key(key)
        } else {
            self.handle_home_key(key)
        }
    }

    /// Handle keys on the home screen (trigger button visible)
    fn handle_home_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => {
                self.quit = true;
            }
            // Activate the trigger button
            KeyCode::Enter | KeyCode::Char('e') => {
                self.status_message = None;
                self.state.open_modal();
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys while the settings modal is open
    fn handle_modal_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(form) = self.state.form_mut() else {
            return Ok(());
        };
        let on_submit_row = form.is_submit_row_active();

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            // Enter submits from anywhere in the form; the modal stays open
            KeyCode::Enter => {
                form.submit();
                self.status_message = Some("Settings submitted".to_string());
            }
            // Submit shortcut (works from any field)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.submit();
                self.status_message = Some("Settings submitted".to_string());
            }
            KeyCode::Esc => {
                self.state.close_modal();
            }
            // Form field input (only when not on the submit row)
            KeyCode::Char(c) if !on_submit_row => form.get_active_field_mut().push_char(c),
            KeyCode::Backspace if !on_submit_row => form.get_active_field_mut().pop_char(),
            _ => {}
        }
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
