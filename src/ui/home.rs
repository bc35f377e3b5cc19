//! Home screen with the settings trigger button

use crate::app::App;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the home screen: a framed background, the "Edit" trigger, and a status bar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_main(frame, chunks[0], app);
    draw_status_bar(frame, chunks[1], app);
}

fn draw_main(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Settings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Center the trigger button
    let button_width = 12u16.min(inner.width);
    let button_area = Rect {
        x: inner.x + (inner.width.saturating_sub(button_width)) / 2,
        y: inner.y + (inner.height.saturating_sub(BUTTON_HEIGHT)) / 2,
        width: button_width,
        height: BUTTON_HEIGHT.min(inner.height),
    };

    // The trigger stays highlighted only while the modal is closed
    render_button(frame, button_area, "Edit", !app.state.is_modal_open(), None);
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(ref message) = app.status_message {
        Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from(vec![
            Span::styled("Enter/e", Style::default().fg(Color::Cyan)),
            Span::raw(": edit settings  "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(": quit"),
        ])
    };

    let status = Paragraph::new(line).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
