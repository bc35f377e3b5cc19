//! Settings form rendering: fields, submit button, and snapshot panels

use super::field_renderer::draw_field;
use crate::state::{Form, SettingsForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the settings form inside the dialog's inner area
pub fn draw_settings_form(frame: &mut Frame, area: Rect, form: &SettingsForm, panels: bool) {
    let constraints = if panels {
        vec![
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(4),                // onChange panel
            Constraint::Min(4),                // onSubmit panel
            Constraint::Length(1),             // Help text
        ]
    } else {
        vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for index in 0..2 {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, chunks[index], field, form.active_field() == index);
        }
    }

    render_button(
        frame,
        chunks[2],
        "Submit",
        form.is_submit_row_active(),
        Some(Color::Green),
    );

    if panels {
        draw_snapshot_panel(frame, chunks[3], "onChange", &form.change_json());
        draw_snapshot_panel(frame, chunks[4], "onSubmit", &form.submit_json());
    }

    let help_area = chunks[chunks.len() - 1];
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": close"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

/// Draw one JSON snapshot panel
fn draw_snapshot_panel(frame: &mut Frame, area: Rect, title: &str, json: &str) {
    let lines: Vec<Line> = json.lines().map(|l| Line::from(l.to_string())).collect();

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::Gray));

    frame.render_widget(panel, area);
}
