//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

/// Compute a centered dialog area within `area`, clamped to fit
pub fn centered_area(area: Rect, width: u16, height: u16) -> Rect {
    let dialog_width = width.min(area.width);
    let dialog_height = height.min(area.height);

    let dialog_x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
    let dialog_y = area.y + (area.height.saturating_sub(dialog_height)) / 2;

    Rect {
        x: dialog_x,
        y: dialog_y,
        width: dialog_width,
        height: dialog_height,
    }
}

/// Render a dialog frame over the given area and return the inner content area.
///
/// Clears whatever is behind the dialog so the overlay fully covers it.
pub fn render_dialog_frame(
    frame: &mut Frame,
    dialog_area: Rect,
    title: &str,
    border_color: Color,
) -> Rect {
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_area_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let dialog = centered_area(area, 60, 20);
        assert_eq!(dialog.x, 20);
        assert_eq!(dialog.y, 10);
        assert_eq!(dialog.width, 60);
        assert_eq!(dialog.height, 20);
    }

    #[test]
    fn test_centered_area_clamps_to_parent() {
        let area = Rect::new(0, 0, 40, 10);
        let dialog = centered_area(area, 60, 20);
        assert_eq!(dialog.width, 40);
        assert_eq!(dialog.height, 10);
        assert_eq!(dialog.x, 0);
        assert_eq!(dialog.y, 0);
    }

    #[test]
    fn test_centered_area_respects_offset_parent() {
        let area = Rect::new(10, 5, 80, 30);
        let dialog = centered_area(area, 40, 10);
        assert_eq!(dialog.x, 30);
        assert_eq!(dialog.y, 15);
    }
}
