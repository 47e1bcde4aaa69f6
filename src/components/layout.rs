//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub tabs: Rect,
    pub body: Rect,
    pub status: Option<Rect>,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Tab bar on top, then the view body, an optional status line and the help bar
pub fn calculate_main_layout(area: Rect, has_status: bool) -> MainLayout {
    let chunks = if has_status {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area)
    };

    let (status, help) = if has_status {
        (Some(chunks[2]), chunks[3])
    } else {
        (None, chunks[2])
    };

    MainLayout {
        tabs: chunks[0],
        body: chunks[1],
        status,
        help,
    }
}

/// Split a body area into a list (left) and a detail panel (right)
pub fn split_list_detail(area: Rect, list_percent: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(list_percent),
            Constraint::Percentage(100u16.saturating_sub(list_percent)),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let popup = centered_popup(area, 60, 6);
        assert_eq!(popup, Rect::new(0, 2, 40, 6));
    }

    #[test]
    fn test_main_layout_with_status() {
        let layout = calculate_main_layout(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.tabs.height, 3);
        assert_eq!(layout.body.height, 19);
        assert!(layout.status.is_some());
        assert_eq!(layout.help.y, 23);
    }

    #[test]
    fn test_main_layout_without_status() {
        let layout = calculate_main_layout(Rect::new(0, 0, 80, 24), false);
        assert!(layout.status.is_none());
        assert_eq!(layout.body.height, 20);
    }
}
