//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen layout: bordered list, a key hint line and a status bar.
pub struct AppLayout {
    pub list_area: Rect,
    pub hint_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let [list_area, hint_area, status_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // list (takes all remaining space)
                Constraint::Length(1), // key hints
                Constraint::Length(1), // status bar
            ])
            .areas(area);

        Self {
            list_area,
            hint_area,
            status_area,
        }
    }
}
