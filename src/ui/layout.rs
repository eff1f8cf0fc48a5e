//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: tab strip, group panel, status bar.
pub struct AppLayout {
    pub tabs_area: Rect,
    pub panel_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // year tab strip
                Constraint::Min(5),    // group panel (takes remaining space)
                Constraint::Length(1), // status / hint bar
            ])
            .split(area);

        Self {
            tabs_area: chunks[0],
            panel_area: chunks[1],
            status_area: chunks[2],
        }
    }
}
