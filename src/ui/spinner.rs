//! Loading indicator — a spinner + label centered in the panel while the
//! catalog snapshot is being read.
//!
//! Rendered iff the selection state is still loading; once the state goes
//! ready it never comes back for the rest of the run.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::theme::Theme;

/// Braille-dot spinner frames.  Cycles through these on each tick.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Centered "loading" indicator.
pub struct LoadingIndicator {
    /// Monotonically increasing tick counter (drives the spinner frame).
    pub tick: u64,
}

impl Widget for LoadingIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height == 0 {
            return;
        }

        let frame = SPINNER_FRAMES[(self.tick as usize) % SPINNER_FRAMES.len()];
        let label = format!("{frame} loading catalog");
        let width = label.chars().count() as u16;

        let line = Line::from(Span::styled(label, Theme::spinner_style()));
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height / 2;
        buf.set_line(x, y, &line, width);
    }
}
