//! Year tab strip — four fixed, full-width tabs.
//!
//! The strip is rendered by hand (rather than with [`ratatui::widgets::Tabs`])
//! so every tab gets an equal quarter of the width and mouse hit-testing can
//! share the same arithmetic.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Widget},
};

use crate::catalog::partition::YEAR_COUNT;
use crate::ui::theme::Theme;

/// Fixed tab labels, one per academic year.
pub const YEAR_LABELS: [&str; YEAR_COUNT] = ["Year 1", "Year 2", "Year 3", "Year 4"];

/// The tab strip widget.
pub struct YearTabs {
    pub active: usize,
    /// Dimmed during the panel's own entrance fade.
    pub faint: bool,
}

impl Widget for YearTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Schedule ")
            .title_style(Theme::title_style())
            .borders(Borders::ALL)
            .border_style(Theme::border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < YEAR_COUNT as u16 || inner.height == 0 {
            return;
        }

        for (i, label) in YEAR_LABELS.iter().enumerate() {
            let Some(slot) = tab_slot(inner, i) else {
                continue;
            };
            let style = if self.faint {
                Theme::button_faint_style()
            } else if i == self.active {
                Theme::tab_active_style()
            } else {
                Theme::tab_style()
            };
            let line = Line::styled(*label, style);
            let label_w = (label.len() as u16).min(slot.width);
            let x = slot.x + slot.width.saturating_sub(label_w) / 2;
            buf.set_line(x, slot.y, &line, label_w);
        }
    }
}

/// Equal-width slot of tab `i` inside the strip's inner area.
fn tab_slot(inner: Rect, i: usize) -> Option<Rect> {
    if i >= YEAR_COUNT {
        return None;
    }
    let slot_w = inner.width / YEAR_COUNT as u16;
    if slot_w == 0 {
        return None;
    }
    Some(Rect {
        x: inner.x + i as u16 * slot_w,
        y: inner.y,
        width: slot_w,
        height: 1,
    })
}

/// Which tab a click at `(column, row)` lands on, if any.
pub fn hit_test(strip_area: Rect, column: u16, row: u16) -> Option<usize> {
    let inner = Rect {
        x: strip_area.x.saturating_add(1),
        y: strip_area.y.saturating_add(1),
        width: strip_area.width.saturating_sub(2),
        height: strip_area.height.saturating_sub(2),
    };
    if row < inner.y || row >= inner.y + inner.height {
        return None;
    }
    if column < inner.x || column >= inner.x + inner.width {
        return None;
    }
    let slot_w = inner.width / YEAR_COUNT as u16;
    if slot_w == 0 {
        return None;
    }
    let tab = ((column - inner.x) / slot_w) as usize;
    // Clicks in the rounding slack past the last slot count as the last tab.
    Some(tab.min(YEAR_COUNT - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_maps_quarters_to_tabs() {
        let strip = Rect::new(0, 0, 42, 3);
        // inner: x 1..41, width 40, slots of 10.
        assert_eq!(hit_test(strip, 1, 1), Some(0));
        assert_eq!(hit_test(strip, 10, 1), Some(0));
        assert_eq!(hit_test(strip, 11, 1), Some(1));
        assert_eq!(hit_test(strip, 31, 1), Some(3));
        // Rounding slack clamps to the last tab.
        assert_eq!(hit_test(strip, 40, 1), Some(3));
    }

    #[test]
    fn hit_test_outside_strip_misses() {
        let strip = Rect::new(0, 0, 42, 3);
        assert_eq!(hit_test(strip, 5, 0), None, "border row");
        assert_eq!(hit_test(strip, 5, 3), None, "below strip");
        assert_eq!(hit_test(strip, 0, 1), None, "left border");
    }
}
