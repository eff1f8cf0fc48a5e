//! Group panel — a wrapped, centered grid of button-like cells for the
//! active bucket.
//!
//! Keyboard movement and mouse hit-testing both go through the same
//! geometry functions, so a click can never land on a cell the renderer
//! didn't draw.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::catalog::partition::RenderableItem;
use crate::ui::reveal::{ItemPhase, StaggeredReveal};
use crate::ui::theme::Theme;

/// Button cell size, chosen to fit typical group codes with room to spare.
const CELL_W: u16 = 18;
const CELL_H: u16 = 3;
const GAP_X: u16 = 2;
const GAP_Y: u16 = 1;

// ───────────────────────────────────────── geometry ──────────

/// Buttons per row for a given inner width.
pub fn columns(inner_width: u16) -> usize {
    (((inner_width + GAP_X) / (CELL_W + GAP_X)) as usize).max(1)
}

/// Inner area of the panel block.
fn inner(panel_area: Rect) -> Rect {
    Rect {
        x: panel_area.x.saturating_add(1),
        y: panel_area.y.saturating_add(1),
        width: panel_area.width.saturating_sub(2),
        height: panel_area.height.saturating_sub(2),
    }
}

/// Where cell `index` of a `count`-item bucket sits, or `None` when the
/// row would fall below the visible area.  Every row is centered
/// independently, so a partial last row sits in the middle like the
/// space-around flex layout it mimics.
fn cell_rect(inner: Rect, count: usize, index: usize) -> Option<Rect> {
    if index >= count {
        return None;
    }
    let cols = columns(inner.width);
    let row = index / cols;
    let col = index % cols;

    let in_row = cols.min(count - row * cols);
    let row_w = in_row as u16 * CELL_W + (in_row as u16 - 1) * GAP_X;
    let x0 = inner.x + inner.width.saturating_sub(row_w) / 2;

    let y = inner.y + row as u16 * (CELL_H + GAP_Y);
    if y + CELL_H > inner.y + inner.height {
        return None;
    }
    Some(Rect {
        x: x0 + col as u16 * (CELL_W + GAP_X),
        y,
        width: CELL_W,
        height: CELL_H,
    })
}

/// Which cell a click at `(column, row)` lands on, if any.
pub fn hit_test(panel_area: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
    let inner = inner(panel_area);
    (0..count).find(|&index| {
        cell_rect(inner, count, index).is_some_and(|cell| {
            column >= cell.x
                && column < cell.x + cell.width
                && row >= cell.y
                && row < cell.y + cell.height
        })
    })
}

// ───────────────────────────────────────── widget ────────────

/// The active bucket rendered as a grid of buttons.
pub struct GroupGrid<'a> {
    pub items: &'a [RenderableItem],
    pub focused: usize,
    pub reveal: &'a StaggeredReveal,
}

impl Widget for GroupGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border_style());
        let inner_area = block.inner(area);
        block.render(area, buf);

        if inner_area.width < CELL_W || inner_area.height < CELL_H {
            return;
        }

        if self.items.is_empty() {
            let msg = Line::styled("no groups this year", Theme::empty_bucket_style());
            let x = inner_area.x + inner_area.width.saturating_sub(msg.width() as u16) / 2;
            let y = inner_area.y + inner_area.height / 2;
            buf.set_line(x, y, &msg, inner_area.width);
            return;
        }

        for (index, item) in self.items.iter().enumerate() {
            let Some(cell) = cell_rect(inner_area, self.items.len(), index) else {
                continue;
            };

            let (cell, style, focusable) = match self.reveal.item_phase(index) {
                ItemPhase::Hidden => continue,
                ItemPhase::Rising { rows_down, faint } => {
                    let shifted = Rect {
                        y: cell.y + rows_down,
                        ..cell
                    };
                    // Sliding cells may poke below the panel; clip them.
                    if shifted.y + shifted.height > inner_area.y + inner_area.height {
                        continue;
                    }
                    let style = if faint {
                        Theme::button_faint_style()
                    } else {
                        Theme::button_style()
                    };
                    (shifted, style, false)
                }
                ItemPhase::Settled => (cell, Theme::button_style(), true),
            };

            let style = if focusable && index == self.focused {
                Theme::button_focused_style()
            } else {
                style
            };

            let button = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style);
            let label_area = button.inner(cell);
            button.render(cell, buf);

            let line = Line::styled(item.group.as_str(), style);
            let label_w = (line.width() as u16).min(label_area.width);
            let x = label_area.x + label_area.width.saturating_sub(label_w) / 2;
            buf.set_line(x, label_area.y, &line, label_w);
        }
    }
}

// ───────────────────────────────────────── tests ─────────────
