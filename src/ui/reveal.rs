//! Staggered entrance animation.
//!
//! When a bucket becomes visible its buttons fade in and slide upward, each
//! one delayed by a fixed amount per index; the panel itself has a short
//! fade of its own before the first button starts.  A terminal has no
//! alpha, so "fade" is a style ramp (hidden → faint → normal) and "slide"
//! is a row offset that shrinks to zero over a few ticks.

/// Ticks before the first item starts (panel fade).
const PANEL_DELAY: u64 = 2;
/// Per-index start delay.
const ITEM_STAGGER: u64 = 2;
/// Ticks an item spends rising.
const RISE_TICKS: u64 = 4;
/// Initial downward displacement in rows.
const RISE_ROWS: u16 = 2;

/// Where a single item is in its entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPhase {
    /// Not started yet — draw nothing.
    Hidden,
    /// Sliding up; `rows_down` is the remaining displacement and `faint`
    /// selects the dimmed style for the first half of the rise.
    Rising { rows_down: u16, faint: bool },
    /// In place, normal style.
    Settled,
}

/// Tick-driven playback state for one bucket's entrance.
#[derive(Debug, Clone)]
pub struct StaggeredReveal {
    enabled: bool,
    tick: u64,
}

impl StaggeredReveal {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, tick: 0 }
    }

    /// Restart playback — call when the visible bucket actually changes.
    pub fn restart(&mut self) {
        self.tick = 0;
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        self.tick = self.tick.saturating_add(1);
    }

    /// Whether the panel-level fade is still in progress.
    pub fn panel_faint(&self) -> bool {
        self.enabled && self.tick < PANEL_DELAY
    }

    /// Entrance phase of the item at `index`.
    pub fn item_phase(&self, index: usize) -> ItemPhase {
        if !self.enabled {
            return ItemPhase::Settled;
        }
        let start = PANEL_DELAY + index as u64 * ITEM_STAGGER;
        if self.tick < start {
            return ItemPhase::Hidden;
        }
        let progress = self.tick - start;
        if progress >= RISE_TICKS {
            return ItemPhase::Settled;
        }
        let remaining = RISE_TICKS - progress;
        ItemPhase::Rising {
            rows_down: (remaining as u16 * RISE_ROWS).div_ceil(RISE_TICKS as u16),
            faint: progress < RISE_TICKS / 2,
        }
    }

    /// True while any of `count` items is still moving (keeps the event
    /// loop redrawing on ticks).
    pub fn is_animating(&self, count: usize) -> bool {
        if !self.enabled || count == 0 {
            return self.panel_faint();
        }
        let last_start = PANEL_DELAY + (count as u64 - 1) * ITEM_STAGGER;
        self.tick < last_start + RISE_TICKS
    }
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn at(tick: u64) -> StaggeredReveal {
        let mut reveal = StaggeredReveal::new(true);
        for _ in 0..tick {
            reveal.tick();
        }
        reveal
    }

    #[test]
    fn disabled_reveal_is_always_settled() {
        let reveal = StaggeredReveal::new(false);
        assert_eq!(reveal.item_phase(0), ItemPhase::Settled);
        assert!(!reveal.is_animating(10));
    }

    #[test]
    fn items_start_in_index_order() {
        let reveal = at(PANEL_DELAY + ITEM_STAGGER);
        assert_ne!(reveal.item_phase(0), ItemPhase::Hidden);
        assert_ne!(reveal.item_phase(1), ItemPhase::Hidden);
        assert_eq!(reveal.item_phase(2), ItemPhase::Hidden);
    }

    #[test]
    fn displacement_shrinks_to_zero() {
        let start = PANEL_DELAY;
        let early = at(start);
        let ItemPhase::Rising { rows_down, faint } = early.item_phase(0) else {
            panic!("expected rising phase");
        };
        assert_eq!(rows_down, RISE_ROWS);
        assert!(faint);

        let done = at(start + RISE_TICKS);
        assert_eq!(done.item_phase(0), ItemPhase::Settled);
    }

    #[test]
    fn restart_replays_from_hidden() {
        let mut reveal = at(100);
        assert_eq!(reveal.item_phase(3), ItemPhase::Settled);
        reveal.restart();
        assert_eq!(reveal.item_phase(3), ItemPhase::Hidden);
        assert!(reveal.is_animating(4));
    }

    #[test]
    fn animation_ends_after_last_item_settles() {
        let total = PANEL_DELAY + 3 * ITEM_STAGGER + RISE_TICKS;
        assert!(at(total - 1).is_animating(4));
        assert!(!at(total).is_animating(4));
    }
}
