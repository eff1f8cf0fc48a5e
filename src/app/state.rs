//! Central application state.
//!
//! `SelectionState` is the patch of real behaviour: a loading flag, the
//! active year tab, and the partitioned buckets.  Everything else in
//! `AppState` is glue the event loop needs (quit flag, focus ring, status
//! text, animation playback).

use crate::app::nav::{Navigator, ShellNavigator};
use crate::catalog::partition::{partition, RenderableItem, YEAR_COUNT};
use crate::catalog::store::CatalogProvider;
use crate::config::AppConfig;
use crate::ui::reveal::StaggeredReveal;

// ───────────────────────────────────────── selection ─────────

/// Selection view state machine: `Loading → Ready`, then tab changes only.
#[derive(Debug, Default)]
pub struct SelectionState {
    /// `false` until the catalog has been read and partitioned.  While
    /// unset, the renderer shows only the loading indicator and the input
    /// handler withholds every interaction.
    pub loaded: bool,
    /// Visible year tab, always in `0..YEAR_COUNT`.
    pub active_tab: usize,
    /// All four buckets, materialized once at load and kept in memory so a
    /// tab change is a pure visibility flip.
    buckets: Option<[Vec<RenderableItem>; YEAR_COUNT]>,
}

impl SelectionState {
    /// Read the catalog, partition it, and transition to ready.
    ///
    /// Re-entry guarded: the event loop may call this on every tick, but
    /// the read happens at most once per run.
    pub fn initialize(&mut self, provider: &dyn CatalogProvider) {
        if self.loaded {
            return;
        }
        let raw = provider.get();
        self.buckets = Some(partition(raw.as_deref()));
        self.loaded = true;
    }

    /// Switch the visible tab.  Out-of-range indices are ignored (the
    /// 4-way selector never emits them, but a bad mouse hit must not
    /// panic), and repeating the current tab is a no-op so entrance
    /// animations keyed on a change never restart spuriously.
    /// Returns whether the tab actually changed.
    pub fn change_tab(&mut self, tab: usize) -> bool {
        if tab >= YEAR_COUNT || tab == self.active_tab {
            return false;
        }
        self.active_tab = tab;
        true
    }

    /// Request navigation to the detail route for `group`.
    ///
    /// Side-effect only — takes `&self`, so selection state provably stays
    /// untouched.  The group name is passed through verbatim: the detail
    /// view keys off the exact `group=` parameter.
    pub fn select_group(&self, group: &str, navigator: &mut dyn Navigator) {
        navigator.navigate(&format!("/view?group={group}"));
    }

    /// Items of the visible bucket (empty until loaded).
    pub fn visible_items(&self) -> &[RenderableItem] {
        self.bucket(self.active_tab)
    }

    /// Items of an arbitrary bucket (empty until loaded).
    pub fn bucket(&self, tab: usize) -> &[RenderableItem] {
        self.buckets
            .as_ref()
            .and_then(|buckets| buckets.get(tab))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

// ───────────────────────────────────────── app state ─────────

/// Top-level application state.
pub struct AppState {
    /// The selection view's state machine.
    pub selection: SelectionState,
    /// Records the route once a group is picked; emitted at teardown.
    pub navigator: ShellNavigator,
    /// Keyboard focus within the visible bucket's grid.
    pub focused: usize,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// Entrance animation playback for the visible bucket.
    pub reveal: StaggeredReveal,
    /// Monotonic tick counter driving the loading spinner.
    pub spinner_tick: u64,
    /// Status-bar label for the snapshot's age ("synced 2h ago").
    pub sync_label: String,
    /// User-configurable keybindings and settings.
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let reveal = StaggeredReveal::new(config.animations);
        Self {
            selection: SelectionState::default(),
            navigator: ShellNavigator::default(),
            focused: 0,
            should_quit: false,
            reveal,
            spinner_tick: 0,
            sync_label: String::new(),
            config,
        }
    }

    /// Clamp the focus ring after the visible bucket changed.
    pub fn clamp_focus(&mut self) {
        let len = self.selection.visible_items().len();
        if len == 0 {
            self.focused = 0;
        } else if self.focused >= len {
            self.focused = len - 1;
        }
    }
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::nav::Navigator;

    /// In-memory stand-in for the durable cache.
    struct FakeProvider {
        payload: Option<&'static str>,
        reads: std::cell::Cell<usize>,
    }

    impl FakeProvider {
        fn new(payload: Option<&'static str>) -> Self {
            Self {
                payload,
                reads: std::cell::Cell::new(0),
            }
        }
    }

    impl CatalogProvider for FakeProvider {
        fn get(&self) -> Option<String> {
            self.reads.set(self.reads.get() + 1);
            self.payload.map(str::to_string)
        }
    }

    /// Records navigation requests instead of performing them.
    #[derive(Default)]
    struct RecordingNavigator {
        targets: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, target: &str) {
            self.targets.push(target.to_string());
        }
    }

    const CATALOG: &str = r#"{"list":[["G1"],["G2A","G2B"],[],["G4"]]}"#;

    #[test]
    fn initialize_transitions_to_ready_exactly_once() {
        let provider = FakeProvider::new(Some(CATALOG));
        let mut state = SelectionState::default();
        assert!(!state.loaded);

        state.initialize(&provider);
        assert!(state.loaded);
        assert_eq!(provider.reads.get(), 1);

        // Re-render re-entry must not re-read.
        state.initialize(&provider);
        assert_eq!(provider.reads.get(), 1);
    }

    #[test]
    fn absent_catalog_still_reaches_ready_with_empty_buckets() {
        let provider = FakeProvider::new(None);
        let mut state = SelectionState::default();
        state.initialize(&provider);

        assert!(state.loaded);
        for tab in 0..YEAR_COUNT {
            assert!(state.bucket(tab).is_empty());
        }
    }

    #[test]
    fn tab_one_shows_second_bucket_in_order() {
        let provider = FakeProvider::new(Some(CATALOG));
        let mut state = SelectionState::default();
        state.initialize(&provider);

        assert!(state.change_tab(1));
        let groups: Vec<&str> = state
            .visible_items()
            .iter()
            .map(|item| item.group.as_str())
            .collect();
        assert_eq!(groups, ["G2A", "G2B"]);
    }

    #[test]
    fn change_tab_is_idempotent_and_bounded() {
        let mut state = SelectionState::default();

        assert!(state.change_tab(2));
        assert!(!state.change_tab(2), "same tab is a no-op");
        assert_eq!(state.active_tab, 2);

        assert!(!state.change_tab(YEAR_COUNT), "out of range ignored");
        assert_eq!(state.active_tab, 2);
    }

    #[test]
    fn select_group_emits_one_request_and_mutates_nothing() {
        let provider = FakeProvider::new(Some(CATALOG));
        let mut state = SelectionState::default();
        state.initialize(&provider);
        state.change_tab(1);

        let mut navigator = RecordingNavigator::default();
        state.select_group("G2A", &mut navigator);

        assert_eq!(navigator.targets, ["/view?group=G2A"]);
        assert!(state.loaded);
        assert_eq!(state.active_tab, 1);
    }

    #[test]
    fn buckets_are_empty_before_load() {
        let state = SelectionState::default();
        assert!(state.visible_items().is_empty());
    }
}
