//! Input handling — maps key/mouse events to state mutations.
//!
//! While the selection state is still loading, every interaction except
//! quitting is withheld; the renderer shows only the indicator, so nothing
//! else is reachable anyway.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::catalog::partition::YEAR_COUNT;
use crate::config::Action;
use crate::ui::{layout::AppLayout, panel, tabs};

use super::state::AppState;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, loading or not.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if !state.selection.loaded {
        if state.config.match_key(key) == Some(Action::Quit) {
            state.should_quit = true;
        }
        return;
    }

    // Digit shortcuts jump straight to a year tab.
    if let KeyCode::Char(c @ '1'..='4') = key.code {
        tab_to(state, c as usize - '1' as usize);
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };
    match action {
        Action::MoveLeft => move_focus(state, -1),
        Action::MoveRight => move_focus(state, 1),
        Action::MoveUp => move_focus(state, -(grid_columns() as isize)),
        Action::MoveDown => move_focus(state, grid_columns() as isize),
        Action::PrevTab => {
            let tab = state
                .selection
                .active_tab
                .checked_sub(1)
                .unwrap_or(YEAR_COUNT - 1);
            tab_to(state, tab);
        }
        Action::NextTab => tab_to(state, (state.selection.active_tab + 1) % YEAR_COUNT),
        Action::OpenGroup => open_focused(state),
        Action::Quit => state.should_quit = true,
    }
}

/// Process a mouse event.  A left click on a tab switches years; a left
/// click on a button opens that group, matching the original single-click
/// buttons.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if !state.selection.loaded {
        return;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let layout = AppLayout::from_area(terminal_area());
    if let Some(tab) = tabs::hit_test(layout.tabs_area, mouse.column, mouse.row) {
        tab_to(state, tab);
        return;
    }

    let count = state.selection.visible_items().len();
    if let Some(index) = panel::hit_test(layout.panel_area, count, mouse.column, mouse.row) {
        state.focused = index;
        open_focused(state);
    }
}

// ── helpers ─────────────────────────────────────────────────────

/// Switch tabs; focus and the entrance animation reset only on an actual
/// change, so repeating the current tab re-renders nothing.
fn tab_to(state: &mut AppState, tab: usize) {
    if state.selection.change_tab(tab) {
        state.focused = 0;
        state.reveal.restart();
    }
}

fn move_focus(state: &mut AppState, delta: isize) {
    let len = state.selection.visible_items().len();
    if len == 0 {
        return;
    }
    let target = state.focused as isize + delta;
    state.focused = target.clamp(0, len as isize - 1) as usize;
}

/// Hand the focused group to the navigator and end the session.
fn open_focused(state: &mut AppState) {
    let Some(item) = state.selection.visible_items().get(state.focused) else {
        return;
    };
    tracing::debug!("opening {}", item.key);
    let group = item.group.clone();
    state.selection.select_group(&group, &mut state.navigator);
    state.should_quit = true;
}

/// Whole-terminal rect for hit-testing, matching what the last draw used.
fn terminal_area() -> Rect {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Rect::new(0, 0, w, h)
}

/// Grid columns at the current terminal width.
fn grid_columns() -> usize {
    let layout = AppLayout::from_area(terminal_area());
    panel::columns(layout.panel_area.width.saturating_sub(2))
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::CatalogProvider;
    use crate::config::AppConfig;

    struct FakeProvider;

    impl CatalogProvider for FakeProvider {
        fn get(&self) -> Option<String> {
            Some(r#"{"list":[["G1"],["G2A","G2B"],[],["G4"]]}"#.into())
        }
    }

    fn ready_state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.selection.initialize(&FakeProvider);
        state
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn interactions_are_withheld_while_loading() {
        let mut state = AppState::new(AppConfig::default());
        handle_key(&mut state, press(KeyCode::Char('2')));
        handle_key(&mut state, press(KeyCode::Tab));
        assert_eq!(state.selection.active_tab, 0);
        assert!(!state.should_quit);

        handle_key(&mut state, press(KeyCode::Char('q')));
        assert!(state.should_quit, "quit stays reachable");
    }

    #[test]
    fn digit_keys_jump_to_tabs() {
        let mut state = ready_state();
        handle_key(&mut state, press(KeyCode::Char('2')));
        assert_eq!(state.selection.active_tab, 1);
        handle_key(&mut state, press(KeyCode::Char('4')));
        assert_eq!(state.selection.active_tab, 3);
    }

    #[test]
    fn tab_keys_cycle_with_wraparound() {
        let mut state = ready_state();
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
        );
        assert_eq!(state.selection.active_tab, 3);
        handle_key(&mut state, press(KeyCode::Tab));
        assert_eq!(state.selection.active_tab, 0);
    }

    #[test]
    fn repeating_the_active_tab_keeps_focus() {
        let mut state = ready_state();
        handle_key(&mut state, press(KeyCode::Char('2')));
        handle_key(&mut state, press(KeyCode::Right));
        assert_eq!(state.focused, 1);

        handle_key(&mut state, press(KeyCode::Char('2')));
        assert_eq!(state.focused, 1, "same tab must not reset focus");
    }

    #[test]
    fn enter_opens_the_focused_group() {
        let mut state = ready_state();
        handle_key(&mut state, press(KeyCode::Char('2')));
        handle_key(&mut state, press(KeyCode::Right));
        handle_key(&mut state, press(KeyCode::Enter));

        assert_eq!(state.navigator.pending(), Some("/view?group=G2B"));
        assert!(state.should_quit);
        assert_eq!(state.selection.active_tab, 1, "selection state untouched");
        assert!(state.selection.loaded);
    }

    #[test]
    fn enter_on_an_empty_bucket_does_nothing() {
        let mut state = ready_state();
        handle_key(&mut state, press(KeyCode::Char('3')));
        handle_key(&mut state, press(KeyCode::Enter));
        assert!(state.navigator.pending().is_none());
        assert!(!state.should_quit);
    }

    #[test]
    fn focus_clamps_at_bucket_edges() {
        let mut state = ready_state();
        handle_key(&mut state, press(KeyCode::Char('2')));
        handle_key(&mut state, press(KeyCode::Left));
        assert_eq!(state.focused, 0);
        for _ in 0..5 {
            handle_key(&mut state, press(KeyCode::Right));
        }
        assert_eq!(state.focused, 1, "two-item bucket");
    }
}
