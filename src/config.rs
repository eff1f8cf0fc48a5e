//! User configuration — keybindings and kiosk settings.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/group-pick/config.toml` (default
//! `~/.config/group-pick/config.toml`).

use std::collections::HashMap;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions in the selection view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    PrevTab,
    NextTab,
    OpenGroup,
    Quit,
}

impl Action {
    /// Ordered list of all actions (config file emission order).
    pub const ALL: &[Action] = &[
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveUp,
        Action::MoveDown,
        Action::PrevTab,
        Action::NextTab,
        Action::OpenGroup,
        Action::Quit,
    ];

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::MoveLeft => "move_left",
            Action::MoveRight => "move_right",
            Action::MoveUp => "move_up",
            Action::MoveDown => "move_down",
            Action::PrevTab => "prev_tab",
            Action::NextTab => "next_tab",
            Action::OpenGroup => "open_group",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        match s {
            "move_left" => Some(Action::MoveLeft),
            "move_right" => Some(Action::MoveRight),
            "move_up" => Some(Action::MoveUp),
            "move_down" => Some(Action::MoveDown),
            "prev_tab" => Some(Action::PrevTab),
            "next_tab" => Some(Action::NextTab),
            "open_group" => Some(Action::OpenGroup),
            "quit" => Some(Action::Quit),
            _ => None,
        }
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT are
    /// compared; platform-specific modifiers like SUPER are ignored.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// User-friendly display string (e.g. `"Shift+Tab"`, `"↑"`, `"q"`).
    pub fn display(&self) -> String {
        self.format(true)
    }

    /// Config-file form (e.g. `"Shift+Tab"`, `"Up"`, `"q"`).
    fn to_config_string(&self) -> String {
        self.format(false)
    }

    fn format(&self, pretty: bool) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => if pretty { "↑".into() } else { "Up".to_string() },
            KeyCode::Down => if pretty { "↓".into() } else { "Down".to_string() },
            KeyCode::Left => if pretty { "←".into() } else { "Left".to_string() },
            KeyCode::Right => if pretty { "→".into() } else { "Right".to_string() },
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::BackTab => "BackTab".into(),
            other => format!("{other:?}"),
        });
        s
    }

    /// Parse a key string like `"Shift+Tab"`, `"Up"`, `"q"`, `"Enter"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "space" => KeyCode::Char(' '),
            s if s.len() == 1 => KeyCode::Char(s.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration — keybindings and kiosk settings.
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Idle seconds before the session redirects home.  0 disables.
    pub idle_timeout_secs: u64,
    /// Entrance animations (staggered reveal).  Kiosks on slow terminals
    /// may want this off.
    pub animations: bool,
}

impl AppConfig {
    /// Hard-coded defaults.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let shift = KeyModifiers::SHIFT;
        let mut m = HashMap::new();

        m.insert(MoveLeft, vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n)]);
        m.insert(MoveRight, vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n)]);
        m.insert(MoveUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(MoveDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(PrevTab, vec![KeyBind::new(BackTab, shift)]);
        m.insert(NextTab, vec![KeyBind::new(Tab, n)]);
        m.insert(OpenGroup, vec![KeyBind::new(Enter, n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        m
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: move | {}/1-4: year | {}: open | {}: quit",
            self.short_binding(Action::MoveLeft),
            self.short_binding(Action::MoveRight),
            self.short_binding(Action::NextTab),
            self.short_binding(Action::OpenGroup),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.  A missing file is
    /// seeded with the defaults so kiosk operators have something to edit.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                return Self::parse_config(&contents);
            }
        }
        let config = Self::default();
        if let Err(err) = config.save() {
            tracing::debug!("could not seed config file: {err}");
        }
        config
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            // Kiosk settings.
            match key {
                "idle_timeout_secs" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.idle_timeout_secs = v;
                    }
                    continue;
                }
                "animations" => {
                    config.animations = value == "true";
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                continue;
            };

            let mut parsed = Vec::new();
            for part in value.split(',') {
                let part = part.trim().trim_matches('"');
                if let Some(bind) = KeyBind::parse(part) {
                    parsed.push(bind);
                }
            }
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# group-pick configuration".to_string(),
            String::new(),
            "# Kiosk settings".to_string(),
            format!("idle_timeout_secs = {}", self.idle_timeout_secs),
            format!("animations = {}", self.animations),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab, BackTab, Space".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            idle_timeout_secs: 120,
            animations: true,
        }
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/group-pick/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("group-pick").join("config.toml")
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialised_config_parses_back() {
        let mut config = AppConfig::default();
        config.idle_timeout_secs = 45;
        config.animations = false;
        config
            .bindings
            .insert(Action::Quit, vec![KeyBind::new(KeyCode::Char('x'), KeyModifiers::CONTROL)]);

        let parsed = AppConfig::parse_config(&config.serialise());
        assert_eq!(parsed.idle_timeout_secs, 45);
        assert!(!parsed.animations);
        assert_eq!(
            parsed.bindings.get(&Action::Quit).unwrap(),
            &[KeyBind::new(KeyCode::Char('x'), KeyModifiers::CONTROL)]
        );
    }

    #[test]
    fn malformed_lines_fall_back_to_defaults() {
        let parsed = AppConfig::parse_config("idle_timeout_secs = soon\nnot a line\nquit = Meta+q\n");
        assert_eq!(parsed.idle_timeout_secs, 120);
        // Unparseable binding leaves the default in place.
        assert!(parsed
            .bindings
            .get(&Action::Quit)
            .unwrap()
            .contains(&KeyBind::new(KeyCode::Char('q'), KeyModifiers::NONE)));
    }

    #[test]
    fn modifier_count_breaks_binding_ties() {
        let mut config = AppConfig::default();
        config
            .bindings
            .insert(Action::MoveUp, vec![KeyBind::new(KeyCode::Char('k'), KeyModifiers::NONE)]);
        config
            .bindings
            .insert(Action::PrevTab, vec![KeyBind::new(KeyCode::Char('k'), KeyModifiers::CONTROL)]);

        let event = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(config.match_key(event), Some(Action::PrevTab));
    }
}
