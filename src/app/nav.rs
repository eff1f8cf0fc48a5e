//! Navigation requests — how a selected group leaves the picker.
//!
//! The picker never performs the route transition itself.  It records the
//! target, exits, and prints a machine-readable payload line that the
//! wrapping shell function (see [`crate::shell::integration`]) feeds to the
//! external schedule viewer.

/// Performs (or records) a route transition.
pub trait Navigator {
    /// Request a transition to `target`, e.g. `/view?group=IS-21`.
    fn navigate(&mut self, target: &str);
}

/// Navigator that defers the transition to the wrapping shell: the first
/// request wins, subsequent ones are ignored, and `main` emits the payload
/// after the terminal is restored.
#[derive(Debug, Default)]
pub struct ShellNavigator {
    pending: Option<String>,
}

impl ShellNavigator {
    /// The recorded route, if a selection happened this session.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }
}

impl Navigator for ShellNavigator {
    fn navigate(&mut self, target: &str) {
        if self.pending.is_some() {
            return;
        }
        tracing::debug!("navigation requested: {target}");
        self.pending = Some(target.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_wins() {
        let mut nav = ShellNavigator::default();
        assert!(nav.pending().is_none());

        nav.navigate("/view?group=G2A");
        nav.navigate("/view?group=OTHER");
        assert_eq!(nav.pending(), Some("/view?group=G2A"));
    }
}
