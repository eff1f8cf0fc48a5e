//! Inactivity guard — armed once at startup, reports when the idle
//! redirect is due.
//!
//! The picker runs on shared kiosk terminals, so an abandoned session must
//! find its way back to the home screen.  This module only tracks activity
//! and expiry; the redirect itself is the wrapper's job (it receives a
//! `__GP_HOME__=` payload when the session ends idle).

use std::time::{Duration, Instant};

/// Tracks the time since the last user interaction.
#[derive(Debug)]
pub struct InactivityGuard {
    /// `None` disables the guard entirely.
    threshold: Option<Duration>,
    last_activity: Instant,
}

impl InactivityGuard {
    /// Arm the guard.  A zero threshold disables it.
    pub fn arm(threshold: Duration) -> Self {
        let threshold = (!threshold.is_zero()).then_some(threshold);
        Self {
            threshold,
            last_activity: Instant::now(),
        }
    }

    /// Record a user interaction (any key or mouse event).
    pub fn note_activity(&mut self) {
        self.last_activity = Instant::now();
    }

    /// Whether the idle threshold has elapsed since the last interaction.
    pub fn redirect_due(&self) -> bool {
        match self.threshold {
            Some(threshold) => self.last_activity.elapsed() >= threshold,
            None => false,
        }
    }
}
