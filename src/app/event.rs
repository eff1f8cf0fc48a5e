//! Terminal event abstraction.
//!
//! A background task polls crossterm and forwards simplified events over a
//! channel, so the main loop can `select!` without blocking.  When nothing
//! happens within the tick rate a `Tick` is sent instead — ticks drive the
//! spinner, the entrance animation, and the inactivity check.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
    Tick,
}

/// Spawns the polling task and returns its channel.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            if !event::poll(tick_rate).unwrap_or(false) {
                if tx.send(AppEvent::Tick).is_err() {
                    break; // receiver dropped
                }
                continue;
            }
            let Ok(ev) = event::read() else { continue };
            let app_event = match ev {
                // Release/repeat events would double-trigger selections on
                // some terminals; only presses count.
                CtEvent::Key(k) if k.kind == KeyEventKind::Press => AppEvent::Key(k),
                CtEvent::Key(_) => continue,
                CtEvent::Mouse(m) => AppEvent::Mouse(m),
                CtEvent::Resize(_, _) => AppEvent::Resize,
                _ => continue,
            };
            if tx.send(app_event).is_err() {
                break;
            }
        }
    });

    rx
}
