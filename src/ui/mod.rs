//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the selection state and turns it into pixels on the
//! terminal.  No catalog I/O happens here.

pub mod layout;
pub mod panel;
pub mod reveal;
pub mod spinner;
pub mod tabs;
pub mod theme;
