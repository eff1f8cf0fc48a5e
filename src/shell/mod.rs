//! Shell-facing glue — the exit payload and the wrapper functions that
//! turn it into a real route transition.

pub mod integration;
