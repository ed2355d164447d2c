//! Observability subsystem.
//!
//! Diagnostics go through `tracing` to stderr. The default filter is quiet
//! enough that a successful run prints nothing there.

pub mod logging;
