//! Observability subsystem.
//!
//! Route resolution is synchronous and in-process, so observability here is
//! structured logging only: the library emits tracing events (match, redirect
//! hop, fallback) and binaries install the subscriber.

pub mod logging;

pub use logging::init_logging;
