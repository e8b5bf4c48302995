//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`
//! - Diagnostics go to stderr; stdout is reserved for the two status lines

pub mod logging;
