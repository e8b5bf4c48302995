//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Install signal handlers → Print banner → Wait
//!
//! Signals (signals.rs):
//!     SIGINT/SIGTERM/SIGHUP/SIGQUIT → first one triggers shutdown
//!
//! Shutdown (shutdown.rs):
//!     Triggered once → waiter prints interruption line → Exit
//! ```
//!
//! # Design Decisions
//! - Handlers are installed before the banner is printed
//! - Every signal kind is treated the same
//! - Shutdown is single-shot; later signals are ignored

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{Shutdown, ShutdownListener};
pub use signals::{Signal, SignalListener};
