//! Configuration schema definitions.

/// Line written to stdout once the process starts waiting.
pub const STARTUP_MESSAGE: &str = "Application is waiting indefinitely...";

/// Line written to stdout once the wait is interrupted.
pub const INTERRUPTED_MESSAGE: &str = "Application interrupted";

/// Root configuration for the waiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitConfig {
    /// Printed before the wait begins.
    pub startup_message: String,

    /// Printed after an interruption, at most once.
    pub interrupted_message: String,

    /// Fallback `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            startup_message: STARTUP_MESSAGE.to_string(),
            interrupted_message: INTERRUPTED_MESSAGE.to_string(),
            log_filter: "warn".to_string(),
        }
    }
}
