//! The indefinite wait itself.
//!
//! Writes the startup line, parks until a shutdown is triggered, then writes
//! the interruption line. `run` consumes the waiter, so each line is written
//! at most once and always in that order. Output failures are logged and
//! never end the wait.

use std::io::Write;

use crate::config::WaitConfig;
use crate::lifecycle::{ShutdownListener, Signal};

/// Owns the output sink for the lifetime of one wait.
pub struct Waiter<W> {
    out: W,
    config: WaitConfig,
}

impl<W: Write> Waiter<W> {
    pub fn new(out: W, config: WaitConfig) -> Self {
        Self { out, config }
    }

    /// Print the startup line and block until `shutdown` fires.
    ///
    /// There is no timeout.
    pub async fn run(mut self, mut shutdown: ShutdownListener) -> Signal {
        emit(&mut self.out, &self.config.startup_message);
        tracing::debug!("Waiting indefinitely");

        let signal = shutdown.recv().await;
        tracing::debug!(signal = %signal, "Wait interrupted");

        emit(&mut self.out, &self.config.interrupted_message);
        signal
    }
}

fn emit<W: Write>(out: &mut W, line: &str) {
    let written = writeln!(out, "{}", line).and_then(|()| out.flush());
    if let Err(e) = written {
        tracing::warn!(error = %e, line, "Failed to write status line");
    }
}
