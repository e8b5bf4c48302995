//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Install signal handlers before any output
//! - Forward the first signal into the shutdown coordinator
//! - Run the waiter to completion
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Runs on the caller's task; nothing is spawned

use std::convert::Infallible;
use std::io::{self, Write};

use crate::config::{validate_config, WaitConfig};
use crate::error::WaitError;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::{Signal, SignalListener};
use crate::waiter::Waiter;

/// Wait on stdout until the process is interrupted.
pub async fn run(config: WaitConfig) -> Result<Signal, WaitError> {
    run_with_output(config, io::stdout()).await
}

/// Same as [`run`], writing to `out` instead of stdout.
pub async fn run_with_output<W: Write>(config: WaitConfig, out: W) -> Result<Signal, WaitError> {
    validate_config(&config).map_err(WaitError::InvalidConfig)?;

    let mut signals = SignalListener::install().map_err(WaitError::SignalSetup)?;
    let shutdown = Shutdown::new();
    let waiter = Waiter::new(out, config);

    tokio::select! {
        signal = waiter.run(shutdown.subscribe()) => Ok(signal),
        never = forward_signals(&mut signals, &shutdown) => match never {},
    }
}

async fn forward_signals(signals: &mut SignalListener, shutdown: &Shutdown) -> Infallible {
    loop {
        let signal = signals.recv().await;
        shutdown.trigger(signal);
    }
}
