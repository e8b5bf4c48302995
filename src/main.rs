//! Prints a line, waits until interrupted, prints another line, exits.
//!
//! ```text
//! $ indefinite-wait
//! Application is waiting indefinitely...
//! ^C
//! Application interrupted
//! ```

use indefinite_wait::config::WaitConfig;
use indefinite_wait::lifecycle::startup;
use indefinite_wait::observability::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = WaitConfig::default();
    logging::init(&config.log_filter);

    tracing::debug!("indefinite-wait v{} starting", env!("CARGO_PKG_VERSION"));

    let signal = startup::run(config).await?;
    tracing::debug!(signal = %signal, "Shutdown complete");
    Ok(())
}
