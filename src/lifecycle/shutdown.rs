//! Shutdown coordination.

use tokio::sync::watch;

use crate::lifecycle::signals::Signal;

/// Single-shot coordinator for graceful shutdown.
///
/// Only the first [`trigger`](Shutdown::trigger) is recorded; listeners that
/// subscribe after it still observe it.
#[derive(Debug)]
pub struct Shutdown {
    tx: watch::Sender<Option<Signal>>,
}

impl Shutdown {
    /// Create a new, untriggered coordinator.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }

    /// Record an interruption. Returns `false` if one was already recorded.
    pub fn trigger(&self, signal: Signal) -> bool {
        let first = self.tx.send_if_modified(|current| {
            if current.is_some() {
                return false;
            }
            *current = Some(signal);
            true
        });
        if !first {
            tracing::debug!(signal = %signal, "Shutdown already triggered, ignoring");
        }
        first
    }

    /// The recorded interruption, if any.
    pub fn triggered(&self) -> Option<Signal> {
        *self.tx.borrow()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving half of a [`Shutdown`].
#[derive(Debug, Clone)]
pub struct ShutdownListener {
    rx: watch::Receiver<Option<Signal>>,
}

impl ShutdownListener {
    /// Wait until shutdown is triggered.
    ///
    /// If the coordinator is dropped without ever being triggered this never
    /// resolves.
    pub async fn recv(&mut self) -> Signal {
        let signal = self
            .rx
            .wait_for(Option::is_some)
            .await
            .ok()
            .and_then(|current| *current);
        match signal {
            Some(signal) => signal,
            None => std::future::pending().await,
        }
    }
}
