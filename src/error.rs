//! Error definitions for the waiter.

use std::io;

use thiserror::Error;

use crate::config::ValidationError;

/// Failures outside the normal interrupt-and-exit path.
///
/// An interruption is not an error: it is the value a finished wait returns.
#[derive(Debug, Error)]
pub enum WaitError {
    /// The built-in configuration failed validation.
    #[error("invalid configuration: {}", join(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// An OS signal handler could not be registered.
    #[error("failed to install signal handler")]
    SignalSetup(#[source] io::Error),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_lists_every_problem() {
        let err = WaitError::InvalidConfig(vec![
            ValidationError::EmptyMessage("startup_message"),
            ValidationError::EmptyLogFilter,
        ]);
        assert_eq!(
            err.to_string(),
            "invalid configuration: startup_message must not be empty, log_filter must not be empty"
        );
    }

    #[test]
    fn signal_setup_keeps_io_error_as_source() {
        use std::error::Error as _;

        let err = WaitError::SignalSetup(io::Error::new(io::ErrorKind::Other, "no signals"));
        assert_eq!(err.to_string(), "failed to install signal handler");
        assert_eq!(err.source().unwrap().to_string(), "no signals");
    }
}
