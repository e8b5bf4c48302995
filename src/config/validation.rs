//! Configuration validation.
//!
//! # Responsibilities
//! - Reject empty output lines
//! - Reject output lines that would span more than one line
//! - Require a log filter directive

use std::fmt;

use crate::config::schema::WaitConfig;

/// A single semantic problem with a [`WaitConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A message field is empty.
    EmptyMessage(&'static str),
    /// A message field contains `\n` or `\r`.
    MultiLineMessage(&'static str),
    /// The log filter directive is empty.
    EmptyLogFilter,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyMessage(field) => write!(f, "{} must not be empty", field),
            ValidationError::MultiLineMessage(field) => {
                write!(f, "{} must be a single line", field)
            }
            ValidationError::EmptyLogFilter => write!(f, "log_filter must not be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &WaitConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (field, message) in [
        ("startup_message", &config.startup_message),
        ("interrupted_message", &config.interrupted_message),
    ] {
        if message.is_empty() {
            errors.push(ValidationError::EmptyMessage(field));
        } else if message.contains(['\n', '\r']) {
            errors.push(ValidationError::MultiLineMessage(field));
        }
    }

    if config.log_filter.trim().is_empty() {
        errors.push(ValidationError::EmptyLogFilter);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
