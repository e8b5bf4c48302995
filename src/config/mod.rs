//! Configuration for the waiter.
//!
//! # Data Flow
//! ```text
//! WaitConfig::default() (compiled in)
//!     → validation.rs (semantic checks)
//!     → lifecycle::startup (immutable for the process lifetime)
//! ```
//!
//! # Design Decisions
//! - No file, flag or environment source; the two output lines are fixed
//! - Validation returns every problem, not just the first

pub mod schema;
pub mod validation;

pub use schema::WaitConfig;
pub use validation::{validate_config, ValidationError};
