//! A process that waits indefinitely until it is interrupted.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod waiter;

pub use config::WaitConfig;
pub use error::WaitError;
pub use lifecycle::{Shutdown, Signal};
pub use waiter::Waiter;
