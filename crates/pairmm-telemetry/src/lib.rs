//! Structured logging and session statistics for pairmm.

pub mod error;
pub mod logging;
pub mod stats;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
pub use stats::SessionStats;
