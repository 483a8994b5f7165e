//! Structured logging initialization.

use crate::error::{TelemetryError, TelemetryResult};
use tracing_subscriber::EnvFilter;

/// Initialize structured logging for the process.
///
/// The filter comes from `RUST_LOG`, defaulting to info globally and debug
/// for the engine's own crates. `RUST_ENV=production` switches the output
/// from human-readable to JSON lines.
pub fn init_logging() -> TelemetryResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,pairmm=debug"));

    let production = matches!(std::env::var("RUST_ENV").as_deref(), Ok("production"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if production {
        builder.json().flatten_event(true).try_init()
    } else {
        builder.with_target(true).try_init()
    };

    result.map_err(|e| TelemetryError::LoggingInit(e.to_string()))
}
