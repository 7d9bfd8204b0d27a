//! Logging setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{DriverError, Result};

/// Picks the log filter: `RUST_LOG` when set, else `debug` or `warn`.
pub fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    })
}

/// Initialize the logging system.
///
/// Log lines go to stderr so stdout carries nothing but tokens.
pub fn init_logging(verbose: bool, ansi: bool) -> Result<()> {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(log_filter(verbose))
        .with(layer)
        .try_init()
        .map_err(|e| DriverError::Logging(format!("Failed to initialize logging: {}", e)))
}
