//! Tracing setup for the smith binary
//!
//! Logs go to stderr so stdout carries only the generated output.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Level selected by the global flags. `None` means no flag was given and
/// `RUST_LOG` (or `warn`) applies.
pub fn log_level(verbose: bool, debug: bool, quiet: bool) -> Option<Level> {
    if quiet {
        Some(Level::ERROR)
    } else if debug {
        Some(Level::DEBUG)
    } else if verbose {
        Some(Level::INFO)
    } else {
        None
    }
}

pub fn configure_logging(verbose: bool, debug: bool, quiet: bool) {
    let filter = match log_level(verbose, debug, quiet) {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(false),
        )
        .init();
}
