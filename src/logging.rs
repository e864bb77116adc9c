//! Logging setup for fyle.
//!
//! The terminal owns stdout and stderr while the browser runs, so events go to a
//! daily rolling file under the platform data directory instead:
//! `<data_local_dir>/fyle/logs/fyle.YYYY-MM-DD`.
//!
//! The filter is read from `$FYLE_LOG` (e.g. `FYLE_LOG=fyle=debug`), defaulting to `info`.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "FYLE_LOG";

/// Directory the log files are written to.
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("fyle")
        .join("logs")
}

/// Installs the global subscriber. Call once near the start of `main`.
///
/// Returns the log directory on success.
pub fn init_tracing() -> io::Result<PathBuf> {
    let dir = log_dir();
    fs::create_dir_all(&dir)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(rolling::daily(&dir, "fyle"))
        .with_ansi(false)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .map_err(io::Error::other)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
    Ok(dir)
}
