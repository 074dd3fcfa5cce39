//! Tracing setup.
//!
//! The terminal belongs to the TUI, so log output goes to
//! `<data_dir>/petform/petform.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Environment variable that overrides [`Config::log_level`].
pub const LOG_ENV: &str = "PETFORM_LOG";

/// Returns the log file location, if the platform has a data directory.
pub fn log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("petform").join("petform.log"))
}

/// Builds the filter: `PETFORM_LOG` if set and valid, else the configured level.
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Installs a global subscriber that appends to the log file.
///
/// Calling this more than once leaves the first subscriber in place.
pub fn init_tracing(config: &Config) -> io::Result<PathBuf> {
    let path = log_path()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no data directory"))?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(path)
}
