//! User configuration, read from `<config_dir>/petform/config.toml`.
//!
//! Every key is optional; a missing file yields [`Config::default`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::form::DEFAULT_SUBMIT_DELAY_MS;
use crate::model::DEFAULT_DESCRIPTION_LIMIT;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has a field of the wrong type.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The platform does not provide a config directory.
    #[error("could not determine config directory")]
    NoConfigDir,
}

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated submission latency in milliseconds.
    pub submit_delay_ms: u64,
    /// Maximum description length in characters.
    pub description_limit: usize,
    /// Default tracing filter; overridden by `PETFORM_LOG`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads the config from the platform config directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path()?)
    }

    /// Loads the config from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Returns `<config_dir>/petform/config.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("petform").join("config.toml"))
    }

    /// Returns the submission delay as a [`Duration`].
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.submit_delay(), crate::form::DEFAULT_SUBMIT_DELAY);
        assert_eq!(config.submit_delay_ms, 2000);
        assert_eq!(config.description_limit, 500);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "submit_delay_ms = 250\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.submit_delay(), Duration::from_millis(250));
        assert_eq!(config.description_limit, 500);
    }

    #[test]
    fn full_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "submit_delay_ms = 10\ndescription_limit = 140\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config,
            Config {
                submit_delay_ms: 10,
                description_limit: 140,
                log_level: "debug".to_string(),
            }
        );
    }

    #[test]
    fn invalid_toml_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "submit_delay_ms = \"soon\"\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn directory_path_is_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            Config::load_from(dir.path()),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        if let Ok(path) = Config::default_path() {
            assert!(path.ends_with("petform/config.toml"));
        }
    }
}
