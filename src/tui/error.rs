use crate::config::ConfigError;

/// Errors that end the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Terminal setup, drawing or event polling failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file exists but could not be used.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
