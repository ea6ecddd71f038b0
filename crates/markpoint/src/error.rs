//! CLI error types.

use markpoint_config::ConfigError;
use markpoint_theme::ThemeError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Theme(#[from] ThemeError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
