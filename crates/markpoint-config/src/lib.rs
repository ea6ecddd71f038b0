//! Configuration management for markpoint.
//!
//! Parses `markpoint.toml` with serde and discovers it in the current
//! directory or its parents. [`CliSettings`] override file values after load.
//!
//! ```toml
//! [markup]
//! debug = false
//! hook_prefix = "child_"
//!
//! [site]
//! title = "${SITE_TITLE:-My Site}"
//! language = "en-US"
//! direction = "ltr"
//!
//! [menu]
//! header_depth = 0
//! footer_depth = 1
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `${VAR}` and `${VAR:-default}` are expanded in:
//! - `markup.hook_prefix`
//! - `site.title`
//! - `site.language`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "markpoint.toml";

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the markup debug flag.
    pub debug_markup: Option<bool>,
    /// Override the hook-name prefix.
    pub hook_prefix: Option<String>,
    /// Override the site title.
    pub title: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Markup registry settings.
    pub markup: MarkupConfig,
    /// Site-wide document settings.
    pub site: SiteConfig,
    /// Navigation menu settings.
    pub menu: MenuConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Markup registry settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    /// Render a `data-markup-id` attribute on every element.
    pub debug: bool,
    /// Prefix prepended to every hook name.
    pub hook_prefix: String,
}

/// Site-wide document settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document title used when a page has none.
    pub title: String,
    /// `lang` of the document.
    pub language: String,
    /// Text direction of the document.
    pub direction: Direction,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            language: "en-US".to_owned(),
            direction: Direction::default(),
        }
    }
}

/// Text direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl Direction {
    /// Value of the `dir` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Navigation menu settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Levels of the header menu (0 = all).
    pub header_depth: usize,
    /// Levels of the footer menu (0 = all).
    pub footer_depth: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            header_depth: 0,
            footer_depth: 1,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.title`").
        field: String,
        /// Error message (e.g., "${`SITE_TITLE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `markpoint.toml` in the current directory and its parents, falling
    /// back to defaults.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, or if
    /// reading, parsing, expansion or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(debug) = settings.debug_markup {
            self.markup.debug = debug;
        }
        if let Some(prefix) = &settings.hook_prefix {
            self.markup.hook_prefix.clone_from(prefix);
        }
        if let Some(title) = &settings.title {
            self.site.title.clone_from(title);
        }
    }

    /// Search for a config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading configuration");
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.language, "site.language")?;

        // The prefix becomes part of every hook name.
        if let Some(c) = self
            .markup
            .hook_prefix
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-')))
        {
            return Err(ConfigError::Validation(format!(
                "markup.hook_prefix contains invalid character {c:?}"
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::Expander::from_env().expand_config(self)
    }
}
