//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the Matrix connection, logging sinks and bot behaviour.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable that overrides `services.matrix.password`.
pub const PASSWORD_ENV: &str = "BMI_BOT_PASSWORD";

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub bot: BotConfig,
}

/// Configuration for various connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub homeserver: String,
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub dir: String,
    #[serde(default = "default_log_file")]
    pub file: String,
    /// Used when `RUST_LOG` is unset.
    #[serde(default)]
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            file: default_log_file(),
            filter: None,
        }
    }
}

fn default_log_dir() -> String {
    "data".to_string()
}
fn default_log_file() -> String {
    "session.log".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct BotConfig {
    /// Skip messages sent before the bot started.
    #[serde(default = "default_true")]
    pub ignore_backlog: bool,
    #[serde(default = "default_true")]
    pub auto_join: bool,
    /// Unfinished calculations are dropped after this many idle minutes.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_minutes: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            ignore_backlog: true,
            auto_join: true,
            idle_timeout_minutes: default_idle_timeout(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_idle_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Reads and parses the YAML file at `path`, then applies environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| crate::strings::logs::config_read_error(&path.display().to_string()))?;
        let mut config = Self::from_yaml(&content)?;
        if let Ok(password) = std::env::var(PASSWORD_ENV) {
            config.services.matrix.password = password;
        }
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context(crate::strings::logs::CONFIG_PARSE_ERROR)
    }
}
