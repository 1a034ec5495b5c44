//! Configuration management for typetodo
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    API_URL_ENV, CONFIG_GENERATED, DEFAULT_API_BASE_URL, DEFAULT_MAX_VISIBLE_NOTIFICATIONS, DEFAULT_NOTIFICATION_SECS,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_ENV, MAX_NOTIFICATION_SECS, MAX_TIMEOUT_SECS, MAX_VISIBLE_NOTIFICATIONS_LIMIT,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub notifications: NotificationsConfig,
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the REST API, without trailing slash
    pub base_url: String,
    /// Environment variable holding the bearer token
    pub token_env: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Start in grouped-by-tag view
    pub group_by_tag: bool,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Icon theme: "Ascii", "Unicode" or "Emoji"
    pub icon_theme: IconTheme,
}

/// Notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Seconds before a notification disappears
    pub dismiss_after_secs: u64,
    /// Notifications shown at once, the rest are summarized
    pub max_visible: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file in the cache directory
    pub enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            group_by_tag: false,
            mouse_enabled: false,
            icon_theme: IconTheme::Unicode,
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            dismiss_after_secs: DEFAULT_NOTIFICATION_SECS,
            max_visible: DEFAULT_MAX_VISIBLE_NOTIFICATIONS,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("typetodo.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("typetodo").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Apply base URL overrides, lowest precedence first: environment, then command line.
    pub fn apply_overrides(&mut self, env_url: Option<String>, cli_url: Option<String>) -> Result<()> {
        if let Some(url) = env_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        if let Some(url) = cli_url {
            self.api.base_url = url.trim().to_string();
        }
        self.api.base_url = self.api.base_url.trim_end_matches('/').to_string();
        self.validate()
    }

    /// Read the base URL override from the process environment.
    #[must_use]
    pub fn env_api_url() -> Option<String> {
        std::env::var(API_URL_ENV).ok()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate API settings
        let url = reqwest::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid api.base_url '{}'", self.api.base_url))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("api.base_url must use http or https, got '{}'", url.scheme());
        }

        if self.api.token_env.trim().is_empty() {
            anyhow::bail!("api.token_env cannot be empty");
        }

        if self.api.timeout_secs == 0 || self.api.timeout_secs > MAX_TIMEOUT_SECS {
            anyhow::bail!(
                "timeout_secs must be between 1 and {}, got {}",
                MAX_TIMEOUT_SECS,
                self.api.timeout_secs
            );
        }

        // Validate notification settings
        if self.notifications.dismiss_after_secs == 0 || self.notifications.dismiss_after_secs > MAX_NOTIFICATION_SECS {
            anyhow::bail!(
                "dismiss_after_secs must be between 1 and {}, got {}",
                MAX_NOTIFICATION_SECS,
                self.notifications.dismiss_after_secs
            );
        }

        if self.notifications.max_visible == 0 || self.notifications.max_visible > MAX_VISIBLE_NOTIFICATIONS_LIMIT {
            anyhow::bail!(
                "max_visible must be between 1 and {}, got {}",
                MAX_VISIBLE_NOTIFICATIONS_LIMIT,
                self.notifications.max_visible
            );
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# typetodo Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("typetodo"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
