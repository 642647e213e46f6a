//! Configuration management
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_HEADER_DATE_FORMAT, LOCAL_CONFIG_FILE,
    LOG_DEFAULT_LEVEL, OTP_DEFAULT_LENGTH, OTP_MAX_LENGTH, OTP_MIN_LENGTH, TOKEN_DEFAULT_EXPIRY_HOURS,
    TOKEN_MAX_EXPIRY_HOURS,
};
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub otp: OtpConfig,
    pub token: TokenConfig,
    pub logging: LoggingConfig,
}

/// One-time password configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OtpConfig {
    /// Number of digits in generated OTPs
    pub length: i32,
}

/// Token configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Hours until an issued token expires (negative = already expired)
    pub expiry_hours: i32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
    /// Minimum level: "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Log file path; defaults to the data directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            length: OTP_DEFAULT_LENGTH,
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            expiry_hours: TOKEN_DEFAULT_EXPIRY_HOURS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: LOG_DEFAULT_LEVEL.to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level filter
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load the active configuration file, or defaults when none exists
    pub fn load() -> Result<Self> {
        match Self::active_config_file() {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load and validate configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))
            .and_then(|content| {
                toml::from_str::<Config>(&content)
                    .with_context(|| format!("Failed to parse config file: {}", path.display()))
            })?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Config file locations in order of precedence: `./apputil.toml`, then the XDG config file
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Ok(xdg_config) = Self::default_config_path() {
            paths.push(xdg_config);
        }
        paths
    }

    /// First existing config file, which is the one [`Config::load`] reads
    pub fn active_config_file() -> Option<PathBuf> {
        Self::candidate_paths().into_iter().find(|path| path.exists())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(OTP_MIN_LENGTH..=OTP_MAX_LENGTH).contains(&self.otp.length) {
            anyhow::bail!(
                "otp.length must be between {} and {} digits, got {}",
                OTP_MIN_LENGTH,
                OTP_MAX_LENGTH,
                self.otp.length
            );
        }

        if self.token.expiry_hours.abs() > TOKEN_MAX_EXPIRY_HOURS {
            anyhow::bail!(
                "token.expiry_hours cannot exceed {} hours in either direction, got {}",
                TOKEN_MAX_EXPIRY_HOURS,
                self.token.expiry_hours
            );
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Write the default configuration to `path`.
    ///
    /// An existing file is left untouched unless `overwrite` is set.
    pub fn generate_default_config<P: AsRef<Path>>(path: P, overwrite: bool) -> Result<()> {
        let path = path.as_ref();
        if path.exists() && !overwrite {
            anyhow::bail!("Config file already exists: {}", path.display());
        }

        let body = toml::to_string_pretty(&Self::default()).context("Failed to serialize default config")?;
        let content = format!(
            "# apputil configuration file\n# Generated on {}\n\n{}",
            chrono::Local::now().format(CONFIG_HEADER_DATE_FORMAT),
            body
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(path, content).with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Per-user config directory, e.g. `~/.config/apputil`
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    /// Per-user config file, written by `apputil init-config`
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }
}
