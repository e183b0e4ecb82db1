//! Configuration management module
//!
//! Handles loading, saving, and validation of the portal configuration.

use crate::app::AppState;
use crate::{PortalError, Result, APP_NAME, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const MIN_TICK_RATE_MS: u64 = 16;
const MAX_TICK_RATE_MS: u64 = 5000;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Portal configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Screen mounted when the shell starts
    pub start_route: AppState,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Default tracing level when RUST_LOG is unset
    pub log_level: String,
    /// Directory for the rolling log file
    pub log_dir: Option<PathBuf>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            start_route: AppState::Home,
            tick_rate_ms: 250,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl PortalConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms < MIN_TICK_RATE_MS || self.tick_rate_ms > MAX_TICK_RATE_MS {
            return Err(PortalError::ConfigError(format!(
                "tick_rate_ms must be between {} and {} (got {})",
                MIN_TICK_RATE_MS, MAX_TICK_RATE_MS, self.tick_rate_ms
            )));
        }

        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(PortalError::ConfigError(format!(
                "Unknown log_level '{}' (expected one of {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Tick rate as a duration
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Set the start route
    pub fn with_start_route(mut self, route: AppState) -> Self {
        self.start_route = route;
        self
    }

    /// Set the tick rate
    pub fn with_tick_rate_ms(mut self, tick_rate_ms: u64) -> Self {
        self.tick_rate_ms = tick_rate_ms;
        self
    }

    /// Set the default log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the log directory
    pub fn with_log_dir(mut self, dir: PathBuf) -> Self {
        self.log_dir = Some(dir);
        self
    }

    /// Resolve the log directory, falling back to $DATA_HOME/tardy-portal/logs
    pub fn resolved_log_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.log_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir().ok_or_else(|| {
            PortalError::ConfigError("Unable to determine data directory".to_string())
        })?;

        Ok(data_dir.join(APP_NAME).join("logs"))
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            PortalError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            PortalError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PortalError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| {
            PortalError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/tardy-portal/tardy-portal.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            PortalError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
