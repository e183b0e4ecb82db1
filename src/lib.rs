//! Tardy Portal
//!
//! Terminal front end shell for the eSchool Tardy System: a home card,
//! a login form and a register placeholder behind a small router.

use std::fmt;

pub mod app;
pub mod config;
pub mod form;
pub mod logging;
pub mod sink;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum PortalError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Log file or subscriber setup failed
    LoggingError(String),
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalError::IoError(err) => write!(f, "I/O error: {}", err),
            PortalError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            PortalError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            PortalError::LoggingError(msg) => write!(f, "Logging error: {}", msg),
        }
    }
}

impl std::error::Error for PortalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PortalError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        PortalError::IoError(err)
    }
}

impl From<toml::de::Error> for PortalError {
    fn from(err: toml::de::Error) -> Self {
        PortalError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for PortalError {
    fn from(err: toml::ser::Error) -> Self {
        PortalError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for portal operations
pub type Result<T> = std::result::Result<T, PortalError>;

/// Error handling utilities
pub mod error {
    use super::PortalError;

    /// Convert error to a one-line message for the user
    pub fn user_friendly_message(error: &PortalError) -> String {
        match error {
            PortalError::IoError(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                "Permission denied. Check permissions on the config and log directories."
                    .to_string()
            }
            PortalError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            PortalError::TuiError(_) => {
                "The terminal could not be driven. Try a different terminal emulator.".to_string()
            }
            PortalError::LoggingError(_) => {
                "Failed to set up logging. Check that the log directory is writable.".to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "tardy-portal";
pub const CONFIG_FILE: &str = "tardy-portal.toml";
pub const LOG_FILE: &str = "tardy-portal.log";
pub const SYSTEM_TITLE: &str = "eSchool Tardy System";
