//! Tracing setup
//!
//! The terminal is owned by the UI, so events go to a daily-rolling file
//! instead of stdout.
//!
//! Login submissions are emitted at DEBUG on [`CREDENTIALS_TARGET`] and carry
//! the raw password. The configured `log_level` never enables that target;
//! it reaches the log file only when RUST_LOG names it explicitly, e.g.
//! `RUST_LOG=info,tardy_portal::login=debug`.

use crate::config::PortalConfig;
use crate::sink::CREDENTIALS_TARGET;
use crate::{PortalError, Result, LOG_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter for a configured level, with the credentials target switched off
pub fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!(
        "{},{}=off",
        level.to_ascii_lowercase(),
        CREDENTIALS_TARGET
    ))
}

/// RUST_LOG directives when given and parseable, otherwise the configured level
pub fn filter_from(rust_log: Option<&str>, default_level: &str) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| default_filter(default_level))
}

/// Build the filter: RUST_LOG when set, otherwise the configured level
pub fn env_filter(default_level: &str) -> EnvFilter {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(rust_log.as_deref(), default_level)
}

/// Create the log directory and return the active log file prefix path
pub fn prepare_log_dir(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| {
        PortalError::LoggingError(format!(
            "Failed to create log directory {}: {}",
            dir.display(),
            e
        ))
    })?;
    Ok(dir.join(LOG_FILE))
}

/// Install the global subscriber. Keep the guard alive until exit or
/// buffered lines are lost.
pub fn init(config: &PortalConfig) -> Result<WorkerGuard> {
    let dir = config.resolved_log_dir()?;
    prepare_log_dir(&dir)?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.log_level))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| PortalError::LoggingError(format!("Failed to install subscriber: {}", e)))?;

    tracing::info!(log_dir = %dir.display(), "Logging initialized");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::test_support::capture;
    use super::*;
    use tempfile::TempDir;
    use tracing::{debug, info};

    fn emit_sample_events() {
        info!(target: "tardy_portal::app", "route event");
        debug!(target: "tardy_portal::app", "debug event");
        debug!(target: CREDENTIALS_TARGET, password = "pw", "credentials event");
    }

    #[test]
    fn test_prepare_log_dir_creates_nested_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("a").join("b");
        let file = prepare_log_dir(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(file, dir.join(LOG_FILE));
    }

    #[test]
    fn test_prepare_log_dir_fails_on_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        match prepare_log_dir(&blocker.join("logs")) {
            Err(PortalError::LoggingError(msg)) => assert!(msg.contains("log directory")),
            other => panic!("expected logging error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_filter_respects_level() {
        let out = capture(default_filter("INFO"), emit_sample_events);
        assert!(out.contains("route event"));
        assert!(!out.contains("debug event"));
        assert!(!out.contains("credentials event"));
    }

    #[test]
    fn test_default_filter_never_enables_credentials() {
        let out = capture(default_filter("trace"), emit_sample_events);
        assert!(out.contains("debug event"));
        assert!(!out.contains("credentials event"));
        assert!(!out.contains("pw"));
    }

    #[test]
    fn test_rust_log_overrides_configured_level() {
        let filter = filter_from(Some("warn,tardy_portal::login=debug"), "info");
        let out = capture(filter, emit_sample_events);
        assert!(!out.contains("route event"));
        assert!(out.contains("credentials event"));
    }

    #[test]
    fn test_empty_or_invalid_rust_log_falls_back() {
        for rust_log in [None, Some(""), Some("   "), Some("tardy_portal=notalevel")] {
            let out = capture(filter_from(rust_log, "info"), emit_sample_events);
            assert!(out.contains("route event"), "RUST_LOG={:?}", rust_log);
            assert!(!out.contains("credentials event"), "RUST_LOG={:?}", rust_log);
        }
    }
}
