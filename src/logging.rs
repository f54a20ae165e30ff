//! Logging
//!
//! File-based tracing setup. The terminal belongs to the TUI, so log output
//! never goes to stdout/stderr: either a rolling file in debug mode (or when a
//! log file is configured), or nothing at all.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{Duration, SystemTime};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "profilekit";

static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Write debug-level logs to the log directory
    pub debug_mode: bool,
    /// Directory for rolling log files
    pub log_dir: PathBuf,
    /// Level used when not in debug mode and `RUST_LOG` is unset
    pub level: String,
    /// Explicit log file; enables file logging outside debug mode
    pub file: Option<PathBuf>,
    /// Emit JSON lines instead of the human format
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LogConfig {
    pub fn new() -> Self {
        Self {
            debug_mode: false,
            log_dir: default_log_dir(),
            level: "info".to_string(),
            file: None,
            json: false,
        }
    }

    pub fn with_debug_mode(mut self, debug: bool) -> Self {
        self.debug_mode = debug;
        self
    }

    pub fn with_log_dir(mut self, dir: PathBuf) -> Self {
        self.log_dir = dir;
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        self.file = file;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Filter directive for the subscriber
    fn filter_directive(&self) -> String {
        if self.debug_mode {
            format!("{}=debug,warn", env!("CARGO_CRATE_NAME"))
        } else {
            self.level.clone()
        }
    }

    /// Where the log file will be written, if file logging is active
    fn target(&self) -> Option<(PathBuf, String)> {
        if let Some(file) = &self.file {
            let dir = file
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| format!("{}.log", LOG_FILE_PREFIX));
            return Some((dir, name));
        }
        if self.debug_mode {
            return Some((self.log_dir.clone(), format!("{}.log", LOG_FILE_PREFIX)));
        }
        None
    }
}

/// Default log directory: `./.profilekit/logs`
pub fn default_log_dir() -> PathBuf {
    PathBuf::from(".profilekit").join("logs")
}

/// Install the global subscriber.
///
/// Returns the appender guard when file logging is active; it must be held
/// until exit so buffered lines are flushed.
pub fn init_logging(config: LogConfig) -> crate::error::Result<Option<WorkerGuard>> {
    let Some((dir, file_name)) = config.target() else {
        return Ok(None);
    };

    std::fs::create_dir_all(&dir)?;

    let appender = if config.file.is_some() {
        tracing_appender::rolling::never(&dir, &file_name)
    } else {
        tracing_appender::rolling::daily(&dir, &file_name)
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.filter_directive()))
        .map_err(|e| crate::error::ProfileKitError::Config(format!("Invalid log level: {}", e)))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json {
        registry
            .with(fmt::layer().json().with_writer(writer).with_ansi(false))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(true),
            )
            .try_init()
    };
    result.map_err(|e| crate::error::ProfileKitError::Config(e.to_string()))?;

    let _ = LOG_PATH.set(dir.join(&file_name));
    tracing::info!("Logging initialized in {}", dir.display());
    Ok(Some(guard))
}

/// Path of the active log file, if file logging was initialized
pub fn get_log_path() -> Option<PathBuf> {
    LOG_PATH.get().cloned()
}

/// Remove `.log` files older than `max_age_days` from the default log directory
pub fn cleanup_old_logs(max_age_days: u64) -> crate::error::Result<usize> {
    cleanup_logs_in(&default_log_dir(), max_age_days)
}

/// Remove log files older than `max_age_days` from `dir`.
///
/// Daily-rolled files carry a date suffix (`profilekit.log.2026-10-19`), so
/// any file whose name contains `.log` counts.
pub fn cleanup_logs_in(dir: &Path, max_age_days: u64) -> crate::error::Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let max_age = Duration::from_secs(max_age_days.saturating_mul(24 * 60 * 60));
    let now = SystemTime::now();
    let mut removed = 0;

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_log = path
            .file_name()
            .map(|n| n.to_string_lossy().contains(".log"))
            .unwrap_or(false);
        if !is_log || !path.is_file() {
            continue;
        }

        let Ok(modified) = entry.metadata().and_then(|m| m.modified()) else {
            continue;
        };
        let age = now.duration_since(modified).unwrap_or_default();
        if age > max_age {
            match std::fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(e) => tracing::warn!("Failed to remove old log {}: {}", path.display(), e),
            }
        }
    }

    Ok(removed)
}
