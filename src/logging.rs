// Logging setup - routes the `log` macros to stdout and an optional file via fern
// Line format: [timestamp][service][LEVEL][target] message

use crate::config::LogSettings;
use log::LevelFilter;
use std::str::FromStr;

/// Noisy dependency targets capped below the service level
const QUIET_TARGETS: &[&str] = &["hyper", "hyper_util", "reqwest", "rustls", "h2"];

/// Error types for logger initialization
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoggingError {
    #[error("Unknown log level '{0}' (expected off, error, warn, info, debug or trace)")]
    UnknownLevel(String),
    #[error("Failed to open log file {path}: {message}")]
    FileError { path: String, message: String },
    #[error("Logger already initialized")]
    AlreadyInitialized,
}

/// Parse a level name, case-insensitive
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    LevelFilter::from_str(level.trim()).map_err(|_| LoggingError::UnknownLevel(level.to_string()))
}

/// Debug builds log at Debug, release builds at Info
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn format_line(
    timestamp: &str,
    service: &str,
    level: log::Level,
    target: &str,
    message: &dyn std::fmt::Display,
) -> String {
    format!("[{}][{}][{}][{}] {}", timestamp, service, level, target, message)
}

/// Build the dispatcher without installing it
pub fn dispatch(settings: &LogSettings, service: &str) -> Result<fern::Dispatch, LoggingError> {
    let level = match &settings.level {
        Some(level) => parse_level(level)?,
        None => default_level(),
    };
    let quiet = level.min(LevelFilter::Warn);
    let service = service.to_string();

    let mut dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
            out.finish(format_args!(
                "{}",
                format_line(&timestamp, &service, record.level(), record.target(), message)
            ))
        })
        .level(level);

    for target in QUIET_TARGETS {
        dispatch = dispatch.level_for(*target, quiet);
    }

    dispatch = dispatch.chain(std::io::stdout());

    if let Some(path) = &settings.file {
        let file = fern::log_file(path).map_err(|e| LoggingError::FileError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        dispatch = dispatch.chain(file);
    }

    Ok(dispatch)
}

/// Install the global logger. Only the first call in a process succeeds.
pub fn init(settings: &LogSettings, service: &str) -> Result<(), LoggingError> {
    dispatch(settings, service)?
        .apply()
        .map_err(|_| LoggingError::AlreadyInitialized)
}

#[cfg(test)]
#[path = "logging_test.rs"]
mod tests;
