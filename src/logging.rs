//! Structured logging and tracing for valuefmt
//!
//! Console output goes to stderr so it never interleaves with the results
//! the binary prints on stdout. File output rotates daily through
//! `tracing-appender`.

mod level;
mod state;
mod structured;

pub use level::{level_rank, min_level, parse_log_level};
pub use structured::{LogContext, StructuredLogger, get_logger, get_logger_with_context};

use crate::config::LoggingConfig;
use crate::error::{Result, ValueFmtError};
use state::{INIT_ERROR, INIT_ONCE, LOG_GUARD};
use std::path::Path;
use tracing::{Level, info};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that forces console-only logging
pub const DISABLE_FILE_LOG_ENV: &str = "VALUEFMT_DISABLE_FILE_LOG";

/// Initialize logging system based on configuration
///
/// Only the first call installs a subscriber; later calls return the
/// outcome of that first attempt.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    INIT_ONCE.call_once(|| {
        let init_result = (|| -> Result<()> {
            let base_level = parse_log_level(&config.level)?;

            let console_level = config
                .console_level
                .as_ref()
                .and_then(|s| parse_log_level(s).ok())
                .unwrap_or(base_level);
            let file_level = config
                .file_level
                .as_ref()
                .and_then(|s| parse_log_level(s).ok())
                .unwrap_or(base_level);

            let use_file = !should_use_console_only() && !config.file.is_empty();
            let most_verbose = if use_file {
                min_level(console_level, file_level)
            } else {
                console_level
            };
            let filter = build_env_filter(most_verbose);

            init_subscriber(config, filter, console_level, use_file.then_some(file_level))
        })();

        if let Err(e) = init_result {
            let _ = INIT_ERROR.set(e.to_string());
        }
    });

    if let Some(err) = INIT_ERROR.get() {
        return Err(ValueFmtError::config(err.clone()));
    }
    Ok(())
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| format!("valuefmt={}", level).into())
}

fn should_use_console_only() -> bool {
    cfg!(test) || std::env::var_os(DISABLE_FILE_LOG_ENV).is_some()
}

/// Directory the rolling appender writes into
///
/// A path with an extension is treated as a file and its parent is used.
fn log_directory(file: &str) -> &Path {
    let p = Path::new(file);
    if p.extension().is_some() {
        p.parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    } else {
        p
    }
}

fn init_subscriber(
    config: &LoggingConfig,
    filter: EnvFilter,
    console_level: Level,
    file_level: Option<Level>,
) -> Result<()> {
    let file_layer = match file_level {
        Some(file_level) => {
            let file_appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix("valuefmt")
                .filename_suffix("log")
                .max_log_files(config.backup_count as usize)
                .build(log_directory(&config.file))
                .map_err(|e| {
                    ValueFmtError::io(format!("Failed to create log file appender: {}", e))
                })?;

            let (non_blocking_appender, guard) = non_blocking(file_appender);
            let _ = LOG_GUARD.set(guard);

            let base = fmt::layer()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false);
            let layer = if config.json_format {
                base.json()
                    .with_filter(LevelFilter::from_level(file_level))
                    .boxed()
            } else {
                base.with_filter(LevelFilter::from_level(file_level))
                    .boxed()
            };
            Some(layer)
        }
        None => None,
    };

    let console_layer = if config.console_output {
        let base = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false);
        let layer = if config.json_format {
            base.json()
                .with_filter(LevelFilter::from_level(console_level))
                .boxed()
        } else {
            base.with_filter(LevelFilter::from_level(console_level))
                .boxed()
        };
        Some(layer)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| ValueFmtError::config(format!("Failed to install subscriber: {}", e)))?;

    match file_level {
        Some(file_level) => info!(
            "Logging initialized - console_level: {:?}, file_level: {:?}, file: {}",
            console_level, file_level, config.file
        ),
        None => info!(
            "Logging initialized - console_level: {:?}, console-only",
            console_level
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let config = LoggingConfig::default();
        let first = init_logging(&config);
        let second = init_logging(&config);
        assert_eq!(first.is_ok(), second.is_ok());
    }

    #[test]
    fn test_log_directory() {
        assert_eq!(log_directory("/tmp/valuefmt.log"), Path::new("/tmp"));
        assert_eq!(log_directory("valuefmt.log"), Path::new("."));
        assert_eq!(log_directory("/var/log/valuefmt"), Path::new("/var/log/valuefmt"));
    }

    #[test]
    fn test_structured_logger_after_init() {
        let _ = init_logging(&LoggingConfig::default());
        let logger = get_logger("test_component");

        // These should not panic
        logger.info("Test info message");
        logger.debug("Test debug message");
        logger.warn("Test warning message");
        logger.error("Test error message");
    }
}
