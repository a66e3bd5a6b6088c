//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Module path below the crate root (`dns_checker::matcher::mx` -> `matcher::mx`).
fn component(target: &str) -> &str {
    target.strip_prefix("dns_checker::").unwrap_or(target)
}

/// One JSON log line: timestamp, level, component and message.
fn json_entry(ts: String, level: log::Level, target: &str, msg: String) -> serde_json::Value {
    serde_json::json!({
        "ts": ts,
        "level": level.as_str(),
        "component": component(target),
        "msg": msg,
    })
}

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colored levels) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// Log records go to stderr, so they never split a record report printed on stdout.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show every lookup the checker performs
/// dns_checker example.com dns.conf --log-level debug
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=dns_checker=debug,hickory_resolver=info dns_checker example.com dns.conf
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    // Truncated/malformed UDP answers are retried internally by hickory
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("hickory_resolver", LevelFilter::Warn);
    builder.filter_module("dns_checker", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let entry = json_entry(
                    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                    record.level(),
                    record.target(),
                    record.args().to_string(),
                );
                writeln!(buf, "{entry}")
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let label = format!("{level:<5}");
                let colored_level = match level {
                    log::Level::Error => label.red(),
                    log::Level::Warn => label.yellow(),
                    log::Level::Info => label.green(),
                    log::Level::Debug => label.blue(),
                    log::Level::Trace => label.purple(),
                };
                writeln!(
                    buf,
                    "{} {}: {}",
                    colored_level,
                    component(record.target()).dimmed(),
                    record.args()
                )
            });
        }
    }

    // try_init() so repeated initialization (tests) reports an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}
