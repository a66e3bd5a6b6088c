//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DNS_TIMEOUT_SECS, HISTORY_FILE};
use crate::run::ExecutionMode;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// When the binary should report failure through its exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once the run completes
    Never,
    /// Exit 2 if any line was counted as Error
    AnyError,
}

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "dns_checker",
    version,
    about = "Checks that the records of a registrar's simple DNS settings match what DNS returns",
    long_about = "Checks that the records of a registrar's simple DNS settings match what DNS returns.\n\n\
                  Run without arguments for interactive mode (pick a recent domain, paste the settings),\n\
                  or pass a domain and a file holding the exported settings:\n\n    \
                  dns_checker my-domain.com dns-mydomain.conf"
)]
pub struct Opt {
    /// Base domain the records belong to
    #[arg(requires = "file")]
    pub domain: Option<String>,

    /// File holding the exported DNS settings, one record per line
    pub file: Option<PathBuf>,

    /// Check all lines concurrently (reports print in completion order)
    #[arg(short = 'p', long)]
    pub parallel: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout: u64,

    /// File listing recently checked domains (interactive mode)
    #[arg(long, env = "DNSCHECKER_HISTORY_FILE", default_value = HISTORY_FILE)]
    pub history_file: PathBuf,

    /// Exit-code policy
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use dns_checker::Config;
///
/// let config = Config {
///     domain: Some("example.com".to_string()),
///     file: Some("dns-example.conf".into()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base domain; `None` selects interactive mode in the binary
    pub domain: Option<String>,

    /// Settings file; paired with `domain`
    pub file: Option<PathBuf>,

    /// Sequential or concurrent line evaluation
    pub mode: ExecutionMode,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-query DNS timeout in seconds
    pub dns_timeout_secs: u64,

    /// Recent-domain history location
    pub history_file: PathBuf,

    /// Exit-code policy
    pub fail_on: FailOn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: None,
            file: None,
            mode: ExecutionMode::Sequential,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            dns_timeout_secs: DNS_TIMEOUT_SECS,
            history_file: PathBuf::from(HISTORY_FILE),
            fail_on: FailOn::Never,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            domain: opt.domain,
            file: opt.file,
            mode: if opt.parallel {
                ExecutionMode::Concurrent
            } else {
                ExecutionMode::Sequential
            },
            log_level: opt.log_level,
            log_format: opt.log_format,
            dns_timeout_secs: opt.dns_timeout,
            history_file: opt.history_file,
            fail_on: opt.fail_on,
        }
    }
}

impl Config {
    /// True when no domain/file pair was given and input must be collected interactively.
    pub fn is_interactive(&self) -> bool {
        self.domain.is_none() || self.file.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.is_interactive());
        assert_eq!(config.mode, ExecutionMode::Sequential);
        assert_eq!(config.dns_timeout_secs, DNS_TIMEOUT_SECS);
        assert_eq!(config.history_file, PathBuf::from("domain_history.txt"));
        assert_eq!(config.fail_on, FailOn::Never);
    }

    #[test]
    fn test_config_from_opt_parallel() {
        let opt = Opt::try_parse_from(["dns_checker", "-p", "example.com", "dns.conf"])
            .expect("options should parse");
        let config = Config::from(opt);
        assert_eq!(config.mode, ExecutionMode::Concurrent);
        assert_eq!(config.domain.as_deref(), Some("example.com"));
        assert_eq!(config.file, Some(PathBuf::from("dns.conf")));
        assert!(!config.is_interactive());
    }

    #[test]
    fn test_domain_without_file_is_rejected() {
        let result = Opt::try_parse_from(["dns_checker", "example.com"]);
        assert!(result.is_err(), "a domain without a file should not parse");
    }
}
