//! Configuration constants.
//!
//! Defaults for resolver timeouts, the domain history file and the record
//! keywords the checker recognizes but does not verify.

/// DNS query timeout in seconds
/// Registrar-hosted zones answer quickly; 5s leaves room for a slow recursive hop
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Resolver attempts per query (a failed lookup is terminal for its line)
pub const DNS_ATTEMPTS: usize = 1;

/// Default location of the recent-domain history, relative to the working directory
pub const HISTORY_FILE: &str = "domain_history.txt";
/// Maximum number of domains kept in the history file
pub const MAX_HISTORY: usize = 8;

/// Interval between clipboard reads while waiting for copied settings
pub const CLIPBOARD_POLL_MILLIS: u64 = 1000;

/// Record keywords that appear in registrar exports but are not checked.
pub const UNIMPLEMENTED_RECORD_TYPES: &[&str] = &["svr", "caa", "alias", "aaaa"];

/// Separator printed around the run summary
pub const SUMMARY_RULE: &str = "-----------------";

/// Exit code used when `--fail-on any-error` is set and a line failed
pub const EXIT_CODE_CHECK_FAILED: i32 = 2;
