//! dns_checker library: verifies registrar DNS settings against live DNS.
//!
//! A registrar's "simple DNS settings" export lists one record per line:
//!
//! ```text
//! a @ 203.0.113.5
//! cname www somehost.example.net.
//! mx @ mail.example.com.
//! txt @ v=spf1 include:_spf.example.com ~all
//! ns dev ns1.dns-host.net.
//! ```
//!
//! Each line is classified, qualified against the base domain, looked up
//! through a [`DnsLookup`] and compared using the record type's rule. The
//! result is one [`Verdict`] per line and a [`RunSummary`] per run.
//!
//! # Example
//!
//! ```no_run
//! use dns_checker::initialization::init_resolver;
//! use dns_checker::{check_lines, ExecutionMode};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let resolver = init_resolver(5);
//! let summary = check_lines(
//!     "a @ 203.0.113.5\nmx @ mail.example.com.\n",
//!     "example.com",
//!     resolver,
//!     ExecutionMode::Concurrent,
//!     |verdict| print!("{}", verdict.render()),
//! )
//! .await;
//! println!("{} ok, {} error, {} untested", summary.ok, summary.error, summary.untested);
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime; concurrent mode spawns one task per line.

pub mod app;
pub mod config;
pub mod dispatch;
pub mod dns;
pub mod error_handling;
pub mod hostname;
pub mod initialization;
pub mod matcher;
pub mod run;

// Re-export public API
pub use config::{Config, FailOn, LogFormat, LogLevel, Opt};
pub use dispatch::{classify, process_line, ConfigLine, LineClass};
pub use dns::{DnsLookup, QueryType};
pub use error_handling::LookupError;
pub use matcher::{evaluate, Outcome, Verdict};
pub use run::{check_lines, ExecutionMode, RunSummary};
