//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_checker` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Exit codes
//!
//! All checking is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dns_checker::app::{run_batch, run_interactive};
use dns_checker::config::EXIT_CODE_CHECK_FAILED;
use dns_checker::initialization::{init_logger_with, init_resolver};
use dns_checker::{Config, FailOn, Opt, RunSummary};

/// Exit code for a completed run under the configured policy.
fn evaluate_exit_code(fail_on: FailOn, summary: &RunSummary) -> i32 {
    match fail_on {
        FailOn::Never => 0,
        FailOn::AnyError if summary.has_errors() => EXIT_CODE_CHECK_FAILED,
        FailOn::AnyError => 0,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env (RUST_LOG, DNSCHECKER_HISTORY_FILE)
    let _ = dotenvy::dotenv();

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let resolver = init_resolver(config.dns_timeout_secs);

    let result = if config.is_interactive() {
        run_interactive(&config, resolver).await
    } else {
        run_batch(&config, resolver).await
    };

    match result {
        Ok(summary) => {
            let code = evaluate_exit_code(config.fail_on, &summary);
            if code != 0 {
                process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("dns_checker error: {:#}", e);
            process::exit(1);
        }
    }
}
