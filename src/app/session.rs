//! One-shot and interactive check sessions.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::app::clipboard::{self, SystemClipboard};
use crate::app::interactive::{self, SettingsInput};
use crate::app::{history, statistics};
use crate::config::{Config, CLIPBOARD_POLL_MILLIS};
use crate::dns::DnsLookup;
use crate::error_handling::InputError;
use crate::matcher::Verdict;
use crate::run::{check_lines, RunSummary};

/// Reads a settings export from disk.
pub async fn read_settings(path: &Path) -> Result<String, InputError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| InputError::SettingsFile {
            path: path.display().to_string(),
            source,
        })
}

/// Writes one verdict report to `out` as a single block.
pub fn write_report<W: Write>(out: &mut W, verdict: &Verdict) -> std::io::Result<()> {
    out.write_all(verdict.render().as_bytes())?;
    out.flush()
}

/// Checks `settings` for `domain`, printing each report and the summary.
pub async fn check_and_report<R>(
    config: &Config,
    domain: &str,
    settings: &str,
    resolver: Arc<R>,
) -> RunSummary
where
    R: DnsLookup + 'static,
{
    log::info!("Checking DNS settings for {domain} ({:?} mode)", config.mode);
    let summary = check_lines(settings, domain, resolver, config.mode, |verdict| {
        if let Err(e) = write_report(&mut std::io::stdout().lock(), verdict) {
            log::warn!("Failed to write report for {:?}: {e}", verdict.config);
        }
    })
    .await;
    statistics::print_summary(&summary);
    summary
}

/// Checks the domain/file pair given on the command line.
pub async fn run_batch<R>(config: &Config, resolver: Arc<R>) -> Result<RunSummary>
where
    R: DnsLookup + 'static,
{
    let (Some(domain), Some(file)) = (config.domain.as_deref(), config.file.as_deref()) else {
        anyhow::bail!("Batch mode needs both a domain and a settings file");
    };
    let settings = read_settings(file)
        .await
        .context("Failed to load DNS settings")?;
    Ok(check_and_report(config, domain, &settings, resolver).await)
}

/// Runs a blocking terminal prompt off the async worker threads.
async fn blocking_prompt<T, F>(prompt: F) -> Result<T>
where
    F: FnOnce() -> Result<T, InputError> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(prompt)
        .await
        .context("Prompt task failed")??)
}

/// Collects the settings by the method the user picks.
async fn collect_settings() -> Result<String> {
    let method = blocking_prompt(interactive::prompt_input_method)
        .await
        .context("Failed to read input method")?;
    match method {
        SettingsInput::Paste => blocking_prompt(interactive::prompt_settings)
            .await
            .context("Failed to read DNS settings"),
        SettingsInput::Clipboard => {
            let mut source = SystemClipboard::new().context("Failed to open the clipboard")?;
            println!("Copy the DNS settings to the clipboard; the check starts once they arrive");
            Ok(clipboard::wait_for_settings(
                &mut source,
                Duration::from_millis(CLIPBOARD_POLL_MILLIS),
            )
            .await)
        }
    }
}

/// Prompts for domain and settings, checks them, and repeats while the user
/// asks to. Returns the summary of the last check.
pub async fn run_interactive<R>(config: &Config, resolver: Arc<R>) -> Result<RunSummary>
where
    R: DnsLookup + 'static,
{
    loop {
        let recent = history::load_history(&config.history_file);
        let domain = blocking_prompt(move || interactive::prompt_domain(&recent))
            .await
            .context("Failed to read domain")?;
        history::update_history(&config.history_file, &domain);

        let settings = collect_settings().await?;
        let summary = check_and_report(config, &domain, &settings, Arc::clone(&resolver)).await;

        let again = blocking_prompt(interactive::ask_for_rerun)
            .await
            .context("Failed to read answer")?;
        if !again {
            return Ok(summary);
        }
    }
}
