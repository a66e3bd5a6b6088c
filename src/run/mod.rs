//! Checking a whole settings export.
//!
//! Lines are independent. In sequential mode each verdict is emitted before
//! the next line is looked up; in concurrent mode every line gets its own task
//! and verdicts are emitted in completion order. Either way a single
//! aggregator owns the [`RunSummary`] and the output sink, so a report is
//! always written whole and counters need no locking.

mod summary;

use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;

pub use summary::RunSummary;

use crate::dispatch::{aborted_line, process_line};
use crate::dns::DnsLookup;
use crate::matcher::Verdict;

/// How lines of one run are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One line at a time, in input order
    #[default]
    Sequential,
    /// One task per line, output in completion order
    Concurrent,
}

/// Checks every line of `source` against `domain`.
///
/// `emit` receives each verdict once, whole, from the calling task. Blank and
/// comment lines produce no verdict. A failing lookup affects only its own
/// line; the run always completes.
pub async fn check_lines<R, F>(
    source: &str,
    domain: &str,
    resolver: Arc<R>,
    mode: ExecutionMode,
    mut emit: F,
) -> RunSummary
where
    R: DnsLookup + 'static,
    F: FnMut(&Verdict),
{
    let mut summary = RunSummary::default();

    match mode {
        ExecutionMode::Sequential => {
            for line in source.lines() {
                if let Some(verdict) = process_line(line, domain, resolver.as_ref()).await {
                    emit(&verdict);
                    summary.record(&verdict);
                }
            }
        }
        ExecutionMode::Concurrent => {
            let domain: Arc<str> = Arc::from(domain);
            let mut tasks = FuturesUnordered::new();

            for line in source.lines().filter(|line| !line.trim().is_empty()) {
                let raw = line.to_string();
                let task_line = raw.clone();
                let domain = Arc::clone(&domain);
                let resolver = Arc::clone(&resolver);
                let handle = tokio::spawn(async move {
                    process_line(&task_line, &domain, resolver.as_ref()).await
                });
                tasks.push(async move { (raw, handle.await) });
            }
            log::debug!("Spawned {} line checks", tasks.len());

            while let Some((raw, joined)) = tasks.next().await {
                let verdict = match joined {
                    Ok(verdict) => verdict,
                    Err(e) => {
                        log::error!("Line check task failed for {raw:?}: {e}");
                        aborted_line(&raw, &e.to_string())
                    }
                };
                if let Some(verdict) = verdict {
                    emit(&verdict);
                    summary.record(&verdict);
                }
            }
        }
    }

    log::info!(
        "Checked {} line(s): {} ok, {} error, {} untested",
        summary.total(),
        summary.ok,
        summary.error,
        summary.untested
    );
    summary
}
