//! Run summary printing.

use colored::Colorize;

use crate::config::SUMMARY_RULE;
use crate::run::RunSummary;

/// Renders the end-of-run summary block.
pub fn render_summary(summary: &RunSummary) -> String {
    format!(
        "{rule}\nSummary\n{}\n{}\n{}\n{rule}\n",
        format!("OK       : {}", summary.ok).green(),
        format!("Error    : {}", summary.error).red(),
        format!("Untested : {}", summary.untested).yellow(),
        rule = SUMMARY_RULE,
    )
}

/// Prints the summary to stdout.
pub fn print_summary(summary: &RunSummary) {
    print!("{}", render_summary(summary));
}
