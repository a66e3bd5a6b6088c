//! Recently checked domains.
//!
//! A plain text file, one domain per line, oldest first. Losing the history
//! is harmless, so read and write failures are logged and otherwise ignored.

use std::fs;
use std::path::Path;

use crate::config::MAX_HISTORY;

/// Reads the history; a missing or unreadable file is an empty history.
pub fn load_history(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read domain history {}: {e}", path.display());
            }
            Vec::new()
        }
    }
}

/// Writes the newest `MAX_HISTORY` entries.
pub fn save_history(path: &Path, history: &[String]) -> std::io::Result<()> {
    let start = history.len().saturating_sub(MAX_HISTORY);
    let mut content = history[start..].join("\n");
    content.push('\n');
    fs::write(path, content)
}

/// Moves `domain` to the newest position and persists the result.
///
/// Returns the updated history as saved.
pub fn update_history(path: &Path, domain: &str) -> Vec<String> {
    let mut history: Vec<String> = load_history(path)
        .into_iter()
        .filter(|entry| entry != domain)
        .collect();
    history.push(domain.to_string());

    let start = history.len().saturating_sub(MAX_HISTORY);
    let history = history.split_off(start);
    if let Err(e) = save_history(path, &history) {
        log::warn!("Failed to save domain history {}: {e}", path.display());
    }
    history
}
