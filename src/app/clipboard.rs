//! Settings copied to the system clipboard.
//!
//! Some terminals truncate long pasted lines (macOS cuts them at 1024 bytes),
//! which breaks DKIM keys and long SPF values. Reading the copied export from
//! the clipboard bypasses the terminal.

use std::io::Write;
use std::time::Duration;

use crate::error_handling::InputError;

/// Clipboard operations the settings watcher needs.
pub trait ClipboardSource {
    /// Empties the clipboard.
    fn clear(&mut self) -> Result<(), InputError>;

    /// Current text content; an empty clipboard reads as `""`.
    fn read_text(&mut self) -> Result<String, InputError>;
}

/// The platform clipboard, via `arboard`.
pub struct SystemClipboard(arboard::Clipboard);

impl SystemClipboard {
    /// Opens the platform clipboard.
    ///
    /// # Errors
    ///
    /// `InputError::Clipboard` when no clipboard is available (e.g. no display server).
    pub fn new() -> Result<Self, InputError> {
        Ok(Self(arboard::Clipboard::new()?))
    }
}

impl ClipboardSource for SystemClipboard {
    fn clear(&mut self) -> Result<(), InputError> {
        self.0.clear()?;
        Ok(())
    }

    fn read_text(&mut self) -> Result<String, InputError> {
        match self.0.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Detects newly copied content between successive clipboard reads.
#[derive(Debug, Default)]
pub struct ChangeDetector {
    previous: Option<String>,
}

impl ChangeDetector {
    /// Returns `current` if it differs from the previous read and is non-empty.
    ///
    /// The first read only sets the baseline, so content that was already on
    /// the clipboard is never taken as the settings.
    pub fn observe(&mut self, current: String) -> Option<String> {
        let changed = self
            .previous
            .as_ref()
            .is_some_and(|previous| !current.is_empty() && *previous != current);
        if changed {
            return Some(current);
        }
        self.previous = Some(current);
        None
    }
}

/// Clears the clipboard, then polls it every `interval` until new content is copied.
///
/// Read failures are logged and polling continues.
pub async fn wait_for_settings<C>(clipboard: &mut C, interval: Duration) -> String
where
    C: ClipboardSource,
{
    if let Err(e) = clipboard.clear() {
        log::warn!("Failed to clear the clipboard: {e}");
    }

    let mut detector = ChangeDetector::default();
    loop {
        match clipboard.read_text() {
            Ok(current) => {
                if let Some(settings) = detector.observe(current) {
                    println!();
                    log::debug!("Read {} byte(s) from the clipboard", settings.len());
                    return settings;
                }
            }
            Err(e) => log::warn!("Failed to read the clipboard: {e}"),
        }
        progress_dot();
        tokio::time::sleep(interval).await;
    }
}

fn progress_dot() {
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = write!(stdout, ".").and_then(|_| stdout.flush()) {
        log::warn!("Failed to write progress: {e}");
    }
}
