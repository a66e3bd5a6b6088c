//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A failed resolution, carrying the resolver's message.
///
/// The resolver's error types are not exposed to matchers; a lookup either
/// yields records or one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct LookupError(String);

impl LookupError {
    /// Wraps an arbitrary failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The underlying message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<hickory_resolver::error::ResolveError> for LookupError {
    fn from(e: hickory_resolver::error::ResolveError) -> Self {
        Self(e.to_string())
    }
}

/// Errors from the input collaborators (settings file, interactive prompts, history).
#[derive(Error, Debug)]
pub enum InputError {
    /// The settings file could not be read.
    #[error("Failed to read settings file {path}: {source}")]
    SettingsFile {
        /// Path that was opened
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The user entered no domain.
    #[error("No domain given")]
    EmptyDomain,

    /// Reading from the terminal failed.
    #[error("Failed to read input: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// The system clipboard could not be opened or cleared.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// Reading pasted lines from stdin failed.
    #[error("Failed to read pasted settings: {0}")]
    Stdin(#[from] std::io::Error),
}
