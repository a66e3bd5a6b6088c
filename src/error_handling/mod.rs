//! Error handling.
//!
//! Error types are categorized into:
//! - **Initialization**: logger setup failures (fatal to the binary)
//! - **Lookup**: a single resolution failed (reported on its line, never fatal)
//! - **Input**: the settings or domain could not be obtained (fatal to one run)
//!
//! Content mismatches and untestable lines are not errors; they are
//! [`Outcome`](crate::matcher::Outcome) variants.

mod types;

// Re-export public API
pub use types::{InitializationError, InputError, LookupError};
