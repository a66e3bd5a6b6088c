//! Input and output collaborators of the checker.
//!
//! Settings file reading, interactive prompts, the clipboard watcher, domain
//! history and the run summary printed at the end of each check.

pub mod clipboard;
pub mod history;
pub mod interactive;
pub mod session;
pub mod statistics;

// Re-export public API
pub use history::{load_history, update_history};
pub use session::{run_batch, run_interactive};
pub use statistics::print_summary;
