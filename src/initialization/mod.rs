//! Application initialization and resource setup.
//!
//! - Logger (level, plain or JSON format)
//! - DNS resolver (platform configuration, per-query timeout)

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;
