//! # tabson Utilities
//!
//! Shared utilities and helpers for tabson.
//!
//! This crate provides the logging setup used by the `tabson` binary, built on
//! `tracing`. Library crates only emit events; installing a subscriber is left
//! to whoever owns the process.

pub mod logging;

// Re-export commonly used logging functions for convenience
pub use logging::{init_logging, init_logging_with_level, LogFormat, LogLevel, LoggingError};
pub use tracing::info;
