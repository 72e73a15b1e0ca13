//! Error types for the tiptime application.
//!
//! The calculator itself never fails: unparsable input degrades to zero.
//! Errors only come from the shell around it, and they fold into [`AppError`]
//! through `From` conversions so `?` composes cleanly.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned by the binary
//!   - [`ConfigError`] - a config file exists but cannot be read or parsed
//!   - [`LoggingError`] - the log file or subscriber could not be set up
//!   - [`TuiError`] - terminal setup, drawing or event reading failed
//!   - `serde_json::Error` - one-shot JSON report could not be encoded

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All of these are fatal: the binary prints them to stderr and exits
/// non-zero. A missing config file or an unknown locale is not an error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file exists but is unreadable or invalid TOML.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log directory or tracing subscriber setup failed.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// The terminal is restored before this reaches the caller.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),

    /// One-shot JSON report could not be serialized.
    #[error("Failed to encode report: {0}")]
    Report(#[from] serde_json::Error),
}
