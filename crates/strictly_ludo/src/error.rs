//! Configuration error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Startup configuration error with location tracking.
///
/// Raised for malformed layout data, inconsistent paths, invalid rule
/// sets and impossible custom setups. These are fatal: a game is never
/// constructed from a configuration that produced one.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
