//! Error types for the resolution engine
//!
//! Resolution itself never fails: a missing or non-executable candidate is an
//! absent result. Errors only appear when a caller asks for a match to be
//! required, or when logging cannot be set up.

use thiserror::Error;

/// Result type for engine operations
pub type WhichResult<T> = Result<T, WhichError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WhichError {
    /// No executable matched the command along the search path.
    #[error("No '{command}' in ({search_path})")]
    CommandNotFound { command: String, search_path: String },

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
