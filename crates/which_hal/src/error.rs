//! Error handling for the platform layer
//!
//! Attribute reads and identity queries report failures through [`HalError`].
//! Callers in the resolution engine fold every error into "not executable".

use std::fmt;
use std::io;
use std::result;

/// Result type for HAL operations
pub type HalResult<T> = result::Result<T, HalError>;

/// Error types for HAL operations
#[derive(Debug, Clone)]
pub enum HalError {
    /// I/O operation failed
    Io(IoError),
    /// Operation not supported on this platform
    Unsupported(String),
}

#[derive(Debug, Clone)]
pub struct IoError {
    pub operation: String,
    pub path: Option<String>,
    pub kind: io::ErrorKind,
    pub message: String,
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalError::Io(err) => match &err.path {
                Some(path) => write!(f, "I/O error in {} ({path}): {}", err.operation, err.message),
                None => write!(f, "I/O error in {}: {}", err.operation, err.message),
            },
            HalError::Unsupported(msg) => write!(f, "Unsupported operation: {msg}"),
        }
    }
}

impl std::error::Error for HalError {}

impl HalError {
    pub fn io_error(operation: &str, path: Option<&str>, err: io::Error) -> Self {
        HalError::Io(IoError {
            operation: operation.to_string(),
            path: path.map(|s| s.to_string()),
            kind: err.kind(),
            message: err.to_string(),
        })
    }

    pub fn unsupported(message: &str) -> Self {
        HalError::Unsupported(message.to_string())
    }

    /// The underlying I/O error kind, if this error came from the filesystem.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            HalError::Io(err) => Some(err.kind),
            HalError::Unsupported(_) => None,
        }
    }
}
