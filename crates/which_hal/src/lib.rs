//! Platform abstraction layer for executable resolution
//!
//! This crate isolates everything that depends on the host: platform
//! detection, file attribute reads and the identity of the calling process.
//! The resolution engine builds on these primitives without touching
//! platform-specific APIs itself.

pub mod error;
pub mod fs;
pub mod platform;
pub mod process;

pub use error::{HalError, HalResult};

/// Platform detection
pub use platform::{ExecutablePolicy, Platform};

pub use fs::{is_regular_file, FileAttributes};
pub use process::ProcessIdentity;
