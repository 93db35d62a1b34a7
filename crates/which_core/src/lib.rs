//! Executable resolution engine
//!
//! Resolves the locations of a command along an ordered search path, the way
//! the `which` utility does. On POSIX platforms a candidate is executable when
//! its permission bits allow the calling process to run it; on Windows-like
//! platforms (including Cygwin and MSYS) when its extension is listed in
//! `PATHEXT`.
//!
//! ```no_run
//! if let Some(path) = which_core::which("cargo").first() {
//!     println!("cargo is at {}", path.display());
//! }
//! ```

use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod finder;
#[cfg(feature = "logging")]
pub mod logging;
pub mod policy;
pub mod result_set;

pub use config::Environment;
pub use error::{WhichError, WhichResult};
pub use finder::{Find, Finder};
pub use result_set::ResultSet;
pub use which_hal::{ExecutablePolicy, Platform};

/// Look up `command` along `PATH`.
pub fn which(command: impl Into<String>) -> ResultSet<'static> {
    ResultSet::owned(command, Finder::new())
}

/// Look up `command` in the given directories only.
pub fn which_in<I, P>(command: impl Into<String>, paths: I) -> ResultSet<'static>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    ResultSet::owned(command, Finder::with_paths(paths))
}

/// Look up `command` with optional directory and extension overrides.
pub fn which_with(
    command: impl Into<String>,
    paths: Option<Vec<PathBuf>>,
    extensions: Option<Vec<String>>,
) -> ResultSet<'static> {
    ResultSet::owned(command, Finder::with_options(paths, extensions))
}
