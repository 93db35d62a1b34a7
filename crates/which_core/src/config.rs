//! Search configuration sourced from the process environment
//!
//! [`Environment`] captures the raw `PATH` and `PATHEXT` values together with
//! the detected [`Platform`]. The resolver only ever sees the split, normalized
//! lists produced here, which keeps environment access out of the engine and
//! lets tests describe any host.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use which_hal::Platform;

/// Variable holding the search path.
pub const PATH_VARIABLE: &str = "PATH";

/// Variable holding the executable extensions.
pub const PATHEXT_VARIABLE: &str = "PATHEXT";

/// Extensions used when `PATHEXT` is absent or empty.
pub const DEFAULT_EXTENSIONS: [&str; 4] = [".exe", ".cmd", ".bat", ".com"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub path: Option<OsString>,
    pub pathext: Option<String>,
    pub platform: Platform,
}

impl Environment {
    /// An environment for `platform` with neither `PATH` nor `PATHEXT` set.
    pub fn new(platform: Platform) -> Self {
        Self {
            path: None,
            pathext: None,
            platform,
        }
    }

    /// Capture the environment of the running process.
    pub fn from_process() -> Self {
        Self {
            path: env::var_os(PATH_VARIABLE),
            pathext: env::var_os(PATHEXT_VARIABLE).map(|value| value.to_string_lossy().into_owned()),
            platform: Platform::current(),
        }
    }

    pub fn with_path(mut self, value: impl Into<OsString>) -> Self {
        self.path = Some(value.into());
        self
    }

    pub fn with_pathext(mut self, value: impl Into<String>) -> Self {
        self.pathext = Some(value.into());
        self
    }

    /// Directories listed in `PATH`, split on the platform separator.
    ///
    /// Surrounding quotes are stripped and empty entries dropped.
    pub fn search_path(&self) -> Vec<PathBuf> {
        let Some(path) = self.path.as_ref().filter(|value| !value.is_empty()) else {
            return Vec::new();
        };

        match path.to_str() {
            Some(value) => value
                .split(self.platform.path_list_separator())
                .filter_map(normalize_directory)
                .collect(),
            // Non UTF-8 values can only be split with the host rules.
            None => env::split_paths(path)
                .filter_map(|entry| match entry.to_str() {
                    Some(value) => normalize_directory(value),
                    None => Some(entry),
                })
                .collect(),
        }
    }

    /// Extensions listed in `PATHEXT`, or [`DEFAULT_EXTENSIONS`] when the
    /// variable is absent or lists nothing.
    pub fn extensions(&self) -> Vec<String> {
        let listed: Vec<String> = self
            .pathext
            .as_deref()
            .map(|value| value.split(';').filter_map(normalize_extension).collect())
            .unwrap_or_default();

        if listed.is_empty() {
            default_extensions()
        } else {
            listed
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::from_process()
    }
}

pub fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

/// Strip one leading and one trailing double quote; `None` if nothing is left.
pub(crate) fn normalize_directory(entry: &str) -> Option<PathBuf> {
    let entry = entry.strip_prefix('"').unwrap_or(entry);
    let entry = entry.strip_suffix('"').unwrap_or(entry);
    (!entry.is_empty()).then(|| PathBuf::from(entry))
}

/// Lower-case an extension; `None` for empty entries.
pub(crate) fn normalize_extension(extension: &str) -> Option<String> {
    (!extension.is_empty()).then(|| extension.to_lowercase())
}
