//! Executable lookup along a search path
//!
//! A [`Finder`] holds the directories to search, the executable extensions and
//! the platform whose policy decides executability. [`Finder::find`] walks
//! every directory in order and, within a directory, the bare command followed
//! by each extension (Windows-like platforms only), yielding the absolute paths
//! of executable candidates lazily.

use std::iter::FusedIterator;
use std::path::{self, Path, PathBuf};
use std::slice;

use tracing::{debug, trace};
use which_hal::{is_regular_file, ExecutablePolicy, FileAttributes, Platform, ProcessIdentity};

use crate::config::{normalize_directory, normalize_extension, Environment};
use crate::policy;
use crate::result_set::ResultSet;

/// Finds the instances of an executable in the system path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finder {
    paths: Vec<PathBuf>,
    extensions: Vec<String>,
    platform: Platform,
}

impl Finder {
    /// A finder over `PATH` and `PATHEXT` of the current process.
    pub fn new() -> Self {
        Self::with_options(None, None)
    }

    /// A finder over the given directories. An empty list searches nothing.
    pub fn with_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::with_options(Some(paths.into_iter().map(Into::into).collect()), None)
    }

    /// A finder over the process environment with optional overrides.
    ///
    /// `None` falls back to `PATH` and `PATHEXT` respectively.
    pub fn with_options(paths: Option<Vec<PathBuf>>, extensions: Option<Vec<String>>) -> Self {
        Self::from_environment(&Environment::from_process(), paths, extensions)
    }

    /// A finder over an explicit environment.
    ///
    /// Directories fall back to the environment only when `paths` is `None`.
    /// Extensions fall back when `extensions` is `None` or lists nothing, so
    /// the list is never empty.
    pub fn from_environment(
        env: &Environment,
        paths: Option<Vec<PathBuf>>,
        extensions: Option<Vec<String>>,
    ) -> Self {
        let paths: Vec<PathBuf> = match paths {
            Some(paths) => paths.into_iter().filter_map(clean_directory).collect(),
            None => env.search_path(),
        };

        let extensions: Vec<String> = extensions
            .unwrap_or_default()
            .iter()
            .filter_map(|extension| normalize_extension(extension))
            .collect();
        let extensions = if extensions.is_empty() { env.extensions() } else { extensions };

        debug!(
            platform = %env.platform,
            paths = paths.len(),
            extensions = extensions.len(),
            "search configured"
        );

        Self {
            paths,
            extensions,
            platform: env.platform.clone(),
        }
    }

    /// The directories searched, in order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// The lower-cased executable extensions, in order.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// The searched directories joined with the platform separator.
    pub fn search_path(&self) -> String {
        let separator = self.platform.path_list_separator().to_string();
        self.paths
            .iter()
            .map(|path| path.to_string_lossy())
            .collect::<Vec<_>>()
            .join(&separator)
    }

    /// Finds the instances of `command` in the search path.
    ///
    /// The returned iterator is lazy; call `find` again to restart the walk.
    pub fn find<'a>(&'a self, command: &'a str) -> Find<'a> {
        Find {
            finder: self,
            command,
            directories: self.paths.iter(),
            directory: None,
            form: 0,
        }
    }

    /// Bind `command` to this finder.
    pub fn lookup(&self, command: impl Into<String>) -> ResultSet<'_> {
        ResultSet::new(command, self)
    }

    /// Whether `file` is a regular file the platform policy considers
    /// executable. Unreadable attributes count as not executable.
    pub fn is_executable<P: AsRef<Path>>(&self, file: P) -> bool {
        let file = file.as_ref();
        if !is_regular_file(file) {
            return false;
        }

        match self.platform.executable_policy() {
            ExecutablePolicy::Extension => policy::has_executable_extension(file, &self.extensions),
            ExecutablePolicy::Permission => self.check_permissions(file),
        }
    }

    fn check_permissions(&self, file: &Path) -> bool {
        let attributes = match FileAttributes::read(file) {
            Ok(attributes) => attributes,
            Err(err) => {
                trace!(path = %file.display(), error = %err, "cannot read attributes");
                return false;
            }
        };

        match ProcessIdentity::effective() {
            Ok(identity) => policy::permits_execution(&attributes, &identity),
            Err(err) => {
                trace!(error = %err, "cannot query process identity");
                false
            }
        }
    }

    /// The file name tried for `form`: the bare command first, then one per
    /// extension when the extension policy applies.
    fn candidate_name(&self, command: &str, form: usize) -> Option<String> {
        if form == 0 {
            return Some(command.to_string());
        }

        match self.platform.executable_policy() {
            ExecutablePolicy::Extension => self
                .extensions
                .get(form - 1)
                .map(|extension| format!("{command}{extension}")),
            ExecutablePolicy::Permission => None,
        }
    }
}

impl Default for Finder {
    fn default() -> Self {
        Self::new()
    }
}

fn clean_directory(path: PathBuf) -> Option<PathBuf> {
    match path.to_str() {
        Some(value) => normalize_directory(value),
        None => Some(path),
    }
}

/// Lazy iterator over the executables matching one command.
///
/// Created by [`Finder::find`].
#[derive(Debug, Clone)]
pub struct Find<'a> {
    finder: &'a Finder,
    command: &'a str,
    directories: slice::Iter<'a, PathBuf>,
    directory: Option<&'a Path>,
    form: usize,
}

impl Iterator for Find<'_> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let directory = match self.directory {
                Some(directory) => directory,
                None => {
                    let directory = self.directories.next()?;
                    self.directory = Some(directory);
                    self.form = 0;
                    directory
                }
            };

            let Some(name) = self.finder.candidate_name(self.command, self.form) else {
                self.directory = None;
                continue;
            };
            self.form += 1;

            let candidate = match path::absolute(directory.join(name)) {
                Ok(candidate) => candidate,
                Err(err) => {
                    trace!(directory = %directory.display(), error = %err, "cannot resolve candidate");
                    continue;
                }
            };

            if self.finder.is_executable(&candidate) {
                trace!(path = %candidate.display(), "match");
                return Some(candidate);
            }
            trace!(path = %candidate.display(), "rejected");
        }
    }
}

impl FusedIterator for Find<'_> {}
