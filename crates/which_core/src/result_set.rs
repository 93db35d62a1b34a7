//! Convenient access to the results of one lookup

use std::borrow::Cow;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::{WhichError, WhichResult};
use crate::finder::{Find, Finder};

/// One command bound to the finder that resolves it.
///
/// Nothing is cached: every accessor walks the search path again.
#[derive(Debug, Clone)]
pub struct ResultSet<'f> {
    command: String,
    finder: Cow<'f, Finder>,
}

impl<'f> ResultSet<'f> {
    pub fn new(command: impl Into<String>, finder: &'f Finder) -> Self {
        Self {
            command: command.into(),
            finder: Cow::Borrowed(finder),
        }
    }

    /// A result set owning its finder.
    pub fn owned(command: impl Into<String>, finder: Finder) -> ResultSet<'static> {
        ResultSet {
            command: command.into(),
            finder: Cow::Owned(finder),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn finder(&self) -> &Finder {
        &self.finder
    }

    /// All instances of the command, without duplicates, in search order.
    /// `None` when nothing matches.
    pub fn all(&self) -> Option<Vec<PathBuf>> {
        let mut seen = HashSet::new();
        let executables: Vec<PathBuf> = self
            .stream()
            .filter(|path| seen.insert(path.clone()))
            .collect();

        (!executables.is_empty()).then_some(executables)
    }

    /// The first instance of the command. Stops searching at the first match.
    pub fn first(&self) -> Option<PathBuf> {
        self.stream().next()
    }

    /// The raw, lazy sequence of matches. Duplicates are not removed.
    pub fn stream(&self) -> Find<'_> {
        self.finder.find(&self.command)
    }

    /// Like [`ResultSet::all`], failing when nothing matches.
    pub fn require_all(&self) -> WhichResult<Vec<PathBuf>> {
        self.all().ok_or_else(|| self.not_found())
    }

    /// Like [`ResultSet::first`], failing when nothing matches.
    pub fn require_first(&self) -> WhichResult<PathBuf> {
        self.first().ok_or_else(|| self.not_found())
    }

    fn not_found(&self) -> WhichError {
        WhichError::CommandNotFound {
            command: self.command.clone(),
            search_path: self.finder.search_path(),
        }
    }
}

impl<'a> IntoIterator for &'a ResultSet<'_> {
    type Item = PathBuf;
    type IntoIter = Find<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.stream()
    }
}
