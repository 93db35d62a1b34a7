//! File attribute access
//!
//! Only the attributes needed to decide executability are exposed: the file
//! type, the permission bits and the owning user and group.

use std::fs;
use std::path::Path;

use crate::error::{HalError, HalResult};

/// Permission bits relevant to execution.
pub mod mode {
    pub const OWNER_EXECUTE: u32 = 0o100;
    pub const GROUP_EXECUTE: u32 = 0o010;
    pub const OTHERS_EXECUTE: u32 = 0o001;
}

/// Ownership and permission attributes of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileAttributes {
    pub is_file: bool,
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
}

impl FileAttributes {
    /// Read the attributes of `path`, following symbolic links.
    pub fn read<P: AsRef<Path>>(path: P) -> HalResult<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)
            .map_err(|e| HalError::io_error("metadata", Some(&path.to_string_lossy()), e))?;

        Self::from_std(&metadata)
    }

    #[cfg(unix)]
    fn from_std(metadata: &fs::Metadata) -> HalResult<Self> {
        use std::os::unix::fs::MetadataExt;
        Ok(Self {
            is_file: metadata.is_file(),
            mode: metadata.mode(),
            uid: metadata.uid(),
            gid: metadata.gid(),
        })
    }

    #[cfg(not(unix))]
    fn from_std(_metadata: &fs::Metadata) -> HalResult<Self> {
        Err(HalError::unsupported("unix file attributes"))
    }

    pub fn has_mode(&self, bits: u32) -> bool {
        self.mode & bits != 0
    }
}

/// Whether `path` names a regular file, following symbolic links.
///
/// Any error while reading metadata yields `false`.
pub fn is_regular_file<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
