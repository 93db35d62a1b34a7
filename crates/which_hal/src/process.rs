//! Identity of the calling process

use crate::error::HalResult;

/// Effective user and group ids of the calling process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessIdentity {
    pub uid: u32,
    pub gid: u32,
}

impl ProcessIdentity {
    pub fn new(uid: u32, gid: u32) -> Self {
        Self { uid, gid }
    }

    /// Query the effective ids of the current process.
    #[cfg(unix)]
    pub fn effective() -> HalResult<Self> {
        use nix::unistd::{getegid, geteuid};
        Ok(Self::new(geteuid().as_raw(), getegid().as_raw()))
    }

    #[cfg(not(unix))]
    pub fn effective() -> HalResult<Self> {
        Err(crate::error::HalError::unsupported("effective user and group ids"))
    }

    pub fn is_root(&self) -> bool {
        self.uid == 0
    }
}
