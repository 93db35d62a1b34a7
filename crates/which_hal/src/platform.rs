//! Platform detection
//!
//! Detection is a pure function of the reported OS name and the `OSTYPE`
//! marker, so callers can build a [`Platform`] for any target and inject it
//! instead of relying on the host they happen to run on.

use std::env;
use std::fmt;

/// Environment variable consulted for Windows emulation layers.
pub const OSTYPE_VARIABLE: &str = "OSTYPE";

/// Supported platforms
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    MacOS,
    Windows,
    FreeBSD,
    OpenBSD,
    NetBSD,
    Solaris,
    Android,
    /// POSIX host reporting a Cygwin environment through `OSTYPE`
    Cygwin,
    /// POSIX host reporting an MSYS environment through `OSTYPE`
    Msys,
    Unknown(String),
}

/// How a regular file qualifies as executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutablePolicy {
    /// The file name must end with one of the configured extensions.
    Extension,
    /// The file permission bits must grant execution to the calling process.
    Permission,
}

impl Platform {
    /// Detect the platform of the running process.
    pub fn current() -> Self {
        let ostype = env::var(OSTYPE_VARIABLE).ok();
        Self::detect(env::consts::OS, ostype.as_deref())
    }

    /// Detect a platform from an OS name and an optional `OSTYPE` value.
    ///
    /// `OSTYPE` values `cygwin` and `msys` take precedence over the OS name.
    pub fn detect(os_name: &str, ostype: Option<&str>) -> Self {
        match ostype {
            Some("cygwin") => Platform::Cygwin,
            Some("msys") => Platform::Msys,
            _ => Self::from_os_name(os_name),
        }
    }

    /// Map an OS name (`std::env::consts::OS` or a descriptive name such as
    /// `Windows 11`) to a platform.
    pub fn from_os_name(os_name: &str) -> Self {
        let name = os_name.trim().to_ascii_lowercase();
        if name.starts_with("windows") {
            return Platform::Windows;
        }

        match name.as_str() {
            "linux" => Platform::Linux,
            "macos" | "darwin" | "mac os x" => Platform::MacOS,
            "freebsd" => Platform::FreeBSD,
            "openbsd" => Platform::OpenBSD,
            "netbsd" => Platform::NetBSD,
            "solaris" | "sunos" | "illumos" => Platform::Solaris,
            "android" => Platform::Android,
            _ => Platform::Unknown(os_name.to_string()),
        }
    }

    /// Get the name of the platform
    pub fn name(&self) -> &str {
        match self {
            Platform::Linux => "Linux",
            Platform::MacOS => "macOS",
            Platform::Windows => "Windows",
            Platform::FreeBSD => "FreeBSD",
            Platform::OpenBSD => "OpenBSD",
            Platform::NetBSD => "NetBSD",
            Platform::Solaris => "Solaris",
            Platform::Android => "Android",
            Platform::Cygwin => "Cygwin",
            Platform::Msys => "MSYS",
            Platform::Unknown(name) => name,
        }
    }

    /// Whether commands resolve the Windows way on this platform.
    pub fn is_windows_like(&self) -> bool {
        matches!(self, Platform::Windows | Platform::Cygwin | Platform::Msys)
    }

    /// Separator between entries of the `PATH` variable.
    pub fn path_list_separator(&self) -> char {
        if self.is_windows_like() {
            ';'
        } else {
            ':'
        }
    }

    pub fn executable_policy(&self) -> ExecutablePolicy {
        if self.is_windows_like() {
            ExecutablePolicy::Extension
        } else {
            ExecutablePolicy::Permission
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
