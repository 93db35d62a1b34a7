//! Executability policies
//!
//! Both checks assume the candidate is already known to be a regular file.

use std::path::Path;

use which_hal::fs::mode::{GROUP_EXECUTE, OTHERS_EXECUTE, OWNER_EXECUTE};
use which_hal::{FileAttributes, ProcessIdentity};

/// Windows policy: the text after the last `.` of the path, lower-cased, must
/// be one of `extensions`.
pub fn has_executable_extension(file: &Path, extensions: &[String]) -> bool {
    let file = file.to_string_lossy();
    match file.rfind('.') {
        Some(index) => {
            let extension = file[index..].to_lowercase();
            extensions.iter().any(|candidate| *candidate == extension)
        }
        None => false,
    }
}

/// POSIX policy: decide from the permission bits and ownership of a file.
///
/// Bits are checked from the least to the most specific class and the first
/// one set decides.
pub fn permits_execution(attributes: &FileAttributes, identity: &ProcessIdentity) -> bool {
    if attributes.has_mode(OTHERS_EXECUTE) {
        return true;
    }

    if attributes.has_mode(GROUP_EXECUTE) {
        return identity.gid == attributes.gid;
    }

    if attributes.has_mode(OWNER_EXECUTE) {
        return identity.uid == attributes.uid;
    }

    // Root owned files still need an owner or group execute bit.
    attributes.has_mode(OWNER_EXECUTE | GROUP_EXECUTE) && attributes.uid == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes(mode: u32, uid: u32, gid: u32) -> FileAttributes {
        FileAttributes {
            is_file: true,
            mode,
            uid,
            gid,
        }
    }

    fn extensions() -> Vec<String> {
        vec![".exe".to_string(), ".cmd".to_string(), ".bat".to_string()]
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert!(has_executable_extension(Path::new("bin/FOO.EXE"), &extensions()));
        assert!(has_executable_extension(Path::new("bin/foo.Cmd"), &extensions()));
        assert!(!has_executable_extension(Path::new("bin/foo.sh"), &extensions()));
    }

    #[test]
    fn test_path_without_dot_is_never_executable() {
        assert!(!has_executable_extension(Path::new("bin/foo"), &extensions()));
    }

    #[test]
    fn test_extension_is_taken_from_the_last_dot_of_the_path() {
        assert!(has_executable_extension(Path::new("tool.d/run.tar.exe"), &extensions()));
        assert!(!has_executable_extension(Path::new("tools.exe/run"), &extensions()));
    }

    #[test]
    fn test_others_execute_bit_grants_everyone() {
        let identity = ProcessIdentity::new(1000, 1000);
        assert!(permits_execution(&attributes(0o001, 0, 0), &identity));
        assert!(permits_execution(&attributes(0o755, 42, 42), &identity));
    }

    #[test]
    fn test_group_execute_bit_requires_matching_gid() {
        let identity = ProcessIdentity::new(1000, 100);
        assert!(permits_execution(&attributes(0o750, 0, 100), &identity));
        assert!(!permits_execution(&attributes(0o750, 0, 200), &identity));
    }

    #[test]
    fn test_group_bit_decides_before_owner_bit() {
        // Owner matches, but the group bit is set and the group does not.
        let identity = ProcessIdentity::new(1000, 100);
        assert!(!permits_execution(&attributes(0o710, 1000, 200), &identity));
    }

    #[test]
    fn test_owner_execute_bit_requires_matching_uid() {
        let identity = ProcessIdentity::new(1000, 100);
        assert!(permits_execution(&attributes(0o700, 1000, 200), &identity));
        assert!(!permits_execution(&attributes(0o700, 1001, 200), &identity));
    }

    #[test]
    fn test_no_execute_bits_is_never_executable() {
        let root = ProcessIdentity::new(0, 0);
        assert!(!permits_execution(&attributes(0o644, 0, 0), &root));
        assert!(!permits_execution(&attributes(0o666, 1000, 1000), &ProcessIdentity::new(1000, 1000)));
    }

    #[test]
    fn test_root_owned_file_without_matching_ids() {
        let identity = ProcessIdentity::new(1000, 100);
        assert!(!permits_execution(&attributes(0o700, 0, 0), &identity));
        assert!(!permits_execution(&attributes(0o750, 0, 0), &identity));
    }

    #[test]
    fn test_policy_is_pure() {
        let identity = ProcessIdentity::new(1000, 100);
        let file = attributes(0o750, 0, 100);
        assert_eq!(
            permits_execution(&file, &identity),
            permits_execution(&file, &identity)
        );
    }
}
