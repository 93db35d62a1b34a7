//! End-to-end tests of the `which` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn which() -> Command {
    let mut cmd = Command::cargo_bin("which").expect("Binary must be built");
    cmd.env_remove("OSTYPE").env_remove("WHICH_LOG");
    cmd
}

/// Write an executable `name` into `dir` for the host platform.
fn install(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"#!/bin/sh\nexit 0\n").expect("Failed to write file");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to set permissions");
    }

    path
}

fn host_name(command: &str) -> String {
    if cfg!(windows) {
        format!("{command}.exe")
    } else {
        command.to_string()
    }
}

fn join_paths(dirs: &[&Path]) -> std::ffi::OsString {
    std::env::join_paths(dirs).expect("Failed to join paths")
}

#[test]
fn test_prints_first_match() {
    let first = TempDir::new().expect("Failed to create temp dir");
    let second = TempDir::new().expect("Failed to create temp dir");
    let expected = install(first.path(), &host_name("tool"));
    install(second.path(), &host_name("tool"));

    which()
        .env("PATH", join_paths(&[first.path(), second.path()]))
        .arg("tool")
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
}

#[test]
fn test_all_prints_every_match_in_order() {
    let first = TempDir::new().expect("Failed to create temp dir");
    let second = TempDir::new().expect("Failed to create temp dir");
    let a = install(first.path(), &host_name("tool"));
    let b = install(second.path(), &host_name("tool"));

    which()
        .env("PATH", join_paths(&[first.path(), second.path(), first.path()]))
        .args(["--all", "tool"])
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", a.display(), b.display()));
}

#[test]
fn test_missing_command_reports_search_path() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = join_paths(&[dir.path()]);

    which()
        .env("PATH", &path)
        .arg("definitely-not-here")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!(
            "No 'definitely-not-here' in ({})",
            dir.path().display()
        )));
}

#[test]
fn test_silent_suppresses_output_but_keeps_exit_code() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    install(dir.path(), &host_name("tool"));

    which()
        .env("PATH", join_paths(&[dir.path()]))
        .args(["-s", "tool"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    which()
        .env("PATH", join_paths(&[dir.path()]))
        .args(["-s", "-a", "missing"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn test_non_executable_file_is_not_reported() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let file = dir.path().join("notes");
    fs::write(&file, b"plain text").expect("Failed to write file");
    fs::set_permissions(&file, fs::Permissions::from_mode(0o644)).expect("Failed to set permissions");

    which()
        .env("PATH", join_paths(&[dir.path()]))
        .arg("notes")
        .assert()
        .code(1);
}

#[test]
fn test_missing_argument_is_a_usage_error() {
    which().assert().code(2).stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_version_flag() {
    which()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
