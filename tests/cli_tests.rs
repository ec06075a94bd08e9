//! Tests for the `scpack` binary itself.
//!
//! Each test runs the compiled binary against a temporary repository with
//! `CARGO=true` standing in for the release build.

mod helpers;

use helpers::{assert_file_exists, assert_missing, TestRepo, TOOL_FAILS};
use serial_test::serial;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const CONFIG_VARS: [&str; 7] = [
    "ASSET_DIR",
    "BUILD_DIR",
    "CARGO_TARGET_DIR",
    "EXTRACTOR_BIN",
    "SCRUBBER_BIN",
    "STAGED_EXTRACTOR",
    "STRICT_BUILD",
];

fn scpack(cwd: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scpack"));
    cmd.args(args).current_dir(cwd).env("CARGO", "true");
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd.output().expect("Failed to run scpack")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
#[serial]
fn test_bare_invocation_packages() {
    let repo = TestRepo::new();

    let output = scpack(repo.root(), &[]);

    assert!(output.status.success(), "scpack failed: {:?}", output);
    assert_file_exists(&repo.expected_archive());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("luasrc/graphics/units/marine.png"));
    assert!(stdout.contains("luasrc/info.json"));
    assert!(stdout.contains("luasrc/sc_graphics_extractor"));
}

#[test]
#[serial]
fn test_relative_root_flag() {
    let repo = TestRepo::new();
    let parent = repo.root().parent().unwrap();
    let name = repo.root().file_name().unwrap().to_str().unwrap();

    let output = scpack(parent, &["-C", name, "package"]);

    assert!(output.status.success(), "scpack failed: {:?}", output);
    assert_file_exists(&repo.expected_archive());
    assert!(stdout_of(&output).contains("luasrc/graphics/units/zealot.png"));
}

#[test]
#[serial]
fn test_scrubber_failure_exits_non_zero() {
    let repo = TestRepo::new();
    repo.install_scrubber(TOOL_FAILS);

    let output = scpack(repo.root(), &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Scrubber"));
    assert_missing(&repo.expected_archive());
}

#[test]
#[serial]
fn test_missing_info_exits_non_zero() {
    let repo = TestRepo::new();
    fs::remove_file(repo.config.info_path()).unwrap();

    let output = scpack(repo.root(), &[]);

    assert!(!output.status.success());
    assert_missing(&repo.config.build_dir);
}

#[test]
#[serial]
fn test_show_info() {
    let repo = TestRepo::new();

    let output = scpack(repo.root(), &["show", "info"]);

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("archive: foo_1.2.3.zip"));
}

#[test]
#[serial]
fn test_strict_preflight_on_empty_repository() {
    let dir = tempfile::tempdir().unwrap();

    let output = scpack(dir.path(), &["preflight", "--strict"]);

    assert!(!output.status.success());
    assert!(!dir.path().join("build").exists());
}
