//! Integration tests for the command-line interface
//!
//! Runs the built binary against throwaway copies of the fixtures.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const BANNER: &str = "Successfully fixed worlds.js!
Changes made:
1. Added 'thuis' case to background cache switch statement
2. Added drawThuisBackground function for cached background
3. Added drawThuisFurniture function for static furniture
4. Modified drawThuis to use cached background
";

/// Helper to create a workspace holding a copy of `fixture` as `js/worlds.js`
fn setup_workspace(fixture: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let js_dir = dir.path().join("js");
    fs::create_dir(&js_dir).unwrap();

    let target = js_dir.join("worlds.js");
    fs::copy(format!("tests/fixtures/{fixture}"), &target).unwrap();

    (dir, target)
}

fn run(args: &[&str], file: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_worlds-patcher"))
        .args(args)
        .arg(file)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_worlds-patcher"))
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("background cache"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_patch_in_place() {
    let (_dir, target) = setup_workspace("worlds.js.input");

    let output = run(&[], &target);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), BANNER);
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        fs::read_to_string("tests/fixtures/worlds.js.expected").unwrap()
    );
}

#[test]
fn test_second_run_still_reports_success() {
    let (_dir, target) = setup_workspace("worlds.js.input");

    let first = run(&[], &target);
    assert!(first.status.success());
    let after_first = fs::read_to_string(&target).unwrap();

    let second = run(&[], &target);

    assert!(second.status.success());
    assert_eq!(String::from_utf8_lossy(&second.stdout), BANNER);
    assert_eq!(fs::read_to_string(&target).unwrap(), after_first);
}

#[test]
fn test_unmatched_file_still_reports_success() {
    let (_dir, target) = setup_workspace("worlds.js.input");
    fs::write(&target, "export function nothingToSee() {}\n").unwrap();

    let output = run(&[], &target);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), BANNER);
    assert!(output.stderr.is_empty());
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "export function nothingToSee() {}\n"
    );
}

#[test]
fn test_missing_file_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("js/worlds.js");

    let output = run(&[], &missing);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("worlds.js"));
    assert!(!missing.exists());
}

#[test]
fn test_dry_run_leaves_file_untouched() {
    let (_dir, target) = setup_workspace("worlds.js.input");
    let before = fs::read_to_string(&target).unwrap();

    let output = run(&["--dry-run"], &target);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), BANNER);
    assert_eq!(fs::read_to_string(&target).unwrap(), before);
}

#[test]
fn test_diff_shows_inserted_lines() {
    let (_dir, target) = setup_workspace("worlds.js.input");

    let output = run(&["--diff", "--dry-run"], &target);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(BANNER));
    assert!(stdout.contains("(original)"));
    assert!(stdout.contains("+function drawThuisBackground(ctx) {"));
    assert!(stdout.contains("-    // 1. BANK (SOFA) - Left side, front-facing view"));
}

#[test]
fn test_verbose_logs_step_outcomes() {
    let (_dir, target) = setup_workspace("worlds_original.js.input");

    let output = run(&["--verbose", "--dry-run"], &target);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), BANNER);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no match"));
    assert!(stderr.contains("skipped"));
}
