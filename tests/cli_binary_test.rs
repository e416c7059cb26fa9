//! Binary integration tests for CLI commands
//!
//! These tests run the actual sharepop binary to exercise the CLI code paths.

#![expect(clippy::unwrap_used, reason = "integration test assertions")]

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn sharepop_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sharepop"))
}

/// Runs with a config file that does not exist yet, so the user's own config is never read.
fn with_config(dir: &TempDir, config: &str) -> Command {
    let path = dir.path().join("config.json");
    fs::write(&path, config).unwrap();
    let mut cmd = sharepop_bin();
    cmd.arg("--config").arg(path);
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_cli_help() {
    let output = sharepop_bin().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("share popup"));
}

#[test]
fn test_cli_version() {
    let output = sharepop_bin().arg("--version").output().unwrap();
    assert!(output.status.success());
}

#[test]
fn test_toggle_from_closed() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(with_config(&dir, "{}").args(["toggle", "--initial", "closed"]));
    assert_eq!(stdout, "active");
}

#[test]
fn test_toggle_from_active() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(with_config(&dir, "{}").args(["toggle", "--initial", "active"]));
    assert_eq!(stdout, "closed");
}

#[test]
fn test_toggle_three_times() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(with_config(&dir, "{}").args(["toggle", "--times", "3"]));
    assert_eq!(stdout, "active");
}

#[test]
fn test_toggle_zero_times_reports_initial() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(with_config(&dir, "{}").args(["toggle", "--times", "0"]));
    assert_eq!(stdout, "closed");
}

#[test]
fn test_toggle_unrecognized_initial_follows_policy() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(with_config(&dir, "{}").args(["toggle", "--initial", "open"]));
    assert_eq!(stdout, "active");

    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(
        with_config(&dir, r#"{"unknown_state": "active"}"#).args(["toggle", "--initial", "open"]),
    );
    assert_eq!(stdout, "closed");
}

#[test]
fn test_check_ok() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(with_config(&dir, "{}").arg("check"));
    assert!(stdout.starts_with("ok:"));
}

#[test]
fn test_check_missing_trigger_fails() {
    let dir = TempDir::new().unwrap();
    let output = with_config(&dir, r##"{"trigger_selector": "#nope"}"##)
        .arg("check")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("trigger element not found for selector #nope"));
}

#[test]
fn test_toggle_missing_popup_fails() {
    let dir = TempDir::new().unwrap();
    let output = with_config(&dir, r#"{"popup_selector": ".gone"}"#)
        .arg("toggle")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("popup element not found"));
}

#[test]
fn test_config_show() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(with_config(&dir, "{}").arg("config"));
    assert!(stdout.contains("trigger_selector"));
    assert!(stdout.contains(".js-sharePopup"));
}

#[test]
fn test_config_path() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(with_config(&dir, "{}").args(["config", "--path"]));
    assert!(stdout.ends_with("config.json"));
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = with_config(&dir, "{ nope").arg("check").output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config"));
}

#[test]
fn test_cli_invalid_argument_shows_help() {
    let output = sharepop_bin().arg("--invalid-flag").output().unwrap();

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}
