//! Integration tests for the `ecobin` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and error handling — all without requiring a live backend.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `ecobin` binary with env isolation.
///
/// Clears all `ECOBIN_*` env vars and points config/data directories at
/// a nonexistent path so tests never touch the user's real session.
fn ecobin_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("ecobin");
    cmd.env("HOME", "/tmp/ecobin-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/ecobin-cli-test-nonexistent")
        .env("XDG_DATA_HOME", "/tmp/ecobin-cli-test-nonexistent")
        .env_remove("ECOBIN_API_URL")
        .env_remove("ECOBIN_OUTPUT")
        .env_remove("ECOBIN_TIMEOUT")
        .env_remove("ECOBIN_PASSWORD");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = ecobin_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    ecobin_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("recycling")
            .and(predicate::str::contains("stats"))
            .and(predicate::str::contains("leaderboard"))
            .and(predicate::str::contains("bins")),
    );
}

#[test]
fn test_version_flag() {
    ecobin_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ecobin"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    ecobin_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    ecobin_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    ecobin_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = ecobin_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_stats_not_logged_in() {
    // No session on disk -> auth exit code before any network traffic.
    let output = ecobin_cmd().arg("stats").output().unwrap();
    assert_eq!(output.status.code(), Some(3), "Expected auth exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("session") || text.contains("log in") || text.contains("login"),
        "Expected login hint in output:\n{text}"
    );
}

#[test]
fn test_history_not_logged_in() {
    let output = ecobin_cmd().args(["history", "-n", "5"]).output().unwrap();
    assert_eq!(output.status.code(), Some(3), "Expected auth exit code");
}

#[test]
fn test_admin_reset_bin_not_logged_in() {
    let output = ecobin_cmd()
        .args(["--yes", "admin", "reset-bin", "1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3), "Expected auth exit code");
}

#[test]
fn test_invalid_api_url() {
    let output = ecobin_cmd()
        .args(["--api-url", "not a url", "bins"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("invalid URL"),
        "Expected URL validation error:\n{text}"
    );
}

#[test]
fn test_logout_without_session_succeeds() {
    ecobin_cmd()
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("No active session"));
}

// ── Config commands ─────────────────────────────────────────────────

#[test]
fn test_config_path() {
    ecobin_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_defaults() {
    ecobin_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("api_url")
                .and(predicate::str::contains("http://localhost:5000")),
        );
}

#[test]
fn test_config_show_json() {
    ecobin_cmd()
        .args(["-o", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"refresh_interval_secs\": 30"));
}
