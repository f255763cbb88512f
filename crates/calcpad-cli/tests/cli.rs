//! End-to-end tests for the calcpad binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn calcpad() -> Command {
    let mut cmd = Command::cargo_bin("calcpad").expect("calcpad binary should exist");
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    calcpad()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_subcommands() {
    calcpad()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("interactive"))
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("keys"));
}

#[test]
fn test_interactive_without_terminal_fails() {
    calcpad()
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}

// ============================================================================
// eval
// ============================================================================

#[test]
fn test_eval_prints_both_lines() {
    calcpad()
        .args(["--color", "never", "eval", "2+3*4"])
        .assert()
        .success()
        .stdout("2+3*4\n14\n");
}

#[test]
fn test_eval_invalid_expression_prints_marker() {
    calcpad()
        .args(["--color", "never", "eval", "(2+3"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Error\n"));
}

#[test]
fn test_eval_division_by_zero() {
    calcpad()
        .args(["--color", "never", "eval", "1/0"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Infinity\n"));
}

#[test]
fn test_eval_deep_nesting_prints_marker() {
    let deep = format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000));
    calcpad()
        .args(["--color", "never", "eval", deep.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\nError\n"));
}

#[test]
fn test_eval_json_snapshot() {
    let output = calcpad()
        .args(["eval", "--json", "--", "-5+3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["expression"], "-5+3");
    assert_eq!(value["result"], "-2");
    assert_eq!(value["state"], "building");
}

#[test]
fn test_eval_empty_expression_fails() {
    calcpad()
        .args(["eval", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expression is empty"));
}

// ============================================================================
// keys
// ============================================================================

#[test]
fn test_keys_replay() {
    calcpad()
        .args(["--color", "never", "keys", "1", "2", "Backspace", "+", "4", "Enter"])
        .assert()
        .success()
        .stdout("1+4\n5\n");
}

#[test]
fn test_keys_unknown_key_warns() {
    calcpad()
        .args(["--color", "never", "keys", "Tab", "7", "Enter"])
        .assert()
        .success()
        .stdout("7\n7\n")
        .stderr(predicate::str::contains("unrecognized key"));
}

#[test]
fn test_keys_quiet_suppresses_warning() {
    calcpad()
        .args(["-q", "--color", "never", "keys", "Tab", "7"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_keys_clear_json() {
    calcpad()
        .args(["keys", "8", "Enter", "c", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""state":"empty""#))
        .stdout(predicate::str::contains(r#""result":"0""#));
}

#[test]
fn test_keys_requires_arguments() {
    calcpad().arg("keys").assert().failure();
}
