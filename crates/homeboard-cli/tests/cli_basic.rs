//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data directory
//! and verify outputs.

use std::process::Command;

/// Run a CLI command against the dev data directory and return output.
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "homeboard-cli", "--"])
        .args(args)
        .env("HOMEBOARD_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_show() {
    let (stdout, _, code) = run_cli(&["show"]);
    assert_eq!(code, 0, "show failed");
    assert!(stdout.contains("Notifications:"));
    assert!(stdout.contains("Chores:"));
}

#[test]
fn test_study_add() {
    let (stdout, _, code) = run_cli(&["study", "add", "Math", "--hours", "1.5"]);
    assert_eq!(code, 0, "study add failed");
    assert!(stdout.contains("Study session recorded: Math"));
}

#[test]
fn test_study_add_lenient_hours() {
    let (stdout, _, code) = run_cli(&["study", "add", "Math", "--hours", "lots"]);
    assert_eq!(code, 0, "study add with bad hours failed");
    assert!(stdout.contains("0 hrs"));
}

#[test]
fn test_study_list() {
    let (stdout, _, code) = run_cli(&["study", "list"]);
    assert_eq!(code, 0, "study list failed");
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
}

#[test]
fn test_grade_add() {
    let (stdout, _, code) = run_cli(&["grade", "add", "Science", "--score", "91"]);
    assert_eq!(code, 0, "grade add failed");
    assert!(stdout.contains("Grade recorded: Science"));
}

#[test]
fn test_grade_add_clamps_score() {
    let (stdout, _, code) = run_cli(&["grade", "add", "Science", "--score", "150"]);
    assert_eq!(code, 0, "grade add failed");
    assert!(stdout.contains("(100)"));
}

#[test]
fn test_grade_list() {
    let (stdout, _, code) = run_cli(&["grade", "list"]);
    assert_eq!(code, 0, "grade list failed");
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
}

#[test]
fn test_chore_add_and_list() {
    let (stdout, _, code) = run_cli(&["chore", "add", "Water plants"]);
    assert_eq!(code, 0, "chore add failed");
    assert!(stdout.contains("Chore added: Water plants"));

    let (stdout, _, code) = run_cli(&["chore", "list"]);
    assert_eq!(code, 0, "chore list failed");
    assert!(stdout.contains("Water plants"));
}

#[test]
fn test_chore_toggle() {
    let _ = run_cli(&["chore", "add", "Toggle target"]);
    let (stdout, _, code) = run_cli(&["chore", "toggle", "0"]);
    assert_eq!(code, 0, "chore toggle failed");
    assert!(stdout.contains("is now"));
}

#[test]
fn test_chore_toggle_out_of_range() {
    let (stdout, _, code) = run_cli(&["chore", "toggle", "9999"]);
    assert_eq!(code, 0, "out-of-range toggle should not fail");
    assert!(stdout.contains("No chore at index 9999"));
}
