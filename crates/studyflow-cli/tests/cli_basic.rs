//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "studyflow-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn config_show_prints_defaults() {
    let (stdout, _, code) = run_cli(&["config", "show"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed["study_secs"], 1500.0);
    assert_eq!(parsed["break_secs"], 300.0);
    assert_eq!(parsed["total_sessions"], 4);
}

#[test]
fn config_show_parses_colon_form() {
    let (stdout, _, code) = run_cli(&["config", "show", "--study", "50:30", "--sessions", "2"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed["study_secs"], 3030.0);
    assert_eq!(parsed["total_sessions"], 2);
}

#[test]
fn config_show_rejects_bad_input() {
    let (_, stderr, code) = run_cli(&["config", "show", "--study=-5"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("invalid configuration"), "stderr: {stderr}");

    let (_, _, code) = run_cli(&["config", "show", "--sessions", "0"]);
    assert_eq!(code, 1);
}

#[test]
fn run_completes_a_short_chain() {
    let (stdout, _, code) = run_cli(&[
        "run", "--study", "0:01", "--break", "0:01", "--sessions", "1", "--tick-ms", "50",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("\"type\":\"session_started\""), "stdout: {stdout}");
    assert!(stdout.contains("\"type\":\"limit_reached\""), "stdout: {stdout}");
    assert!(stdout.contains("\"type\":\"chain_complete\""), "stdout: {stdout}");
}

#[test]
fn run_rejects_bad_sessions() {
    let (_, _, code) = run_cli(&["run", "--sessions", "abc"]);
    assert_eq!(code, 1);
}
