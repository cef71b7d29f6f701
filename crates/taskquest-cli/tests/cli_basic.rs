//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data directory
//! (TASKQUEST_ENV=dev) and verify outputs loosely.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "taskquest-cli", "--"])
        .args(args)
        .env("TASKQUEST_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_task_add() {
    let (stdout, _, code) = run_cli(&["task", "add", "Test Task", "--priority", "medium"]);
    assert_eq!(code, 0, "task add failed");
    assert!(stdout.contains("Task created:"));
}

#[test]
fn test_task_list_outputs_json() {
    let _ = run_cli(&["task", "add", "List Test"]);
    let (stdout, _, code) = run_cli(&["task", "list"]);
    assert_eq!(code, 0, "task list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("list output not JSON");
    assert!(parsed.is_array());
}

#[test]
fn test_task_complete_flow() {
    let _ = run_cli(&["task", "add", "Complete Test"]);
    let (stdout, _, code) = run_cli(&["task", "list", "--status", "active"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let tasks = parsed.as_array().unwrap();
    if let Some(task) = tasks.first() {
        let id = task["id"].as_str().unwrap();
        let (stdout, _, code) = run_cli(&["task", "complete", id]);
        assert_eq!(code, 0, "task complete failed");
        assert!(stdout.contains("points"));
    }
}

#[test]
fn test_task_add_rejects_bad_priority() {
    let (_, stderr, code) = run_cli(&["task", "add", "Bad", "--priority", "critical"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown priority"));
}

#[test]
fn test_stats_show() {
    let (stdout, _, code) = run_cli(&["stats", "show"]);
    assert_eq!(code, 0, "stats show failed");
    assert!(stdout.contains("points"));
}

#[test]
fn test_stats_summary() {
    let (stdout, _, code) = run_cli(&["stats", "summary"]);
    assert_eq!(code, 0, "stats summary failed");
    assert!(stdout.contains("Daily progress"));
}

#[test]
fn test_achievements_list() {
    let (stdout, _, code) = run_cli(&["achievements", "list"]);
    assert_eq!(code, 0, "achievements list failed");
    assert!(stdout.contains("First Step"));
}

#[test]
fn test_config_get() {
    let (_, _, code) = run_cli(&["config", "get", "stats.daily_goal"]);
    assert_eq!(code, 0, "config get failed");
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_, _, code) = run_cli(&["config", "get", "no.such.key"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    assert!(stdout.contains("daily_goal"));
}
