//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Each test
//! points HOME at a temporary directory so the user's config is untouched.

use std::path::Path;
use std::process::Command;

use serde::Deserialize;

const REQUEST: &str = r#"{
    "events": [
        {"name": "Event 1", "startTime": "2020-06-25T09:30:00Z", "endTime": "2020-06-25T10:00:00Z"},
        {"name": "Event 2", "startTime": "2020-06-25T11:30:00Z", "endTime": "2020-06-25T12:00:00Z"},
        {"name": "Event 3", "startTime": "2020-06-25T13:00:00Z", "endTime": "2020-06-25T17:00:00Z"}
    ],
    "tasks": [
        {"name": "Task A", "duration": 120, "taskPriority": 3},
        {"name": "Task B", "description": "short one", "duration": 20, "taskPriority": 5}
    ],
    "startTime": "2020-06-25T09:00:00Z",
    "endTime": "2020-06-25T17:00:00Z"
}"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Placement {
    task: PlacedTask,
    start_time: String,
    completeness: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlacedTask {
    name: String,
    duration: i64,
    task_priority: i64,
}

/// Run a CLI command with `home` as the home directory and return output.
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "freeslot-cli", "--"])
        .args(args)
        .env("HOME", home)
        .env_remove("FREESLOT_ENV")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn placements(stdout: &str) -> Vec<Placement> {
    serde_json::from_str(stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_schedule_shortest_first_by_default() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, stderr, code) = run_cli(home.path(), &["schedule", "--json", REQUEST]);
    assert_eq!(code, 0, "schedule failed: {stderr}");

    // Task A needs 120 minutes and no gap is that long, so only Task B fits.
    let placed = placements(&stdout);
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].task.name, "Task B");
    assert_eq!(placed[0].start_time, "2020-06-25T09:00:00Z");
    assert_eq!(placed[0].completeness, "COMPLETELY_SCHEDULED");
}

#[test]
fn test_schedule_longest_first_splits() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, stderr, code) = run_cli(
        home.path(),
        &["schedule", "--json", REQUEST, "--algorithm", "LONGEST_TASK_FIRST", "--compact"],
    );
    assert_eq!(code, 0, "schedule failed: {stderr}");
    assert_eq!(stdout.trim().lines().count(), 1);

    let placed = placements(&stdout);
    let names: Vec<_> = placed.iter().map(|p| p.task.name.as_str()).collect();
    assert_eq!(names, vec!["Task A (Part 1)", "Task A (Part 2)", "Task B"]);
    assert_eq!(placed[0].task.duration, 30);
    assert_eq!(placed[1].task.duration, 90);
    assert_eq!(placed[0].task.task_priority, 3);
    assert!(placed.iter().all(|p| p.completeness == "COMPLETELY_SCHEDULED"));
}

#[test]
fn test_schedule_from_file_with_window_override() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("request.json");
    std::fs::write(&file, REQUEST).unwrap();

    let (stdout, stderr, code) = run_cli(
        home.path(),
        &[
            "schedule",
            "--input",
            file.to_str().unwrap(),
            "--algorithm",
            "highest-priority-first",
            "--start",
            "2020-06-25T10:00:00Z",
        ],
    );
    assert_eq!(code, 0, "schedule failed: {stderr}");

    let placed = placements(&stdout);
    assert_eq!(placed[0].task.name, "Task B");
    assert_eq!(placed[0].start_time, "2020-06-25T10:00:00Z");
}

#[test]
fn test_schedule_rejects_unknown_algorithm() {
    let home = tempfile::tempdir().unwrap();
    let request = r#"{"tasks": [], "algorithmType": "RANDOM"}"#;
    let (_, stderr, code) = run_cli(home.path(), &["schedule", "--json", request]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error: "), "stderr: {stderr}");
    assert!(stderr.contains("Algorithm type does not exist: RANDOM"));
}

#[test]
fn test_schedule_rejects_bad_priority() {
    let home = tempfile::tempdir().unwrap();
    let request = r#"{"tasks": [{"name": "A", "duration": 10, "taskPriority": 7}]}"#;
    let (_, stderr, code) = run_cli(home.path(), &["schedule", "--json", request]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Priority must be a value from 1 to 5"));
}

#[test]
fn test_free_lists_gaps() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, stderr, code) = run_cli(home.path(), &["free", "--json", REQUEST]);
    assert_eq!(code, 0, "free failed: {stderr}");

    let gaps: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let durations: Vec<_> = gaps
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["duration"].as_i64().unwrap())
        .collect();
    assert_eq!(durations, vec![30, 90, 60]);
}

#[test]
fn test_algorithms_list() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["algorithms", "--json"]);
    assert_eq!(code, 0);
    let names: Vec<String> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        names,
        vec!["SHORTEST_TASK_FIRST", "HIGHEST_PRIORITY_FIRST", "LONGEST_TASK_FIRST"]
    );
}

#[test]
fn test_config_set_get_reset() {
    let home = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "working_hours.start"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "09:00");

    let (_, _, code) = run_cli(home.path(), &["config", "set", "scheduler.default_algorithm", "LONGEST_TASK_FIRST"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "scheduler.default_algorithm"]);
    assert_eq!(stdout.trim(), "LONGEST_TASK_FIRST");

    let (_, _, code) = run_cli(home.path(), &["config", "reset"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "scheduler.default_algorithm"]);
    assert_eq!(stdout.trim(), "SHORTEST_TASK_FIRST");
}

#[test]
fn test_config_rejects_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "output.colour", "red"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown configuration key"));
}

#[test]
fn test_config_list_and_path() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["config", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("output.pretty = true"));

    let (stdout, _, code) = run_cli(home.path(), &["config", "path"]);
    assert_eq!(code, 0);
    assert!(stdout.trim().ends_with("freeslot/config.toml"));
}
