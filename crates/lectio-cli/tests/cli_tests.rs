use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn lectio_cmd() -> Command {
    let mut cmd = Command::cargo_bin("lectio").expect("Failed to find lectio binary");
    cmd.arg("--no-color");
    cmd
}

const MATTHEW_REQUEST: &str = r#"{
    "planType": "sequential",
    "id": "matthew",
    "name": "Matthew in a Month",
    "booksToInclude": [{"bookCode": 40}]
}"#;

#[test]
fn test_cli_no_command_lists_divisions() {
    lectio_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("# Divisions"))
        .stdout(predicate::str::contains("| Pentateuch | Genesis to Deuteronomy | 187 |"))
        .stdout(predicate::str::contains("| Revelation | Revelation | 22 |"));
}

#[test]
fn test_cli_divisions_for_new_testament() {
    lectio_cmd()
        .args(["divisions", "--testament", "nt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gospels"))
        .stdout(predicate::str::contains("Pentateuch").not());
}

#[test]
fn test_cli_books_by_division() {
    lectio_cmd()
        .args(["books", "--division", "pauline-epistles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| 45 | Romans | NT | Pauline Epistles | 16 |"))
        .stdout(predicate::str::contains("| 57 | Philemon |"))
        .stdout(predicate::str::contains("Hebrews").not());
}

#[test]
fn test_cli_books_rejects_unknown_testament() {
    lectio_cmd()
        .args(["books", "--testament", "apocrypha"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid testament"));
}

#[test]
fn test_cli_generate_from_file_as_markdown() {
    let temp_dir = create_cli_test_environment();
    let request = temp_dir.path().join("request.json");
    fs::write(&request, MATTHEW_REQUEST).unwrap();

    lectio_cmd()
        .args(["generate", request.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Matthew in a Month"))
        .stdout(predicate::str::contains("- Days: 28"))
        .stdout(predicate::str::contains("- **Day 1**: Matthew 1\n"))
        .stdout(predicate::str::contains("- **Day 28**: Matthew 28\n"));
}

#[test]
fn test_cli_generate_from_stdin_as_json() {
    let output = lectio_cmd()
        .args(["generate", "-", "--format", "json"])
        .write_stdin(MATTHEW_REQUEST)
        .output()
        .expect("Failed to run lectio");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["totalPlanDays"], 28);
    assert_eq!(value["planType"], "precalculated_daily_json");
    assert_eq!(value["dailyReadings"][0][0]["bookCode"], 40);
    assert!(value.get("bookReadingCounts").is_none());
}

#[test]
fn test_cli_generate_rejects_unknown_plan_type() {
    lectio_cmd()
        .args(["generate", "-"])
        .write_stdin(r#"{"planType": "lectionary"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid request"));
}

#[test]
fn test_cli_generate_missing_file() {
    let temp_dir = create_cli_test_environment();
    let missing = temp_dir.path().join("missing.json");

    lectio_cmd()
        .args(["generate", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_cli_preset_writes_output_file() {
    let temp_dir = create_cli_test_environment();
    let output = temp_dir.path().join("horner.json");

    lectio_cmd()
        .args([
            "preset",
            "horner",
            "--days",
            "30",
            "--format",
            "json",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote Professor Horner's Bible Reading System (30 days)"));

    let plan: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(plan["totalPlanDays"], 30);
    assert_eq!(plan["dailyReadings"][0].as_array().unwrap().len(), 10);
}

#[test]
fn test_cli_preset_whole_bible_options() {
    let output = lectio_cmd()
        .args([
            "preset",
            "whole-bible",
            "--days",
            "365",
            "--nt-placement",
            "after",
            "--wisdom-placement",
            "within",
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to run lectio");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // One stream of all 66 books at 4 chapters a day
    assert_eq!(value["dailyReadings"][0].as_array().unwrap().len(), 4);
    assert_eq!(value["name"], "Whole Bible");
}

#[test]
fn test_cli_preset_rejects_zero_days() {
    lectio_cmd()
        .args(["preset", "mcheyne", "--days", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("totalPlanDays"));
}

#[test]
fn test_cli_stats_for_exported_plan() {
    let temp_dir = create_cli_test_environment();
    let plan_path = temp_dir.path().join("nt.json");

    lectio_cmd()
        .args([
            "preset",
            "new-testament",
            "--days",
            "260",
            "--format",
            "json",
            "--output",
            plan_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    lectio_cmd()
        .args(["stats", plan_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Plan Statistics: New Testament"))
        .stdout(predicate::str::contains("| New Testament | 260 | 260 | 1.0x |"))
        .stdout(predicate::str::contains("| Wisdom Books | 243 | 0 | 0.0x |"))
        .stdout(predicate::str::contains("- Revelation: 22"));
}

#[test]
fn test_cli_stats_as_json() {
    let temp_dir = create_cli_test_environment();
    let plan_path = temp_dir.path().join("matthew.json");
    let generated = lectio_cmd()
        .args(["generate", "-", "--format", "json"])
        .write_stdin(MATTHEW_REQUEST)
        .output()
        .unwrap();
    fs::write(&plan_path, generated.stdout).unwrap();

    let output = lectio_cmd()
        .args(["stats", plan_path.to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["bookReadings"]["Matthew"], 28);
    assert_eq!(value["divisions"][0]["division"], "Gospels");
    assert_eq!(value["wisdomBooks"]["repetition"], "0.0");
}
