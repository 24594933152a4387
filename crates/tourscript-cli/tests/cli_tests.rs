use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SCRIPT: &str = "Day 1: Arrival\nLand and check-in.\n\nEvening walk.\n\nDay 2: City Tour\nMorning coffee stop.\n\nMuseum visit.\n";

/// Helper function to write a script into a temporary directory
fn create_script(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write script");
    (temp_dir, path)
}

/// Helper function to create a Command with --no-color flag for testing
fn tourscript_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tourscript").expect("Failed to find tourscript binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_parse_markdown_output() {
    let (_temp_dir, path) = create_script("kyoto.md", SCRIPT);

    tourscript_cmd()
        .args(["parse", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# kyoto\n"))
        .stdout(predicate::str::contains("## Day 1: Arrival"))
        .stdout(predicate::str::contains("1. Land and check-in."))
        .stdout(predicate::str::contains("2. Evening walk."))
        .stdout(predicate::str::contains("## Day 2: City Tour"))
        .stdout(predicate::str::contains("2. Museum visit."));
}

#[test]
fn test_cli_parse_with_name() {
    let (_temp_dir, path) = create_script("trip.md", SCRIPT);

    tourscript_cmd()
        .args(["parse", path.to_str().unwrap(), "--name", "Kyoto Weekend"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Kyoto Weekend\n"));
}

#[test]
fn test_cli_parse_rejects_empty_name() {
    let (_temp_dir, path) = create_script("trip.md", SCRIPT);

    tourscript_cmd()
        .args(["parse", path.to_str().unwrap(), "--name", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for field 'name'"));
}

#[test]
fn test_cli_parse_json_output() {
    let (_temp_dir, path) = create_script("trip.md", SCRIPT);

    let output = tourscript_cmd()
        .args(["parse", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to run tourscript");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["name"], "trip");
    assert_eq!(json["days"][0]["day_index"], 1);
    assert_eq!(json["days"][0]["title"], "Arrival");
    assert_eq!(json["days"][1]["segments"][1]["text"], "Museum visit.");
    assert_eq!(json["days"][1]["segments"][1]["order"], 2);
    assert_eq!(json["source_text"], SCRIPT);
}

#[test]
fn test_cli_parse_selected_day() {
    let (_temp_dir, path) = create_script("trip.md", SCRIPT);

    tourscript_cmd()
        .args(["parse", path.to_str().unwrap(), "--day", "2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("## Day 2: City Tour"))
        .stdout(predicate::str::contains("2. Museum visit."))
        .stdout(predicate::str::contains("## Day 1").not())
        .stdout(predicate::str::contains("# trip").not());
}

#[test]
fn test_cli_parse_selected_day_json() {
    let (_temp_dir, path) = create_script("trip.md", SCRIPT);

    let output = tourscript_cmd()
        .args(["parse", path.to_str().unwrap(), "--json", "--day", "1"])
        .output()
        .expect("Failed to run tourscript");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let days = json.as_array().expect("selected days should be an array");
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["day_index"], 1);
    assert_eq!(days[0]["title"], "Arrival");
}

#[test]
fn test_cli_parse_unknown_day() {
    let (_temp_dir, path) = create_script("trip.md", SCRIPT);

    tourscript_cmd()
        .args(["parse", path.to_str().unwrap(), "--day", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No days found."));
}

#[test]
fn test_cli_parse_without_headings() {
    let (_temp_dir, path) = create_script(
        "intro.txt",
        "    Welcome to the trip.\n\n    We explore the old town.\n",
    );

    tourscript_cmd()
        .args(["parse", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Day 1\n"))
        .stdout(predicate::str::contains("1. Welcome to the trip."))
        .stdout(predicate::str::contains("2. We explore the old town."));
}

#[test]
fn test_cli_parse_empty_file() {
    let (_temp_dir, path) = create_script("empty.md", "");

    tourscript_cmd()
        .args(["parse", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No segments for this day."));
}

#[test]
fn test_cli_parse_from_stdin() {
    tourscript_cmd()
        .args(["parse", "-"])
        .write_stdin("Day 5\nJust one paragraph.")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Route\n"))
        .stdout(predicate::str::contains("## Day 5\n"))
        .stdout(predicate::str::contains("1. Just one paragraph."));
}

#[test]
fn test_cli_parse_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let missing = temp_dir.path().join("nowhere.md");

    tourscript_cmd()
        .args(["parse", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Content file not found"));
}

#[test]
fn test_cli_summary() {
    let (_temp_dir, path) = create_script("trip.md", SCRIPT);

    tourscript_cmd()
        .args(["summary", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# trip"))
        .stdout(predicate::str::contains("- Days: 2"))
        .stdout(predicate::str::contains("- Segments: 4"))
        .stdout(predicate::str::contains("- Day 1: Arrival (2 segments)"))
        .stdout(predicate::str::contains("- Day 2: City Tour (2 segments)"));
}

#[test]
fn test_cli_summary_alias() {
    let (_temp_dir, path) = create_script("trip.md", SCRIPT);

    tourscript_cmd()
        .args(["s", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Days: 2"));
}

#[test]
fn test_cli_schema() {
    let output = tourscript_cmd()
        .arg("schema")
        .output()
        .expect("Failed to run tourscript");
    assert!(output.status.success());

    let schema: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("schema should be JSON");
    assert_eq!(schema["title"], "Route");
    assert!(schema["properties"]["days"].is_object());
}

#[test]
fn test_cli_help_output() {
    tourscript_cmd()
        .args(["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("structured day-by-day routes"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("schema"));
}

#[test]
fn test_cli_no_command_prints_help() {
    tourscript_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_output() {
    tourscript_cmd()
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tourscript "));
}
