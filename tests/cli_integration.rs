//! CLI integration tests for Mikado
//!
//! These tests verify the complete workflow from description file to
//! rendered DOT output, ensuring commands work together correctly.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command instance for the mikado binary
fn mikado_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("mikado"))
}

/// Write a description file into a fresh temp directory
fn setup_description(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("refactoring.mikado");
    fs::write(&path, content).unwrap();
    (dir, path)
}

const SAMPLE: &str = "\
- Ship the feature
    x Extract the adapter
    - Split the service
        - Add integration tests
";

// =============================================================================
// Render Tests
// =============================================================================

#[test]
fn test_render_writes_gv_next_to_description() {
    let (dir, path) = setup_description(SAMPLE);

    mikado_cmd()
        .arg("render")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let gv = dir.path().join("refactoring.gv");
    assert!(gv.is_file());

    let dot = fs::read_to_string(&gv).unwrap();
    assert!(dot.starts_with("strict digraph {"));
    assert!(dot.contains("rankdir=BT"));
    assert!(dot.contains("\"Ship the feature\" -> \"Split the service\""));
}

#[test]
fn test_render_respects_output_base() {
    let (dir, path) = setup_description(SAMPLE);
    let base = dir.path().join("custom");

    mikado_cmd()
        .arg("render")
        .arg(&path)
        .arg("--output")
        .arg(&base)
        .assert()
        .success();

    assert!(dir.path().join("custom.gv").is_file());
}

#[test]
fn test_render_marks_done_and_goal_attributes() {
    let (dir, path) = setup_description(SAMPLE);

    mikado_cmd().arg("render").arg(&path).assert().success();

    let dot = fs::read_to_string(dir.path().join("refactoring.gv")).unwrap();
    assert!(dot.contains(
        "\"Ship the feature\" [color=firebrick fontcolor=firebrick peripheries=2]"
    ));
    assert!(dot.contains(
        "\"Extract the adapter\" [color=darkgreen fontcolor=darkgreen peripheries=1]"
    ));
}

#[test]
fn test_render_excludes_comment_lines() {
    let (dir, path) = setup_description("- Goal\n# - Ghost task\n    - Real task\n");

    mikado_cmd().arg("render").arg(&path).assert().success();

    let dot = fs::read_to_string(dir.path().join("refactoring.gv")).unwrap();
    assert!(!dot.contains("Ghost"));
    assert!(dot.contains("\"Goal\" -> \"Real task\""));
}

#[test]
fn test_render_json_reports_counts() {
    let (_dir, path) = setup_description(SAMPLE);

    let output = mikado_cmd()
        .arg("render")
        .arg(&path)
        .args(["--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["nodes"], 4);
    assert_eq!(json["edges"], 3);
}

#[test]
fn test_render_missing_file_fails() {
    mikado_cmd()
        .arg("render")
        .arg("does-not-exist.mikado")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read description"));
}

#[test]
fn test_render_is_idempotent() {
    let (dir, path) = setup_description(SAMPLE);

    mikado_cmd().arg("render").arg(&path).assert().success();
    let first = fs::read_to_string(dir.path().join("refactoring.gv")).unwrap();

    mikado_cmd().arg("render").arg(&path).assert().success();
    let second = fs::read_to_string(dir.path().join("refactoring.gv")).unwrap();

    assert_eq!(first, second);
}

// =============================================================================
// Check Tests
// =============================================================================

#[test]
fn test_check_reports_statistics() {
    let (_dir, path) = setup_description(SAMPLE);

    mikado_cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks: 4 (1 done, 3 remaining)"))
        .stdout(predicate::str::contains("Edges: 3"))
        .stdout(predicate::str::contains("Goals: Ship the feature"));
}

#[test]
fn test_check_json_output() {
    let (_dir, path) = setup_description(SAMPLE);

    let output = mikado_cmd()
        .arg("check")
        .arg(&path)
        .args(["--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["tasks"], 4);
    assert_eq!(json["done"], 1);
    assert_eq!(json["remaining"], 3);
    assert_eq!(json["goals"], serde_json::json!(["Ship the feature"]));
    assert_eq!(json["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(json["edges"].as_array().unwrap().len(), 3);
    assert_eq!(json["nodes"][0]["goal"], true);
}

#[test]
fn test_check_rejects_depth_skip() {
    let (_dir, path) = setup_description("- Goal\n        - Skipped a level\n");

    mikado_cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Skipped a level"))
        .stderr(predicate::str::contains("depth 2"));
}

#[test]
fn test_check_multiple_goals() {
    let (_dir, path) = setup_description("- First goal\n- Second goal\n    - Step\n");

    mikado_cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("First goal"))
        .stdout(predicate::str::contains("Second goal"));
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_config_file_overrides_conventions() {
    let (dir, path) = setup_description("- Goal\n  * Two-space indent, star marker\n");
    fs::write(
        dir.path().join("mikado.toml"),
        "indent_width = 2\ndone_markers = [\"*\"]\n",
    )
    .unwrap();

    mikado_cmd().arg("render").arg(&path).assert().success();

    let dot = fs::read_to_string(dir.path().join("refactoring.gv")).unwrap();
    assert!(dot.contains(
        "\"Two-space indent, star marker\" [color=darkgreen fontcolor=darkgreen peripheries=1]"
    ));
}

#[test]
fn test_invalid_config_fails() {
    let (dir, path) = setup_description(SAMPLE);
    fs::write(dir.path().join("mikado.toml"), "indent_width = 0\n").unwrap();

    mikado_cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("indent_width"));
}
