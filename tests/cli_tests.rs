//! Integration tests for the planar CLI
//!
//! These tests run the planar binary and check output and exit codes.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::tempdir;

/// Get a Command for planar
fn planar() -> Command {
    let mut cmd = cargo_bin_cmd!("planar");
    cmd.env_remove("PLANAR_CONFIG");
    cmd
}

const TREE_EDGES: &str = "0-1,1-4,1-5,2-3,2-4,2-5,3-6,5-6";
const FOUR_HUB_COSTS: &str = "0,20,42,35;20,0,30,34;42,30,0,12;35,34,12,0";

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    planar()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: planar"))
        .stdout(predicate::str::contains("reach"))
        .stdout(predicate::str::contains("eccentricity"))
        .stdout(predicate::str::contains("tour"));
}

#[test]
fn test_version_flag() {
    planar()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("planar"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_missing_subcommand_is_usage_error() {
    planar().assert().code(2);
}

#[test]
fn test_unknown_format_exit_code_2() {
    planar()
        .args(["--format", "xml", "connectivity", "--edges", "a-b"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    planar()
        .args(["--format", "json", "connectivity", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_tour_requires_input() {
    planar().args(["tour"]).assert().code(2);
}

#[test]
fn test_unknown_source_label_is_data_error() {
    planar()
        .args(["reach", "--edges", "a-b", "--from", "z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: z"));
}

#[test]
fn test_ragged_cost_table_is_data_error() {
    planar()
        .args(["--format", "json", "tour", "--costs", "0,1;1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"malformed_matrix\""));
}

#[test]
fn test_unroutable_cost_table_is_data_error() {
    planar()
        .args(["tour", "--costs", "0,-;-,0"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("illegal route"));
}

// ============================================================================
// reach
// ============================================================================

#[test]
fn test_reach_full_tree() {
    planar()
        .args(["reach", "--edges", TREE_EDGES, "--from", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reachable from 0 (7 nodes)"))
        .stdout(predicate::str::contains("3  depth=4"))
        .stdout(predicate::str::contains("max depth: 4"));
}

#[test]
fn test_reach_depth_limit_json() {
    let output = planar()
        .args([
            "--format",
            "json",
            "reach",
            "--edges",
            TREE_EDGES,
            "--from",
            "0",
            "--depth-limit",
            "2",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let labels: Vec<&str> = json["reached"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["0", "1", "4", "5"]);
    assert_eq!(json["depth_limit"], 2);
    // One hop past the limit is still observed
    assert_eq!(json["max_depth"], 3);
}

#[test]
fn test_reach_isolated_source() {
    planar()
        .args([
            "--format", "json", "reach", "--edges", "a-b", "--nodes", "solo", "--from", "solo",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"max_depth\": null"))
        .stdout(predicate::str::contains("\"label\": \"solo\""));
}

#[test]
fn test_reach_directed() {
    planar()
        .args(["reach", "--edges", "a-b,b-c", "--directed", "--from", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reachable from b (2 nodes)"));
}

// ============================================================================
// eccentricity / connectivity
// ============================================================================

#[test]
fn test_eccentricity_regression_tree() {
    planar()
        .args(["eccentricity", "--edges", TREE_EDGES])
        .assert()
        .success()
        .stdout(predicate::str::contains("0  degree=1  eccentricity=4"))
        .stdout(predicate::str::contains("5  degree=3  eccentricity=2"))
        .stdout(predicate::str::contains("6  degree=2  eccentricity=3"));
}

#[test]
fn test_connectivity_json() {
    planar()
        .args(["--format", "json", "connectivity", "--edges", "a-b,b-c", "--nodes", "d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"nodes\": 4"))
        .stdout(predicate::str::contains("\"edges\": 4"))
        .stdout(predicate::str::contains("\"connected\": false"));
}

#[test]
fn test_connectivity_complete_graph() {
    planar()
        .args(["connectivity", "--edges", "a-b,a-c,b-c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("connected: true"))
        .stdout(predicate::str::contains("complete: true"));
}

// ============================================================================
// tour
// ============================================================================

#[test]
fn test_tour_four_hubs() {
    planar()
        .args(["tour", "--costs", FOUR_HUB_COSTS])
        .assert()
        .success()
        .stdout(predicate::str::contains("route: 0 -> 1 -> 2 -> 3"))
        .stdout(predicate::str::contains("closed tour cost: 97"));
}

#[test]
fn test_tour_json_with_source() {
    let output = planar()
        .args(["--format", "json", "tour", "--costs", FOUR_HUB_COSTS, "--source", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["route"], serde_json::json!([3, 2, 1, 0]));
    assert_eq!(json["source_hub"], 3);
    assert!(json["computation_time_us"].is_u64());
}

#[test]
fn test_tour_points() {
    planar()
        .args(["tour", "--points", "0,0;10,0;10,10;0,10;1,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("route: 0 -> 4 -> 1 -> 2 -> 3"))
        .stdout(predicate::str::contains("closed tour cost: 40"));
}

#[test]
fn test_tour_duplicate_points_rejected() {
    planar()
        .args(["tour", "--points", "0,0;1,1;1,1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_tour_source_out_of_range() {
    planar()
        .args(["tour", "--costs", "0,1;1,0", "--source", "5"])
        .assert()
        .code(2);
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_sets_default_source_hub() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("planar.toml");
    std::fs::write(&path, "[route]\nsource_hub = 3\n").unwrap();

    planar()
        .arg("--config")
        .arg(&path)
        .args(["tour", "--costs", FOUR_HUB_COSTS])
        .assert()
        .success()
        .stdout(predicate::str::contains("route: 3 -> 2 -> 1 -> 0"));
}

#[test]
fn test_config_depth_limit_applies_to_reach() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("planar.toml");
    std::fs::write(&path, "[search]\ndepth_limit = 1\n").unwrap();

    planar()
        .arg("--config")
        .arg(&path)
        .args(["reach", "--edges", TREE_EDGES, "--from", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reachable from 0 (2 nodes)"))
        .stdout(predicate::str::contains("max depth: 2"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("planar.toml");
    std::fs::write(&path, "[search]\nsize_hint = 0\n").unwrap();

    planar()
        .arg("--config")
        .arg(&path)
        .args(["connectivity", "--edges", "a-b"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempdir().unwrap();
    planar()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["connectivity", "--edges", "a-b"])
        .assert()
        .failure();
}
