//! Integration tests for the vigil CLI.
//!
//! These run the real binary over the built-in sample data via `cargo run`.

use std::process::Command;

fn run_vigil(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--package", "vigil", "--"])
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_help() {
    let output = run_vigil(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("vigil"));
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("report"));
    assert!(stdout.contains("export"));
}

#[test]
fn test_cli_version() {
    let output = run_vigil(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("vigil"));
}

#[test]
fn test_report_over_sample_data() {
    let output = run_vigil(&["report"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("João Silva"));
    assert!(stdout.contains("Showing 5 of 5 records (page 1 of 1)"));
}

#[test]
fn test_report_filter_and_sort() {
    let output = run_vigil(&["report", "--type", "regular", "--sort", "score", "-d", "desc"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("3 regular"));
    assert!(!stdout.contains("Maria Santos"));
}

#[test]
fn test_report_rejects_unknown_sort_field() {
    let output = run_vigil(&["report", "--sort", "priority"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown sort field"));
}

#[test]
fn test_totals_json_output() {
    let output = run_vigil(&["totals", "--json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let totals: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(totals["total"], 5);
    assert_eq!(totals["regular"], 3);
}

#[test]
fn test_export_to_stdout_includes_data_rows() {
    let output = run_vigil(&["export"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6, "header plus five data rows");
    assert!(lines[0].starts_with("person_id,name,visitor_type"));
    assert!(lines.iter().any(|l| l.contains("Maria Santos")));
}
