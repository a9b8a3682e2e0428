//! CLI end-to-end tests.
//!
//! These tests spawn the actual `ctxprobe` binary and validate stdout JSON
//! and exit codes.
//!
//! Exit code expectations:
//! - 0: Success, including file-access failures (those emit an error object
//!   but keep the zero status)
//! - 2: Missing file path argument

use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Run ctxprobe with given arguments and return (stdout, stderr, exit_code).
fn run_ctxprobe(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_ctxprobe"))
        .args(args)
        .output()
        .expect("failed to execute ctxprobe");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Write a fixture file and return its path as a string.
fn write_fixture(dir: &TempDir, name: &str, content: &str) -> String {
    let path: PathBuf = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

/// Parse the single stdout line as JSON, asserting there is exactly one.
fn parse_single_line(stdout: &str) -> Value {
    let trimmed = stdout.trim_end();
    assert!(
        !trimmed.contains('\n'),
        "expected a single output line, got: {:?}",
        stdout
    );
    serde_json::from_str(trimmed).expect("stdout should be valid JSON")
}

// ============================================================================
// Syntax Validation Mode
// ============================================================================

#[test]
fn valid_file_reports_valid_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "ok.py", "def f():\n    return 1\n");

    let (stdout, _stderr, exit_code) = run_ctxprobe(&[&path]);

    assert_eq!(exit_code, 0);
    let json = parse_single_line(&stdout);
    assert_eq!(json["valid"], true);
    assert_eq!(json["error"], "");
}

#[test]
fn syntax_error_reports_line_info_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "bad.py", "def f():\n    return (1\n");

    let (stdout, _stderr, exit_code) = run_ctxprobe(&[&path]);

    assert_eq!(exit_code, 0, "a syntax error is a result, not a failure");
    let json = parse_single_line(&stdout);
    assert_eq!(json["valid"], false);
    let message = json["error"].as_str().unwrap();
    assert!(!message.is_empty());
    assert!(message.contains("line"));
}

#[test]
fn repeated_invocations_produce_identical_output() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "ok.py", "def f():\n    return 1\n");

    let (first, _, _) = run_ctxprobe(&[&path]);
    let (second, _, _) = run_ctxprobe(&[&path]);

    assert_eq!(first, second);
}

// ============================================================================
// Context Lookup Mode
// ============================================================================

#[test]
fn context_lookup_resolves_the_containing_function() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "app.py", "def f():\n    return 1\n");

    let (stdout, _stderr, exit_code) = run_ctxprobe(&[&path, "1", "1"]);

    assert_eq!(exit_code, 0);
    let json = parse_single_line(&stdout);
    assert_eq!(json["name"], "f");
    assert_eq!(json["start_line"], 1);
    assert_eq!(json["end_line"], 2);
}

#[test]
fn context_lookup_prefers_the_outer_scope() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "nested.py",
        "def outer():\n    def inner():\n        return 1\n    return inner\n",
    );

    let (stdout, _stderr, exit_code) = run_ctxprobe(&[&path, "3", "3"]);

    assert_eq!(exit_code, 0);
    let json = parse_single_line(&stdout);
    assert_eq!(json["name"], "outer");
    assert_eq!(json["start_line"], 1);
    assert_eq!(json["end_line"], 4);
}

#[test]
fn context_lookup_outside_definitions_reports_not_found() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "flat.py", "x = 1\ny = 2\n");

    let (stdout, _stderr, exit_code) = run_ctxprobe(&[&path, "1", "2"]);

    assert_eq!(exit_code, 0);
    let json = parse_single_line(&stdout);
    assert_eq!(json["error"], "No enclosing context found");
}

#[test]
fn context_lookup_on_broken_source_reports_position_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "bad.py", "def f(:\n");

    let (stdout, _stderr, exit_code) = run_ctxprobe(&[&path, "1", "1"]);

    assert_eq!(exit_code, 0);
    let json = parse_single_line(&stdout);
    assert!(json["error"].is_string());
    assert!(json["line"].is_u64());
    assert!(json["col"].is_u64());
    assert!(json["message"].is_string());
}

#[test]
fn lone_line_start_falls_back_to_syntax_check() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "ok.py", "def f():\n    return 1\n");

    let (stdout, _stderr, exit_code) = run_ctxprobe(&[&path, "1"]);

    assert_eq!(exit_code, 0);
    let json = parse_single_line(&stdout);
    assert_eq!(json["valid"], true);
}

// ============================================================================
// Argument and File Errors
// ============================================================================

#[test]
fn no_arguments_reports_missing_path_and_exits_nonzero() {
    let (stdout, _stderr, exit_code) = run_ctxprobe(&[]);

    assert_eq!(exit_code, 2);
    let json = parse_single_line(&stdout);
    assert_eq!(json["error"], "File path is required");
}

#[test]
fn missing_file_reports_error_but_exits_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir
        .path()
        .join("does_not_exist.py")
        .to_string_lossy()
        .into_owned();

    let (stdout, _stderr, exit_code) = run_ctxprobe(&[&path]);

    // The historical contract: read failures emit an error object on stdout
    // without setting a failing exit status.
    assert_eq!(exit_code, 0);
    let json = parse_single_line(&stdout);
    assert!(json["error"].as_str().unwrap().contains("does_not_exist.py"));
}

#[test]
fn missing_file_in_context_mode_also_exits_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gone.py").to_string_lossy().into_owned();

    let (stdout, _stderr, exit_code) = run_ctxprobe(&[&path, "1", "2"]);

    assert_eq!(exit_code, 0);
    let json = parse_single_line(&stdout);
    assert!(json["error"].is_string());
}
