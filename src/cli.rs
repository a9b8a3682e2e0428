//! CLI command implementations.
//!
//! Each function reads the target file, runs the query, and returns the
//! single JSON line destined for stdout.
//!
//! ## Error Handling
//!
//! File read failures are not process failures: they are rendered locally
//! as an `{"error": <message>}` response and returned through the `Ok`
//! path, so the process still exits zero. Only the missing-path case and
//! genuine internal errors travel the `Err` path out to `main`.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use ctxprobe_core::error::ProbeError;
use ctxprobe_core::output::{
    EnclosingContextResponse, ErrorBody, SyntaxCheckResponse, SyntaxErrorResponse,
    NO_ENCLOSING_CONTEXT,
};
use ctxprobe_python::analyzer::{Analyzer, ContextError};

// ============================================================================
// Commands
// ============================================================================

/// Run the syntax validator over a file.
pub fn check_syntax(path: &Path) -> Result<String, ProbeError> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => return file_access_response(path, &err),
    };

    let check = Analyzer::new().check_syntax(&source);
    render(&SyntaxCheckResponse {
        valid: check.valid,
        error: check.error,
    })
}

/// Run the enclosing-context resolver over a file and line range.
pub fn find_enclosing_context(
    path: &Path,
    line_start: u32,
    line_end: u32,
) -> Result<String, ProbeError> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => return file_access_response(path, &err),
    };

    match Analyzer::new().find_enclosing_context(&source, line_start, line_end) {
        Ok(context) => render(&EnclosingContextResponse {
            name: context.name,
            start_line: context.start_line,
            end_line: context.end_line,
        }),
        Err(ContextError::NotFound) => render(&ErrorBody::new(NO_ENCLOSING_CONTEXT)),
        Err(ContextError::Syntax(info)) => render(&SyntaxErrorResponse {
            error: info.combined_message(),
            line: info.line,
            col: info.col,
            message: info.message,
        }),
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Render a file access failure as a normal error response.
fn file_access_response(path: &Path, err: &io::Error) -> Result<String, ProbeError> {
    let failure = ProbeError::file_access(path, err);
    debug!(%failure, "file read failed");
    render(&ErrorBody::new(failure.to_string()))
}

/// Serialize a response to its single JSON line.
fn render<T: Serialize>(response: &T) -> Result<String, ProbeError> {
    serde_json::to_string(response)
        .map_err(|e| ProbeError::internal(format!("JSON serialization error: {}", e)))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    mod syntax_command {
        use super::*;

        #[test]
        fn valid_file_reports_valid() {
            let dir = TempDir::new().unwrap();
            let path = write_fixture(&dir, "ok.py", "def f():\n    return 1\n");

            let json = check_syntax(&path).unwrap();
            let value: Value = serde_json::from_str(&json).unwrap();
            assert_eq!(value["valid"], true);
            assert_eq!(value["error"], "");
        }

        #[test]
        fn broken_file_reports_position() {
            let dir = TempDir::new().unwrap();
            let path = write_fixture(&dir, "bad.py", "def f():\n    return (1\n");

            let json = check_syntax(&path).unwrap();
            let value: Value = serde_json::from_str(&json).unwrap();
            assert_eq!(value["valid"], false);
            let message = value["error"].as_str().unwrap();
            assert!(message.contains("line"));
        }

        #[test]
        fn missing_file_is_an_error_response_not_a_failure() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("nope.py");

            let json = check_syntax(&path).unwrap();
            let value: Value = serde_json::from_str(&json).unwrap();
            let message = value["error"].as_str().unwrap();
            assert!(message.contains("nope.py"));
        }
    }

    mod context_command {
        use super::*;

        #[test]
        fn resolves_the_containing_function() {
            let dir = TempDir::new().unwrap();
            let path = write_fixture(&dir, "app.py", "def f():\n    return 1\n");

            let json = find_enclosing_context(&path, 1, 1).unwrap();
            let value: Value = serde_json::from_str(&json).unwrap();
            assert_eq!(value["name"], "f");
            assert_eq!(value["start_line"], 1);
            assert_eq!(value["end_line"], 2);
        }

        #[test]
        fn reports_not_found_outside_definitions() {
            let dir = TempDir::new().unwrap();
            let path = write_fixture(&dir, "flat.py", "x = 1\n");

            let json = find_enclosing_context(&path, 1, 1).unwrap();
            let value: Value = serde_json::from_str(&json).unwrap();
            assert_eq!(value["error"], NO_ENCLOSING_CONTEXT);
        }

        #[test]
        fn reports_syntax_errors_with_position_fields() {
            let dir = TempDir::new().unwrap();
            let path = write_fixture(&dir, "bad.py", "def f(:\n");

            let json = find_enclosing_context(&path, 1, 1).unwrap();
            let value: Value = serde_json::from_str(&json).unwrap();
            assert!(value["error"].is_string());
            assert!(value["line"].is_u64());
            assert!(value["col"].is_u64());
            assert!(value["message"].is_string());
        }

        #[test]
        fn missing_file_is_an_error_response_not_a_failure() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("gone.py");

            let json = find_enclosing_context(&path, 1, 2).unwrap();
            let value: Value = serde_json::from_str(&json).unwrap();
            assert!(value["error"].as_str().unwrap().contains("gone.py"));
        }
    }
}
