//! JSON output types for CLI responses.
//!
//! These types form the caller contract: every invocation prints exactly one
//! JSON object on a single stdout line. Field order in the serialized output
//! follows struct declaration order, so the structs below are declared in
//! wire order.
//!
//! Four shapes exist:
//! - [`SyntaxCheckResponse`]: result of a syntax validation pass
//! - [`EnclosingContextResponse`]: a resolved enclosing scope
//! - [`SyntaxErrorResponse`]: a parse failure during context lookup
//! - [`ErrorBody`]: everything else (`{"error": <message>}`)

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// Wire message for a context lookup that matched no scope.
pub const NO_ENCLOSING_CONTEXT: &str = "No enclosing context found";

// ============================================================================
// Response Types
// ============================================================================

/// Result of a syntax validation pass ("dry run").
///
/// `error` is always present: empty on success, a human-readable message
/// combining line, column and description on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxCheckResponse {
    /// Whether the source parsed cleanly.
    pub valid: bool,
    /// Parse failure message, empty when `valid` is true.
    pub error: String,
}

impl SyntaxCheckResponse {
    /// Response for a source that parsed cleanly.
    pub fn ok() -> Self {
        SyntaxCheckResponse {
            valid: true,
            error: String::new(),
        }
    }

    /// Response for a source that failed to parse.
    pub fn invalid(error: impl Into<String>) -> Self {
        SyntaxCheckResponse {
            valid: false,
            error: error.into(),
        }
    }
}

/// A resolved enclosing scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnclosingContextResponse {
    /// Name of the function or class.
    pub name: String,
    /// 1-indexed line of the declaration.
    pub start_line: u32,
    /// 1-indexed derived end line.
    pub end_line: u32,
}

/// A parse failure surfaced by the context lookup.
///
/// Distinct from [`ErrorBody`]: the caller gets the combined message plus
/// the individual line/col/description fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxErrorResponse {
    /// Combined human-readable message.
    pub error: String,
    /// 1-indexed line of the failure.
    pub line: u32,
    /// 1-indexed column of the failure.
    pub col: u32,
    /// Parser description of the failure.
    pub message: String,
}

/// Generic single-field error object.
///
/// Used for the missing-path case, file access failures, and the
/// "no enclosing context" outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

impl ErrorBody {
    /// Create an error body from a message.
    pub fn new(message: impl Into<String>) -> Self {
        ErrorBody {
            error: message.into(),
        }
    }
}

// ============================================================================
// Output Emission
// ============================================================================

/// Emit a response as compact JSON on a single line.
///
/// This is the single output path for the CLI; stdout carries nothing else.
/// The output is deterministic: same input produces identical bytes.
pub fn emit_line<T: Serialize>(response: &T, writer: &mut impl Write) -> io::Result<()> {
    let json =
        serde_json::to_string(response).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}

// ============================================================================
// Tests
// ============================================================================
