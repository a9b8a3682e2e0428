//! Error types and output code constants for ctxprobe.
//!
//! This module provides a unified error type (`ProbeError`) for the CLI
//! boundary, plus the stable numeric codes used as process exit codes:
//! - `2`: Invalid arguments (bad input from caller)
//! - `3`: File access errors (open/read failure)
//! - `10`: Internal errors (bugs, unexpected state)
//!
//! Syntax errors in the *analyzed* source are deliberately absent here:
//! they are query results, not tool failures, and are represented by the
//! response types in [`crate::output`].

use std::fmt;
use std::io;
use std::path::Path;

use thiserror::Error;

// ============================================================================
// Output Error Codes
// ============================================================================

/// Stable numeric codes for errors that cross the process boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputErrorCode {
    /// Invalid arguments from caller (missing file path).
    InvalidArguments = 2,
    /// File access errors (missing file, permission denied).
    FileAccess = 3,
    /// Internal errors (bugs, unexpected state).
    InternalError = 10,
}

impl OutputErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for OutputErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Unified error type for the CLI boundary.
///
/// Every variant carries enough context to produce the single-line JSON
/// error object the caller expects on stdout.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// No file path argument was given.
    #[error("File path is required")]
    MissingPath,

    /// The source file could not be opened or read.
    #[error("cannot read {path}: {message}")]
    FileAccess { path: String, message: String },

    /// Internal error (bug or unexpected state).
    #[error("internal error: {message}")]
    Internal { message: String },
}

// ============================================================================
// Error Code Mapping
// ============================================================================

impl From<&ProbeError> for OutputErrorCode {
    fn from(err: &ProbeError) -> Self {
        match err {
            ProbeError::MissingPath => OutputErrorCode::InvalidArguments,
            ProbeError::FileAccess { .. } => OutputErrorCode::FileAccess,
            ProbeError::Internal { .. } => OutputErrorCode::InternalError,
        }
    }
}

impl From<ProbeError> for OutputErrorCode {
    fn from(err: ProbeError) -> Self {
        OutputErrorCode::from(&err)
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl ProbeError {
    /// Create a file access error from an I/O failure.
    pub fn file_access(path: &Path, err: &io::Error) -> Self {
        ProbeError::FileAccess {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ProbeError::Internal {
            message: message.into(),
        }
    }

    /// Get the output code for this error.
    pub fn error_code(&self) -> OutputErrorCode {
        OutputErrorCode::from(self)
    }
}

// ============================================================================
// Tests
// ============================================================================
