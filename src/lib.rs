//! Ctxprobe - Python syntax validation and enclosing-context lookup.
//!
//! This crate provides the CLI binary for ctxprobe.
//!
//! ## Modules
//!
//! - `cli` - CLI command implementations

pub mod cli;

// Re-export core types for convenience
pub use ctxprobe_core::error::{OutputErrorCode, ProbeError};
pub use ctxprobe_core::output::{
    emit_line, EnclosingContextResponse, ErrorBody, SyntaxCheckResponse, SyntaxErrorResponse,
    NO_ENCLOSING_CONTEXT,
};
pub use ctxprobe_python::analyzer::{Analyzer, ContextError, EnclosingContext, SyntaxCheck};
