//! The Analyzer: syntax validation and enclosing-context lookup.
//!
//! Both queries parse the input fresh on every call; nothing is cached or
//! shared. The selection policy of the context lookup is historical and
//! load-bearing (see [`Analyzer::find_enclosing_context`]); callers depend
//! on it, so it is preserved exactly.

use thiserror::Error;
use tracing::debug;

use crate::parser::{AstParser, SourceParser};
use crate::types::SyntaxErrorInfo;

// ============================================================================
// Query Results
// ============================================================================

/// Result of a syntax validation pass.
///
/// `error` is empty exactly when `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxCheck {
    pub valid: bool,
    pub error: String,
}

/// A resolved enclosing scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosingContext {
    pub name: String,
    pub start_line: u32,
    pub end_line: u32,
}

/// Failure outcomes of the enclosing-context lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// No collected scope contains the requested range.
    #[error("No enclosing context found")]
    NotFound,

    /// The source failed to parse.
    #[error("{}", .0.combined_message())]
    Syntax(SyntaxErrorInfo),
}

// ============================================================================
// Analyzer
// ============================================================================

/// Answers the two queries over one parser component.
///
/// Generic over [`SourceParser`] so the selection logic can be exercised
/// against canned scopes; `Analyzer::new()` wires in the production
/// rustpython-backed parser.
pub struct Analyzer<P = AstParser> {
    parser: P,
}

impl Analyzer<AstParser> {
    pub fn new() -> Self {
        Analyzer {
            parser: AstParser::new(),
        }
    }
}

impl Default for Analyzer<AstParser> {
    fn default() -> Self {
        Analyzer::new()
    }
}

impl<P: SourceParser> Analyzer<P> {
    /// Create an analyzer over an explicit parser component.
    pub fn with_parser(parser: P) -> Self {
        Analyzer { parser }
    }

    /// Syntax validation ("dry run"): parse and report, never fail.
    pub fn check_syntax(&self, source: &str) -> SyntaxCheck {
        match self.parser.scopes(source) {
            Ok(_) => {
                debug!("syntax check passed");
                SyntaxCheck {
                    valid: true,
                    error: String::new(),
                }
            }
            Err(err) => {
                debug!(line = err.line, col = err.col, "syntax check failed");
                SyntaxCheck {
                    valid: false,
                    error: err.combined_message(),
                }
            }
        }
    }

    /// Find the scope containing `[line_start, line_end]` (1-indexed,
    /// inclusive).
    ///
    /// A scope is a candidate when `start_line <= line_start` and its
    /// derived end line is `>= line_end`. Among candidates, the one with the
    /// **largest** span wins: for nested matches the outermost scope is
    /// returned, not the innermost. The running best starts at zero and is
    /// only replaced by a strictly larger span, so on equal spans the
    /// earlier node in traversal order is kept and a zero-span candidate
    /// (a one-line definition) is never selected.
    pub fn find_enclosing_context(
        &self,
        source: &str,
        line_start: u32,
        line_end: u32,
    ) -> Result<EnclosingContext, ContextError> {
        let scopes = self.parser.scopes(source).map_err(ContextError::Syntax)?;

        let mut largest_size = 0u32;
        let mut best: Option<EnclosingContext> = None;

        for scope in &scopes {
            let end_line = scope.effective_end_line();
            if scope.start_line <= line_start && end_line >= line_end {
                let size = end_line - scope.start_line;
                if size > largest_size {
                    largest_size = size;
                    best = Some(EnclosingContext {
                        name: scope.name.clone(),
                        start_line: scope.start_line,
                        end_line,
                    });
                }
            }
        }

        match best {
            Some(context) => {
                debug!(
                    name = %context.name,
                    start_line = context.start_line,
                    end_line = context.end_line,
                    "selected enclosing scope"
                );
                Ok(context)
            }
            None => {
                debug!(line_start, line_end, "no enclosing scope contains the range");
                Err(ContextError::NotFound)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
