//! Domain types for Python scope analysis.

use serde::Serialize;

/// Kind of a named scope definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Function,
    AsyncFunction,
    Class,
}

/// Kind of the last statement in a scope body, as far as end-line
/// derivation cares.
///
/// Only expression, return and pass statements extend a scope past its
/// declaration line; everything else collapses to [`TrailingStmtKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingStmtKind {
    Expression,
    Return,
    Pass,
    Other,
}

/// The last statement of a scope body: its kind and its first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastStmt {
    pub kind: TrailingStmtKind,
    /// 1-indexed line where the statement starts.
    pub line: u32,
}

/// A named scope (function, async function, or class) collected from a
/// parsed module.
///
/// The end line is never stored; it is derived on demand by
/// [`ScopeNode::effective_end_line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeNode {
    pub kind: ScopeKind,
    pub name: String,
    /// 1-indexed line of the `def` / `class` keyword.
    pub start_line: u32,
    /// Last statement of the body, if the body is non-empty.
    pub last_stmt: Option<LastStmt>,
}

impl ScopeNode {
    /// Derive the end line of this scope.
    ///
    /// Only a trailing expression, return or pass statement extends the
    /// scope: its first line becomes the end line. Any other trailing kind
    /// (assignment, loop, nested definition, ...) leaves the end line equal
    /// to the declaration line, understating the true span. This mirrors
    /// the historical behavior the callers depend on; do not widen it.
    pub fn effective_end_line(&self) -> u32 {
        match self.last_stmt {
            Some(last)
                if matches!(
                    last.kind,
                    TrailingStmtKind::Expression | TrailingStmtKind::Return | TrailingStmtKind::Pass
                ) =>
            {
                last.line
            }
            _ => self.start_line,
        }
    }
}

/// A parse failure, positioned in caller coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxErrorInfo {
    /// 1-indexed line of the failure.
    pub line: u32,
    /// 1-indexed column of the failure.
    pub col: u32,
    /// Parser description of the failure.
    pub message: String,
}

impl SyntaxErrorInfo {
    /// Human-readable message combining description, line and column.
    pub fn combined_message(&self) -> String {
        format!("{} (line {}, column {})", self.message, self.line, self.col)
    }
}

// ============================================================================
// Tests
// ============================================================================
