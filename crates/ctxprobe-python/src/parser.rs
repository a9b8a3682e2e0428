//! The parser component: Python source to scope nodes.
//!
//! The AST library is an explicit component behind the [`SourceParser`]
//! trait rather than an ambient dependency, so the selection logic in
//! [`crate::analyzer`] is testable against canned scopes. The production
//! implementation ([`AstParser`]) is backed by rustpython-parser.
//!
//! The walk is statement-level: named definitions are statements and can
//! only nest inside statement bodies, so expressions never need visiting.

use ctxprobe_core::text;
use rustpython_parser::{ast, Parse, ParseError};

use crate::types::{LastStmt, ScopeKind, ScopeNode, SyntaxErrorInfo, TrailingStmtKind};

/// Parses source text into the scope nodes the analyzer consumes.
pub trait SourceParser {
    /// Parse `source` and collect every named scope in traversal order,
    /// or report the syntax error that stopped the parse.
    fn scopes(&self, source: &str) -> Result<Vec<ScopeNode>, SyntaxErrorInfo>;
}

/// Production parser backed by rustpython-parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct AstParser;

impl AstParser {
    pub fn new() -> Self {
        AstParser
    }
}

impl SourceParser for AstParser {
    fn scopes(&self, source: &str) -> Result<Vec<ScopeNode>, SyntaxErrorInfo> {
        let suite = ast::Suite::parse(source, "<source>")
            .map_err(|err| syntax_error_info(source, &err))?;

        let mut scopes = Vec::new();
        collect_scopes(source, &suite, &mut scopes);
        Ok(scopes)
    }
}

// ============================================================================
// Error Conversion
// ============================================================================

/// Convert a parse error into caller coordinates.
fn syntax_error_info(source: &str, err: &ParseError) -> SyntaxErrorInfo {
    let offset = u32::from(err.offset) as usize;
    let (line, col) = text::offset_to_position(source, offset);
    SyntaxErrorInfo {
        line,
        col,
        message: err.error.to_string(),
    }
}

// ============================================================================
// Statement Walk
// ============================================================================

/// Collect named scopes from a statement list, depth-first.
fn collect_scopes(source: &str, body: &[ast::Stmt], out: &mut Vec<ScopeNode>) {
    for stmt in body {
        match stmt {
            ast::Stmt::FunctionDef(def) => {
                out.push(scope_node(
                    source,
                    ScopeKind::Function,
                    def.name.as_str(),
                    u32::from(def.range.start()) as usize,
                    &def.body,
                ));
                collect_scopes(source, &def.body, out);
            }
            ast::Stmt::AsyncFunctionDef(def) => {
                out.push(scope_node(
                    source,
                    ScopeKind::AsyncFunction,
                    def.name.as_str(),
                    u32::from(def.range.start()) as usize,
                    &def.body,
                ));
                collect_scopes(source, &def.body, out);
            }
            ast::Stmt::ClassDef(def) => {
                out.push(scope_node(
                    source,
                    ScopeKind::Class,
                    def.name.as_str(),
                    u32::from(def.range.start()) as usize,
                    &def.body,
                ));
                collect_scopes(source, &def.body, out);
            }
            ast::Stmt::If(inner) => {
                collect_scopes(source, &inner.body, out);
                collect_scopes(source, &inner.orelse, out);
            }
            ast::Stmt::While(inner) => {
                collect_scopes(source, &inner.body, out);
                collect_scopes(source, &inner.orelse, out);
            }
            ast::Stmt::For(inner) => {
                collect_scopes(source, &inner.body, out);
                collect_scopes(source, &inner.orelse, out);
            }
            ast::Stmt::AsyncFor(inner) => {
                collect_scopes(source, &inner.body, out);
                collect_scopes(source, &inner.orelse, out);
            }
            ast::Stmt::With(inner) => {
                collect_scopes(source, &inner.body, out);
            }
            ast::Stmt::AsyncWith(inner) => {
                collect_scopes(source, &inner.body, out);
            }
            ast::Stmt::Try(inner) => {
                collect_scopes(source, &inner.body, out);
                for handler in &inner.handlers {
                    match handler {
                        ast::ExceptHandler::ExceptHandler(h) => {
                            collect_scopes(source, &h.body, out);
                        }
                    }
                }
                collect_scopes(source, &inner.orelse, out);
                collect_scopes(source, &inner.finalbody, out);
            }
            ast::Stmt::TryStar(inner) => {
                collect_scopes(source, &inner.body, out);
                for handler in &inner.handlers {
                    match handler {
                        ast::ExceptHandler::ExceptHandler(h) => {
                            collect_scopes(source, &h.body, out);
                        }
                    }
                }
                collect_scopes(source, &inner.orelse, out);
                collect_scopes(source, &inner.finalbody, out);
            }
            ast::Stmt::Match(inner) => {
                for case in &inner.cases {
                    collect_scopes(source, &case.body, out);
                }
            }
            _ => {}
        }
    }
}

/// Build a scope node from a definition's name, start offset and body.
fn scope_node(
    source: &str,
    kind: ScopeKind,
    name: &str,
    start_offset: usize,
    body: &[ast::Stmt],
) -> ScopeNode {
    let (start_line, _) = text::offset_to_position(source, start_offset);
    let last_stmt = body.last().map(|stmt| LastStmt {
        kind: trailing_kind(stmt),
        line: stmt_start_line(source, stmt),
    });
    ScopeNode {
        kind,
        name: name.to_owned(),
        start_line,
        last_stmt,
    }
}

/// Classify a statement for end-line derivation.
fn trailing_kind(stmt: &ast::Stmt) -> TrailingStmtKind {
    match stmt {
        ast::Stmt::Expr(_) => TrailingStmtKind::Expression,
        ast::Stmt::Return(_) => TrailingStmtKind::Return,
        ast::Stmt::Pass(_) => TrailingStmtKind::Pass,
        _ => TrailingStmtKind::Other,
    }
}

/// First line of a statement, 1-indexed.
fn stmt_start_line(source: &str, stmt: &ast::Stmt) -> u32 {
    use rustpython_parser::ast::Ranged;

    let offset = u32::from(stmt.start()) as usize;
    text::offset_to_position(source, offset).0
}

// ============================================================================
// Tests
// ============================================================================
