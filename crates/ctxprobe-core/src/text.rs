//! Text position utilities for byte offset to line:column conversions.
//!
//! ## Coordinate Conventions
//!
//! - Lines and columns are **1-indexed** (matching editor conventions)
//! - Byte offsets are **0-indexed**
//! - Columns count Unicode scalar values, not bytes
//!
//! Parsers report failure positions as byte offsets into the UTF-8 source;
//! the caller contract speaks in 1-indexed line/column pairs. These helpers
//! bridge the two.

// ============================================================================
// Offset Conversion
// ============================================================================

/// Convert a byte offset to a 1-indexed `(line, col)` pair.
///
/// Columns count Unicode scalar values (chars), which is what user-facing
/// positions want. An offset past the end of `content` resolves to the
/// position just after the final character.
pub fn offset_to_position(content: &str, offset: usize) -> (u32, u32) {
    let mut line = 1u32;
    let mut col = 1u32;
    let mut consumed = 0usize;

    for ch in content.chars() {
        if consumed >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
        consumed += ch.len_utf8();
    }

    (line, col)
}

// ============================================================================
// Line Utilities
// ============================================================================

/// Count the number of lines in the content.
///
/// A trailing newline does not start a new line; empty content has zero.
pub fn line_count(content: &str) -> u32 {
    let newlines = content.bytes().filter(|&b| b == b'\n').count() as u32;
    if content.is_empty() {
        0
    } else if content.ends_with('\n') {
        newlines
    } else {
        newlines + 1
    }
}

// ============================================================================
// Tests
// ============================================================================
