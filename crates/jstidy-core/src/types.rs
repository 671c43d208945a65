//! Common source-location types shared by the tree, engine and output modules.
//!
//! ## Coordinate Conventions
//!
//! These follow the ESTree `loc` conventions, since every position in a tree
//! comes from an ESTree producer:
//! - Lines are **1-indexed**
//! - Columns are **0-indexed**
//! - Byte offsets are **0-indexed**

use serde::{Deserialize, Serialize};

// ============================================================================
// Span
// ============================================================================

/// A half-open byte range `[start, end)` into the original source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: u64,
    /// End byte offset (exclusive).
    pub end: u64,
}

impl Span {
    /// Create a new span.
    pub fn new(start: u64, end: u64) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns true if `other` lies entirely within this span.
    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Slice `source` by this span.
    ///
    /// Returns `None` if the span falls outside the text or off a char boundary.
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start as usize..self.end as usize)
    }
}

// ============================================================================
// Position
// ============================================================================

/// Start position of a node: line, column and absolute offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (0-indexed).
    pub column: u32,
    /// Offset from file start as reported by the tree producer (0-indexed).
    pub offset: u64,
}

impl Position {
    /// Create a new position.
    pub fn new(line: u32, column: u32, offset: u64) -> Self {
        Position {
            line,
            column,
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_slice_in_bounds() {
        let span = Span::new(4, 7);
        assert_eq!(span.slice("var foo = 1;"), Some("foo"));
        assert_eq!(span.len(), 3);
    }

    #[test]
    fn span_slice_out_of_bounds_is_none() {
        assert_eq!(Span::new(4, 70).slice("var x"), None);
    }

    #[test]
    fn span_contains() {
        let outer = Span::new(0, 10);
        assert!(outer.contains(Span::new(2, 5)));
        assert!(!outer.contains(Span::new(8, 12)));
    }
}
