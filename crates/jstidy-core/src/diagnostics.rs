//! Diagnostic records and the ordered diagnostics collector.
//!
//! A [`Diagnostic`] is a position-tagged, human-readable finding. The
//! [`Diagnostics`] collector is append-only: records keep the order in which
//! the engine discovered them, there is no deduplication and no severity.
//!
//! Records render as `<file>:<line>:<column> - <message>`, which is also the
//! plain-text CLI output format.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Message for a string literal written with double quotes.
pub const SINGLE_QUOTE_MESSAGE: &str = "no using single quote";

/// Message for a removed top-level console call.
pub const CONSOLE_LOG_MESSAGE: &str = "unnecessary console.log";

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Display name of the file the finding belongs to.
    pub file: String,
    /// Line (or, for offset-based findings, the first offset).
    pub line: u64,
    /// Column (or, for offset-based findings, the second offset).
    pub column: u64,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(
        file: impl Into<String>,
        line: u64,
        column: u64,
        message: impl Into<String>,
    ) -> Self {
        Diagnostic {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a diagnostic at a node's start position.
    pub fn at(file: impl Into<String>, position: Position, message: impl Into<String>) -> Self {
        Diagnostic::new(
            file,
            u64::from(position.line),
            u64::from(position.column),
            message,
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{} - {}",
            self.file, self.line, self.column, self.message
        )
    }
}

/// Append-only, ordered list of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.records.push(diagnostic);
    }

    /// All diagnostics in discovery order.
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.records
    }

    /// Iterate in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the collector, returning the records.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.records
    }

    /// Render every record on its own line.
    pub fn render(&self) -> String {
        self.records
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let d = Diagnostic::new("app.js", 3, 8, SINGLE_QUOTE_MESSAGE);
        assert_eq!(d.to_string(), "app.js:3:8 - no using single quote");
    }

    #[test]
    fn at_uses_line_and_column() {
        let d = Diagnostic::at("a.js", Position::new(2, 4, 17), "msg");
        assert_eq!((d.line, d.column), (2, 4));
    }

    #[test]
    fn keeps_discovery_order_and_duplicates() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::new("a.js", 5, 0, "second"));
        diags.push(Diagnostic::new("a.js", 1, 0, "first"));
        diags.push(Diagnostic::new("a.js", 1, 0, "first"));
        let messages: Vec<_> = diags.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first", "first"]);
        assert_eq!(diags.len(), 3);
    }

    #[test]
    fn render_joins_lines() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::new("a.js", 1, 1, "x"));
        diags.push(Diagnostic::new("a.js", 2, 2, "y"));
        assert_eq!(diags.render(), "a.js:1:1 - x\na.js:2:2 - y");
        assert_eq!(Diagnostics::new().render(), "");
    }

    #[test]
    fn serializes_all_fields() {
        let d = Diagnostic::new("a.js", 1, 2, "m");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"file": "a.js", "line": 1, "column": 2, "message": "m"})
        );
    }
}
