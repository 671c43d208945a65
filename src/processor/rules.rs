//! The rule dispatch table.
//!
//! [`RuleTable`] is the visitor the tree walker drives. Each hook is the rule
//! for one node kind:
//!
//! | Kind                   | Rule                                             |
//! |------------------------|--------------------------------------------------|
//! | `Literal`              | quote normalization (reported)                   |
//! | `VariableDeclaration`  | `var` to `let`, then declaration usage recording |
//! | `AssignmentExpression` | assignment usage recording                       |
//! | `ExpressionStatement`  | pass-through                                     |
//!
//! Every other kind falls through to the trait's default no-op hooks.

use jstidy_core::diagnostics::{Diagnostic, Diagnostics, SINGLE_QUOTE_MESSAGE};
use jstidy_estree::nodes::{
    AssignmentExpression, DeclarationKind, ExpressionStatement, Literal, VariableDeclaration,
};
use jstidy_estree::visitor::{VisitResult, VisitorMut};

use super::usage::UsageTracker;

/// Context threaded through the walk: where findings go and what has been
/// counted so far.
pub struct RuleTable<'a> {
    file: &'a str,
    diagnostics: &'a mut Diagnostics,
    usage: &'a mut UsageTracker,
}

impl<'a> RuleTable<'a> {
    pub fn new(
        file: &'a str,
        diagnostics: &'a mut Diagnostics,
        usage: &'a mut UsageTracker,
    ) -> Self {
        Self {
            file,
            diagnostics,
            usage,
        }
    }

    pub fn file(&self) -> &str {
        self.file
    }

    /// Append a finding.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        tracing::trace!(%diagnostic, "reported");
        self.diagnostics.push(diagnostic);
    }
}

/// Rewrite a literal's raw text to single quotes if it qualifies.
///
/// A literal qualifies when its raw text is non-empty and starts with `"` or
/// ends with `'`. Every `"` in the raw text becomes `'`; nothing is
/// re-escaped. Returns true if the literal qualified.
pub fn normalize_quotes(literal: &mut Literal) -> bool {
    let Some(raw) = literal.raw.as_mut() else {
        return false;
    };
    if raw.is_empty() || !(raw.starts_with('"') || raw.ends_with('\'')) {
        return false;
    }
    *raw = raw.replace('"', "'");
    true
}

/// Downgrade `var` to `let`. Returns true if the kind changed.
pub fn downgrade_var(declaration: &mut VariableDeclaration) -> bool {
    if declaration.kind == DeclarationKind::Var {
        declaration.kind = DeclarationKind::Let;
        true
    } else {
        false
    }
}

impl VisitorMut for RuleTable<'_> {
    fn visit_literal(&mut self, node: &mut Literal) -> VisitResult {
        if normalize_quotes(node) {
            let diagnostic = Diagnostic::at(self.file, node.start, SINGLE_QUOTE_MESSAGE);
            self.report(diagnostic);
        }
        VisitResult::Continue
    }

    fn visit_variable_declaration(&mut self, node: &mut VariableDeclaration) -> VisitResult {
        if downgrade_var(node) {
            tracing::trace!(node = %node.id, "var -> let");
        }
        // Destructuring or empty declarations are not counted.
        if let Some(name) = node.first_name() {
            self.usage.record_declaration(name, node.id);
        }
        VisitResult::Continue
    }

    fn visit_assignment(&mut self, node: &mut AssignmentExpression) -> VisitResult {
        if let Some(target) = node.left.as_identifier() {
            self.usage.record_assignment(&target.name);
        }
        VisitResult::Continue
    }

    fn visit_expression_statement(&mut self, _node: &mut ExpressionStatement) -> VisitResult {
        VisitResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jstidy_estree::nodes::{LiteralValue, Position, Span};

    fn literal(raw: &str) -> Literal {
        Literal {
            value: LiteralValue::String(String::new()),
            raw: Some(raw.to_string()),
            span: Span::default(),
            start: Position::new(3, 8, 40),
        }
    }

    #[test]
    fn double_quoted_literal_is_rewritten() {
        let mut lit = literal("\"hi\"");
        assert!(normalize_quotes(&mut lit));
        assert_eq!(lit.raw.as_deref(), Some("'hi'"));
    }

    #[test]
    fn single_quoted_literal_qualifies_but_is_unchanged() {
        let mut lit = literal("'hi'");
        assert!(normalize_quotes(&mut lit));
        assert_eq!(lit.raw.as_deref(), Some("'hi'"));
    }

    #[test]
    fn embedded_quotes_are_not_escaped() {
        let mut lit = literal("\"it's\"");
        assert!(normalize_quotes(&mut lit));
        assert_eq!(lit.raw.as_deref(), Some("'it's'"));
    }

    #[test]
    fn other_literals_do_not_qualify() {
        for raw in ["42", "true", "`t`", ""] {
            let mut lit = literal(raw);
            assert!(!normalize_quotes(&mut lit), "{raw:?}");
            assert_eq!(lit.raw.as_deref(), Some(raw));
        }
        let mut no_raw = literal("");
        no_raw.raw = None;
        assert!(!normalize_quotes(&mut no_raw));
    }

    #[test]
    fn literal_hook_reports_at_start() {
        let mut diagnostics = Diagnostics::new();
        let mut usage = UsageTracker::new();
        let mut rules = RuleTable::new("a.js", &mut diagnostics, &mut usage);
        rules.visit_literal(&mut literal("\"x\""));
        assert_eq!(rules.file(), "a.js");
        assert_eq!(diagnostics.render(), "a.js:3:8 - no using single quote");
    }
}
