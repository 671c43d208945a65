//! Top-level console call removal.
//!
//! Runs before the tree walk. Every top-level statement of the form
//! `<ident>.<member>(...)`, where `<ident>` is the configured console
//! identifier, is reported and dropped from the program body. Before a call
//! is dropped, the rule for its first argument's own kind runs once, so a
//! quoted string argument is still reported. The argument's children are
//! not visited; the statement is gone by the time the walk starts.
//!
//! Calls nested anywhere else (inside functions, blocks, or expressions) are
//! left alone.

use jstidy_core::diagnostics::{Diagnostic, CONSOLE_LOG_MESSAGE};
use jstidy_estree::nodes::{CallExpression, Expression, Located, Program, Statement};
use jstidy_estree::visitor::dispatch_expression;

use super::rules::RuleTable;

/// Match `<identifier>.<member>(...)` as a whole statement.
///
/// Returns the offset of the callee's object identifier and the call.
fn console_call<'a>(
    stmt: &'a mut Statement,
    identifier: &str,
) -> Option<(u64, &'a mut CallExpression)> {
    let Statement::Expression(node) = stmt else {
        return None;
    };
    let Expression::Call(call) = &mut node.expression else {
        return None;
    };
    let Expression::Member(member) = &call.callee else {
        return None;
    };
    let object = member.object.as_identifier()?;
    if object.name != identifier {
        return None;
    }
    let offset = object.start.offset;
    Some((offset, &mut **call))
}

/// Remove top-level console calls from `program`, reporting each one.
///
/// Diagnostics use 1-based offsets: the statement's start offset plus one,
/// then the callee object's start offset plus one. Returns the number of
/// statements removed.
pub fn strip_console_calls(
    program: &mut Program,
    identifier: &str,
    rules: &mut RuleTable<'_>,
) -> usize {
    let before = program.body.len();
    program.body.retain_mut(|stmt| {
        let stmt_offset = stmt.start().offset;
        let Some((object_offset, call)) = console_call(stmt, identifier) else {
            return true;
        };
        let diagnostic = Diagnostic::new(
            rules.file(),
            stmt_offset + 1,
            object_offset + 1,
            CONSOLE_LOG_MESSAGE,
        );
        rules.report(diagnostic);
        if let Some(first) = call.arguments.first_mut() {
            dispatch_expression(rules, first);
        }
        false
    });
    let removed = before - program.body.len();
    if removed > 0 {
        tracing::debug!(removed, "stripped top-level console calls");
    }
    removed
}
