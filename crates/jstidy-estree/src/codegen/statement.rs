// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Statement emission.
//!
//! `emit_statement` writes a statement without its leading indentation or
//! trailing newline; the caller owns the line. Nested lines (block bodies,
//! switch cases) are indented from the state's current level.

use super::expression::{emit_function, starts_ambiguously, PREC_ASSIGN};
use super::{emit_expression, emit_unknown, Codegen, CodegenState, PREC_LOWEST};
use crate::nodes::{BlockStatement, ForHead, ForInStatement, Statement, VariableDeclaration};

pub(crate) fn emit_statement(stmt: &Statement, state: &mut CodegenState<'_>) {
    match stmt {
        Statement::Expression(node) => {
            if starts_ambiguously(&node.expression) {
                state.add_token("(");
                emit_expression(&node.expression, PREC_LOWEST, state);
                state.add_token(")");
            } else {
                emit_expression(&node.expression, PREC_LOWEST, state);
            }
            state.add_token(";");
        }
        Statement::VariableDeclaration(node) => {
            emit_declaration(node, state);
            state.add_token(";");
        }
        Statement::FunctionDeclaration(node) => emit_function(node, state),
        Statement::Return(node) => {
            state.add_token("return");
            if let Some(argument) = &node.argument {
                state.add_token(" ");
                emit_expression(argument, PREC_LOWEST, state);
            }
            state.add_token(";");
        }
        Statement::If(node) => {
            state.add_token("if (");
            emit_expression(&node.test, PREC_LOWEST, state);
            state.add_token(")");
            let ended_with_brace = emit_body(&node.consequent, state);
            if let Some(alternate) = &node.alternate {
                if ended_with_brace {
                    state.add_token(" else");
                } else {
                    state.add_newline();
                    state.add_indent();
                    state.add_token("else");
                }
                if matches!(**alternate, Statement::If(_)) {
                    state.add_token(" ");
                    emit_statement(alternate, state);
                } else {
                    emit_body(alternate, state);
                }
            }
        }
        Statement::Block(node) => emit_block(node, state),
        Statement::For(node) => {
            state.add_token("for (");
            if let Some(init) = &node.init {
                emit_for_head(init, state);
            }
            state.add_token(";");
            if let Some(test) = &node.test {
                state.add_token(" ");
                emit_expression(test, PREC_LOWEST, state);
            }
            state.add_token(";");
            if let Some(update) = &node.update {
                state.add_token(" ");
                emit_expression(update, PREC_LOWEST, state);
            }
            state.add_token(")");
            emit_body(&node.body, state);
        }
        Statement::ForIn(node) => emit_for_in(node, "in", state),
        Statement::ForOf(node) => emit_for_in(node, "of", state),
        Statement::While(node) => {
            state.add_token("while (");
            emit_expression(&node.test, PREC_LOWEST, state);
            state.add_token(")");
            emit_body(&node.body, state);
        }
        Statement::DoWhile(node) => {
            state.add_token("do");
            if emit_body(&node.body, state) {
                state.add_token(" ");
            } else {
                state.add_newline();
                state.add_indent();
            }
            state.add_token("while (");
            emit_expression(&node.test, PREC_LOWEST, state);
            state.add_token(");");
        }
        Statement::Break(node) | Statement::Continue(node) => {
            state.add_token(if matches!(stmt, Statement::Break(_)) {
                "break"
            } else {
                "continue"
            });
            if let Some(label) = &node.label {
                state.add_token(" ");
                label.codegen(state);
            }
            state.add_token(";");
        }
        Statement::Throw(node) => {
            state.add_token("throw ");
            emit_expression(&node.argument, PREC_LOWEST, state);
            state.add_token(";");
        }
        Statement::Try(node) => {
            state.add_token("try ");
            emit_block(&node.block, state);
            if let Some(handler) = &node.handler {
                state.add_token(" catch ");
                if let Some(param) = &handler.param {
                    state.add_token("(");
                    emit_expression(param, PREC_LOWEST, state);
                    state.add_token(") ");
                }
                emit_block(&handler.body, state);
            }
            if let Some(finalizer) = &node.finalizer {
                state.add_token(" finally ");
                emit_block(finalizer, state);
            }
        }
        Statement::Switch(node) => {
            state.add_token("switch (");
            emit_expression(&node.discriminant, PREC_LOWEST, state);
            state.add_token(") {");
            state.add_newline();
            state.indent();
            for case in &node.cases {
                state.add_indent();
                match &case.test {
                    Some(test) => {
                        state.add_token("case ");
                        emit_expression(test, PREC_LOWEST, state);
                        state.add_token(":");
                    }
                    None => state.add_token("default:"),
                }
                state.add_newline();
                state.indent();
                for stmt in &case.consequent {
                    stmt.codegen(state);
                }
                state.dedent();
            }
            state.dedent();
            state.add_indent();
            state.add_token("}");
        }
        Statement::Empty(_) => state.add_token(";"),
        Statement::Unknown(node) => emit_unknown(node, state),
    }
}

/// `{`, each statement on its own indented line, `}`.
pub(crate) fn emit_block(block: &BlockStatement, state: &mut CodegenState<'_>) {
    if block.body.is_empty() {
        state.add_token("{}");
        return;
    }
    state.add_token("{");
    state.add_newline();
    state.indent();
    for stmt in &block.body {
        stmt.codegen(state);
    }
    state.dedent();
    state.add_indent();
    state.add_token("}");
}

/// `kind a = 1, b`, with no semicolon.
pub(crate) fn emit_declaration(decl: &VariableDeclaration, state: &mut CodegenState<'_>) {
    state.add_token(decl.kind.as_str());
    for (i, declarator) in decl.declarations.iter().enumerate() {
        state.add_token(if i == 0 { " " } else { ", " });
        emit_expression(&declarator.id, PREC_LOWEST, state);
        if let Some(init) = &declarator.init {
            state.add_token(" = ");
            emit_expression(init, PREC_ASSIGN, state);
        }
    }
}

/// Emit the body of a compound statement. Returns true if the output ended
/// with a closing brace on the statement's own line.
fn emit_body(body: &Statement, state: &mut CodegenState<'_>) -> bool {
    match body {
        Statement::Block(block) => {
            state.add_token(" ");
            emit_block(block, state);
            true
        }
        Statement::Empty(_) => {
            state.add_token(";");
            false
        }
        other => {
            state.add_newline();
            state.indent();
            other.codegen(state);
            state.dedent();
            // codegen ended the line; step back so the caller owns it.
            if state.tokens.ends_with(state.default_newline) {
                let keep = state.tokens.len() - state.default_newline.len();
                state.tokens.truncate(keep);
            }
            false
        }
    }
}

fn emit_for_head(head: &ForHead, state: &mut CodegenState<'_>) {
    match head {
        ForHead::Declaration(decl) => emit_declaration(decl, state),
        ForHead::Expression(expr) => emit_expression(expr, PREC_LOWEST, state),
    }
}

fn emit_for_in(node: &ForInStatement, keyword: &str, state: &mut CodegenState<'_>) {
    state.add_token("for ");
    if node.is_await {
        state.add_token("await ");
    }
    state.add_token("(");
    emit_for_head(&node.left, state);
    state.add_token(" ");
    state.add_token(keyword);
    state.add_token(" ");
    emit_expression(&node.right, PREC_LOWEST, state);
    state.add_token(")");
    emit_body(&node.body, state);
}
