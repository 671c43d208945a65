// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Code generation: turning a (possibly rewritten) tree back into JavaScript.
//!
//! Output is deterministic: two-space indentation by default, one statement
//! per line, semicolons after simple statements, and parentheses inserted
//! from operator precedence rather than remembered from the input.
//!
//! Literals are emitted from their `raw` text and declarations from their
//! kind tag, so rewrites made by passes over the tree show up in the output.
//!
//! # Unknown Nodes
//!
//! An [`UnknownNode`] is emitted by copying its original source slice with
//! every recognised child's slice replaced by that child's regenerated text.
//! Rewrites inside constructs the tree does not model (a literal inside a
//! class method, say) therefore survive. Without source text an unknown node
//! can only be emitted as a `/* Kind */` placeholder.

mod expression;
mod statement;

use std::fmt;

use crate::nodes::{
    BlockStatement, Child, Expression, Function, Identifier, Literal, Program, Span, Statement,
    UnknownNode, VariableDeclaration,
};

pub(crate) use expression::{emit_expression, emit_function, emit_function_tail, PREC_LOWEST};
pub(crate) use statement::{emit_block, emit_declaration, emit_statement};

/// Implemented by every node that can be written back out as source.
pub trait Codegen {
    fn codegen(&self, state: &mut CodegenState<'_>);
}

/// Output buffer and indentation state threaded through code generation.
#[derive(Debug, Clone)]
pub struct CodegenState<'a> {
    pub tokens: String,
    pub indent_tokens: Vec<&'a str>,
    pub default_newline: &'a str,
    pub default_indent: &'a str,
    /// Original source text, used to emit unknown nodes.
    pub source: Option<&'a str>,
}

impl Default for CodegenState<'_> {
    fn default() -> Self {
        Self {
            tokens: String::new(),
            indent_tokens: Vec::new(),
            default_newline: "\n",
            default_indent: "  ",
            source: None,
        }
    }
}

impl<'a> CodegenState<'a> {
    pub fn new(source: Option<&'a str>) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    /// Use `indent` for each nesting level instead of two spaces.
    pub fn with_indent(mut self, indent: &'a str) -> Self {
        self.default_indent = indent;
        self
    }

    /// A fresh buffer sharing this state's settings, at indentation zero.
    pub fn fork(&self) -> Self {
        Self {
            tokens: String::new(),
            indent_tokens: Vec::new(),
            default_newline: self.default_newline,
            default_indent: self.default_indent,
            source: self.source,
        }
    }

    pub fn indent(&mut self) {
        self.indent_tokens.push(self.default_indent);
    }

    pub fn dedent(&mut self) {
        self.indent_tokens.pop();
    }

    pub fn add_indent(&mut self) {
        for token in &self.indent_tokens {
            self.tokens.push_str(token);
        }
    }

    pub fn add_newline(&mut self) {
        self.tokens.push_str(self.default_newline);
    }

    pub fn add_token(&mut self, token: &str) {
        self.tokens.push_str(token);
    }
}

impl fmt::Display for CodegenState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens)
    }
}

/// Generate source text for a whole program.
///
/// `source` is the text the tree was loaded from; it is only consulted for
/// unknown nodes.
pub fn generate(program: &Program, source: Option<&str>) -> String {
    let mut state = CodegenState::new(source);
    program.codegen(&mut state);
    state.tokens
}

/// Like [`generate`], with a custom indentation unit.
pub fn generate_with_indent(program: &Program, source: Option<&str>, indent: &str) -> String {
    let mut state = CodegenState::new(source).with_indent(indent);
    program.codegen(&mut state);
    state.tokens
}

// ============================================================================
// Codegen impls
// ============================================================================

impl Codegen for Program {
    fn codegen(&self, state: &mut CodegenState<'_>) {
        for stmt in &self.body {
            stmt.codegen(state);
        }
    }
}

/// A statement is emitted as a full line: indentation, text, newline.
impl Codegen for Statement {
    fn codegen(&self, state: &mut CodegenState<'_>) {
        state.add_indent();
        emit_statement(self, state);
        state.add_newline();
    }
}

impl Codegen for BlockStatement {
    fn codegen(&self, state: &mut CodegenState<'_>) {
        emit_block(self, state);
    }
}

/// Emitted without a trailing semicolon, as in a `for` head.
impl Codegen for VariableDeclaration {
    fn codegen(&self, state: &mut CodegenState<'_>) {
        emit_declaration(self, state);
    }
}

impl Codegen for Expression {
    fn codegen(&self, state: &mut CodegenState<'_>) {
        emit_expression(self, PREC_LOWEST, state);
    }
}

impl Codegen for Function {
    fn codegen(&self, state: &mut CodegenState<'_>) {
        emit_function(self, state);
    }
}

impl Codegen for Identifier {
    fn codegen(&self, state: &mut CodegenState<'_>) {
        state.add_token(&self.name);
    }
}

impl Codegen for Literal {
    fn codegen(&self, state: &mut CodegenState<'_>) {
        expression::emit_literal(self, state);
    }
}

impl Codegen for UnknownNode {
    fn codegen(&self, state: &mut CodegenState<'_>) {
        emit_unknown(self, state);
    }
}

// ============================================================================
// Unknown node splicing
// ============================================================================

pub(crate) fn emit_unknown(node: &UnknownNode, state: &mut CodegenState<'_>) {
    let source = match state.source {
        Some(source) if !node.span.is_empty() && node.span.slice(source).is_some() => source,
        _ => {
            state.add_token(&format!("/* {} */", node.kind));
            return;
        }
    };

    let mut cursor = node.span.start;
    for child in &node.children {
        let span = child.span();
        if span.is_empty() || span.start < cursor || span.end > node.span.end {
            continue;
        }
        let Some(gap) = source.get(cursor as usize..span.start as usize) else {
            continue;
        };
        state.add_token(gap);

        let mut sub = state.fork();
        match child {
            Child::Statement(stmt) => emit_statement(stmt, &mut sub),
            // A method's function value starts at its parameter list.
            Child::Expression(Expression::Function(func)) if !starts_with_keyword(span, source) => {
                emit_function_tail(func, &mut sub)
            }
            Child::Expression(expr) => emit_expression(expr, PREC_LOWEST, &mut sub),
        }
        state.add_token(&sub.tokens);
        cursor = span.end;
    }
    if let Some(tail) = source.get(cursor as usize..node.span.end as usize) {
        state.add_token(tail);
    }
}

/// Whether the source text at `span` opens with a function keyword.
fn starts_with_keyword(span: Span, source: &str) -> bool {
    span.slice(source)
        .is_some_and(|text| text.starts_with("function") || text.starts_with("async"))
}
