// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Statement and declaration nodes.

use super::{Expression, Identifier, Located, NodeId, NodeKind, Position, Span, UnknownNode};

/// A statement or declaration.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expression(ExpressionStatement),
    VariableDeclaration(VariableDeclaration),
    FunctionDeclaration(Function),
    Return(ReturnStatement),
    If(IfStatement),
    Block(BlockStatement),
    For(ForStatement),
    ForIn(ForInStatement),
    ForOf(ForInStatement),
    While(WhileStatement),
    DoWhile(DoWhileStatement),
    Break(JumpStatement),
    Continue(JumpStatement),
    Throw(ThrowStatement),
    Try(TryStatement),
    Switch(SwitchStatement),
    Empty(EmptyStatement),
    Unknown(UnknownNode),
}

impl Statement {
    /// The kind of this statement, or `None` for unknown nodes.
    pub fn kind(&self) -> Option<NodeKind> {
        Some(match self {
            Statement::Expression(_) => NodeKind::ExpressionStatement,
            Statement::VariableDeclaration(_) => NodeKind::VariableDeclaration,
            Statement::FunctionDeclaration(_) => NodeKind::FunctionDeclaration,
            Statement::Return(_) => NodeKind::ReturnStatement,
            Statement::If(_) => NodeKind::IfStatement,
            Statement::Block(_) => NodeKind::BlockStatement,
            Statement::For(_) => NodeKind::ForStatement,
            Statement::ForIn(_) => NodeKind::ForInStatement,
            Statement::ForOf(_) => NodeKind::ForOfStatement,
            Statement::While(_) => NodeKind::WhileStatement,
            Statement::DoWhile(_) => NodeKind::DoWhileStatement,
            Statement::Break(_) => NodeKind::BreakStatement,
            Statement::Continue(_) => NodeKind::ContinueStatement,
            Statement::Throw(_) => NodeKind::ThrowStatement,
            Statement::Try(_) => NodeKind::TryStatement,
            Statement::Switch(_) => NodeKind::SwitchStatement,
            Statement::Empty(_) => NodeKind::EmptyStatement,
            Statement::Unknown(_) => return None,
        })
    }

    /// The ESTree type name, including that of unknown nodes.
    pub fn type_name(&self) -> &str {
        match self {
            Statement::Unknown(u) => &u.kind,
            other => other.kind().map(|k| k.as_str()).unwrap_or_default(),
        }
    }

    fn located(&self) -> &dyn Located {
        match self {
            Statement::Expression(n) => n,
            Statement::VariableDeclaration(n) => n,
            Statement::FunctionDeclaration(n) => n,
            Statement::Return(n) => n,
            Statement::If(n) => n,
            Statement::Block(n) => n,
            Statement::For(n) => n,
            Statement::ForIn(n) | Statement::ForOf(n) => n,
            Statement::While(n) => n,
            Statement::DoWhile(n) => n,
            Statement::Break(n) | Statement::Continue(n) => n,
            Statement::Throw(n) => n,
            Statement::Try(n) => n,
            Statement::Switch(n) => n,
            Statement::Empty(n) => n,
            Statement::Unknown(n) => n,
        }
    }
}

impl Located for Statement {
    fn span(&self) -> Span {
        self.located().span()
    }
    fn start(&self) -> Position {
        self.located().start()
    }
}

/// An expression used as a statement (`foo();`), or a directive prologue
/// entry (`"use strict";`).
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    /// Raw directive text, when this statement is a directive.
    pub directive: Option<String>,
    pub span: Span,
    pub start: Position,
}

/// The declaration keyword of a [`VariableDeclaration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Var,
    Let,
    Const,
}

impl DeclarationKind {
    /// The keyword as written in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Var => "var",
            DeclarationKind::Let => "let",
            DeclarationKind::Const => "const",
        }
    }

    /// Parse a keyword.
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "var" => Some(DeclarationKind::Var),
            "let" => Some(DeclarationKind::Let),
            "const" => Some(DeclarationKind::Const),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `var a = 1, b;`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub id: NodeId,
    pub kind: DeclarationKind,
    pub declarations: Vec<VariableDeclarator>,
    pub span: Span,
    pub start: Position,
}

impl VariableDeclaration {
    /// Name bound by the first declarator, if it binds a plain identifier.
    pub fn first_name(&self) -> Option<&str> {
        match &self.declarations.first()?.id {
            Expression::Identifier(ident) => Some(&ident.name),
            _ => None,
        }
    }
}

/// One `id = init` entry of a declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    /// Binding target: an identifier, or an unknown pattern node.
    pub id: Expression,
    pub init: Option<Expression>,
    pub span: Span,
    pub start: Position,
}

/// A function declaration or expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub id: Option<Identifier>,
    /// Parameters: identifiers, or unknown pattern nodes.
    pub params: Vec<Expression>,
    pub body: BlockStatement,
    pub is_async: bool,
    pub is_generator: bool,
    pub span: Span,
    pub start: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub argument: Option<Expression>,
    pub span: Span,
    pub start: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub test: Expression,
    pub consequent: Box<Statement>,
    pub alternate: Option<Box<Statement>>,
    pub span: Span,
    pub start: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub body: Vec<Statement>,
    pub span: Span,
    pub start: Position,
}

/// Initialiser or left-hand side of a `for` head.
#[derive(Debug, Clone, PartialEq)]
pub enum ForHead {
    Declaration(VariableDeclaration),
    Expression(Expression),
}

/// `for (init; test; update) body`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub init: Option<ForHead>,
    pub test: Option<Expression>,
    pub update: Option<Expression>,
    pub body: Box<Statement>,
    pub span: Span,
    pub start: Position,
}

/// `for (left in right) body` and `for (left of right) body`
#[derive(Debug, Clone, PartialEq)]
pub struct ForInStatement {
    pub left: ForHead,
    pub right: Expression,
    pub body: Box<Statement>,
    /// `for await (... of ...)`
    pub is_await: bool,
    pub span: Span,
    pub start: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub test: Expression,
    pub body: Box<Statement>,
    pub span: Span,
    pub start: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStatement {
    pub body: Box<Statement>,
    pub test: Expression,
    pub span: Span,
    pub start: Position,
}

/// `break` or `continue`, with an optional label.
#[derive(Debug, Clone, PartialEq)]
pub struct JumpStatement {
    pub label: Option<Identifier>,
    pub span: Span,
    pub start: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStatement {
    pub argument: Expression,
    pub span: Span,
    pub start: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryStatement {
    pub block: BlockStatement,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<BlockStatement>,
    pub span: Span,
    pub start: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub param: Option<Expression>,
    pub body: BlockStatement,
    pub span: Span,
    pub start: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    pub discriminant: Expression,
    pub cases: Vec<SwitchCase>,
    pub span: Span,
    pub start: Position,
}

/// `case test: ...` or `default: ...` (no test).
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub test: Option<Expression>,
    pub consequent: Vec<Statement>,
    pub span: Span,
    pub start: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmptyStatement {
    pub span: Span,
    pub start: Position,
}
