// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Syntax tree node types.
//!
//! The tree mirrors the ESTree shape for a closed set of node kinds
//! ([`NodeKind`]). Every node records its source [`Span`] and the
//! [`Position`] of its first character.
//!
//! Nodes of any other kind are kept as [`UnknownNode`]s: they remember their
//! ESTree type, their span, and every recognisable child node found among
//! their fields, so traversal still reaches (and rules still rewrite) code
//! nested inside constructs the model does not cover, such as classes or
//! template literals.
//!
//! # Node Identity
//!
//! [`NodeId`]s are handed out in pre-order during loading. Only variable
//! declarations carry one: they are the nodes later passes need to find
//! again after a full traversal.

mod expression;
mod kind;
mod statement;

pub use expression::*;
pub use kind::{is_statement_type, NodeKind};
pub use statement::*;

pub use jstidy_core::types::{Position, Span};

// ============================================================================
// Node Identity
// ============================================================================

/// A stable identifier for a node, assigned in pre-order during loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new NodeId with the given value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

// ============================================================================
// Location Accessors
// ============================================================================

/// Source location accessors shared by every node type.
pub trait Located {
    /// Byte span of the node in the source text.
    fn span(&self) -> Span;
    /// Start position of the node.
    fn start(&self) -> Position;
}

macro_rules! impl_located {
    ( $( $node:ty ),* $(,)? ) => {
        $(
            impl Located for $node {
                fn span(&self) -> Span {
                    self.span
                }
                fn start(&self) -> Position {
                    self.start
                }
            }
        )*
    };
}

// ============================================================================
// Program
// ============================================================================

/// Whether the program was parsed as a script or an ES module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceType {
    #[default]
    Script,
    Module,
}

/// Root of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Top-level statements in source order.
    pub body: Vec<Statement>,
    pub source_type: SourceType,
    pub span: Span,
    pub start: Position,
}

// ============================================================================
// Unknown Nodes
// ============================================================================

/// A node whose kind is outside the modelled set, or whose fields were too
/// malformed to load as its declared kind.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownNode {
    /// The ESTree `type` string (empty if the object had none).
    pub kind: String,
    /// Recognised child nodes, ordered by source offset.
    pub children: Vec<Child>,
    pub span: Span,
    pub start: Position,
}

/// A child of an [`UnknownNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Statement(Statement),
    Expression(Expression),
}

impl Child {
    /// Byte span of the child.
    pub fn span(&self) -> Span {
        match self {
            Child::Statement(s) => s.span(),
            Child::Expression(e) => e.span(),
        }
    }
}

impl_located!(
    Program,
    UnknownNode,
    // Statements
    ExpressionStatement,
    VariableDeclaration,
    VariableDeclarator,
    Function,
    ReturnStatement,
    IfStatement,
    BlockStatement,
    ForStatement,
    ForInStatement,
    WhileStatement,
    DoWhileStatement,
    JumpStatement,
    ThrowStatement,
    TryStatement,
    CatchClause,
    SwitchStatement,
    SwitchCase,
    EmptyStatement,
    // Expressions
    Identifier,
    Literal,
    ThisExpression,
    ArrayExpression,
    ObjectExpression,
    Property,
    SpreadElement,
    ArrowFunction,
    UnaryExpression,
    UpdateExpression,
    BinaryExpression,
    AssignmentExpression,
    ConditionalExpression,
    CallExpression,
    NewExpression,
    MemberExpression,
    SequenceExpression,
);
