// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Expression nodes.

use super::{BlockStatement, Function, Located, NodeKind, Position, Span, UnknownNode};

/// An expression.
///
/// Binding patterns that the model does not cover (destructuring, defaults,
/// rest elements) also appear here as [`Expression::Unknown`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
    This(ThisExpression),
    Array(ArrayExpression),
    Object(ObjectExpression),
    Spread(SpreadElement),
    Function(Box<Function>),
    Arrow(Box<ArrowFunction>),
    Unary(Box<UnaryExpression>),
    Update(Box<UpdateExpression>),
    Binary(Box<BinaryExpression>),
    Logical(Box<BinaryExpression>),
    Assignment(Box<AssignmentExpression>),
    Conditional(Box<ConditionalExpression>),
    Call(Box<CallExpression>),
    New(Box<NewExpression>),
    Member(Box<MemberExpression>),
    Sequence(SequenceExpression),
    Unknown(UnknownNode),
}

impl Expression {
    /// The kind of this expression, or `None` for unknown nodes.
    pub fn kind(&self) -> Option<NodeKind> {
        Some(match self {
            Expression::Identifier(_) => NodeKind::Identifier,
            Expression::Literal(_) => NodeKind::Literal,
            Expression::This(_) => NodeKind::ThisExpression,
            Expression::Array(_) => NodeKind::ArrayExpression,
            Expression::Object(_) => NodeKind::ObjectExpression,
            Expression::Spread(_) => NodeKind::SpreadElement,
            Expression::Function(_) => NodeKind::FunctionExpression,
            Expression::Arrow(_) => NodeKind::ArrowFunctionExpression,
            Expression::Unary(_) => NodeKind::UnaryExpression,
            Expression::Update(_) => NodeKind::UpdateExpression,
            Expression::Binary(_) => NodeKind::BinaryExpression,
            Expression::Logical(_) => NodeKind::LogicalExpression,
            Expression::Assignment(_) => NodeKind::AssignmentExpression,
            Expression::Conditional(_) => NodeKind::ConditionalExpression,
            Expression::Call(_) => NodeKind::CallExpression,
            Expression::New(_) => NodeKind::NewExpression,
            Expression::Member(_) => NodeKind::MemberExpression,
            Expression::Sequence(_) => NodeKind::SequenceExpression,
            Expression::Unknown(_) => return None,
        })
    }

    /// The ESTree type name, including that of unknown nodes.
    pub fn type_name(&self) -> &str {
        match self {
            Expression::Unknown(u) => &u.kind,
            other => other.kind().map(|k| k.as_str()).unwrap_or_default(),
        }
    }

    /// The identifier, if this expression is a bare identifier.
    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Expression::Identifier(ident) => Some(ident),
            _ => None,
        }
    }

    fn located(&self) -> &dyn Located {
        match self {
            Expression::Identifier(n) => n,
            Expression::Literal(n) => n,
            Expression::This(n) => n,
            Expression::Array(n) => n,
            Expression::Object(n) => n,
            Expression::Spread(n) => n,
            Expression::Function(n) => &**n,
            Expression::Arrow(n) => &**n,
            Expression::Unary(n) => &**n,
            Expression::Update(n) => &**n,
            Expression::Binary(n) | Expression::Logical(n) => &**n,
            Expression::Assignment(n) => &**n,
            Expression::Conditional(n) => &**n,
            Expression::Call(n) => &**n,
            Expression::New(n) => &**n,
            Expression::Member(n) => &**n,
            Expression::Sequence(n) => n,
            Expression::Unknown(n) => n,
        }
    }
}

impl Located for Expression {
    fn span(&self) -> Span {
        self.located().span()
    }
    fn start(&self) -> Position {
        self.located().start()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
    pub start: Position,
}

/// The cooked value of a [`Literal`].
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    RegExp { pattern: String, flags: String },
    BigInt(String),
}

/// A literal. `raw` is the exact source text and is what code generation
/// emits; rules rewrite `raw`, never `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
    pub raw: Option<String>,
    pub span: Span,
    pub start: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThisExpression {
    pub span: Span,
    pub start: Position,
}

/// `[a, , ...b]`; holes are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpression {
    pub elements: Vec<Option<Expression>>,
    pub span: Span,
    pub start: Position,
}

/// `{ a: 1, b, ...c }`
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectExpression {
    pub properties: Vec<ObjectMember>,
    pub span: Span,
    pub start: Position,
}

/// One entry of an object literal.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectMember {
    Property(Property),
    Spread(SpreadElement),
    Unknown(UnknownNode),
}

impl ObjectMember {
    pub fn span(&self) -> Span {
        match self {
            ObjectMember::Property(p) => p.span,
            ObjectMember::Spread(s) => s.span,
            ObjectMember::Unknown(u) => u.span,
        }
    }
}

/// Accessor kind of a [`Property`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: Expression,
    pub value: Expression,
    pub kind: PropertyKind,
    pub computed: bool,
    pub shorthand: bool,
    pub method: bool,
    pub span: Span,
    pub start: Position,
}

/// `...argument`
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadElement {
    pub argument: Box<Expression>,
    pub span: Span,
    pub start: Position,
}

/// Body of an arrow function.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrowBody {
    Block(BlockStatement),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowFunction {
    pub params: Vec<Expression>,
    pub body: ArrowBody,
    pub is_async: bool,
    pub span: Span,
    pub start: Position,
}

/// `!x`, `typeof x`, `-x`, ...
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub operator: String,
    pub argument: Expression,
    pub span: Span,
    pub start: Position,
}

/// `++x`, `x--`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    pub operator: String,
    pub prefix: bool,
    pub argument: Expression,
    pub span: Span,
    pub start: Position,
}

/// Binary and logical expressions share one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub operator: String,
    pub left: Expression,
    pub right: Expression,
    pub span: Span,
    pub start: Position,
}

/// `left = right`, `left += right`, ...
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpression {
    pub operator: String,
    /// Target: an identifier, a member expression, or an unknown pattern.
    pub left: Expression,
    pub right: Expression,
    pub span: Span,
    pub start: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    pub test: Expression,
    pub consequent: Expression,
    pub alternate: Expression,
    pub span: Span,
    pub start: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: Expression,
    pub arguments: Vec<Expression>,
    /// `callee?.(...)`
    pub optional: bool,
    pub span: Span,
    pub start: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpression {
    pub callee: Expression,
    pub arguments: Vec<Expression>,
    pub span: Span,
    pub start: Position,
}

/// `object.property`, `object[property]`, `object?.property`
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    pub object: Expression,
    pub property: Expression,
    pub computed: bool,
    pub optional: bool,
    pub span: Span,
    pub start: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SequenceExpression {
    pub expressions: Vec<Expression>,
    pub span: Span,
    pub start: Position,
}
