// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The closed set of node kinds modelled by this crate.

use std::fmt;

macro_rules! node_kinds {
    ( $( $variant:ident => $estree:literal ),* $(,)? ) => {
        /// Discriminator of every node kind the tree models explicitly.
        ///
        /// Each variant corresponds to one ESTree `type` string. Kinds outside
        /// this set are loaded as `Unknown` nodes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeKind {
            $( $variant, )*
        }

        impl NodeKind {
            /// All modelled kinds, in declaration order.
            pub const ALL: &'static [NodeKind] = &[ $( NodeKind::$variant, )* ];

            /// The ESTree `type` string for this kind.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( NodeKind::$variant => $estree, )*
                }
            }

            /// Look up a kind by its ESTree `type` string.
            pub fn from_estree(kind: &str) -> Option<NodeKind> {
                match kind {
                    $( $estree => Some(NodeKind::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

node_kinds! {
    Program => "Program",
    // Statements
    ExpressionStatement => "ExpressionStatement",
    VariableDeclaration => "VariableDeclaration",
    VariableDeclarator => "VariableDeclarator",
    FunctionDeclaration => "FunctionDeclaration",
    ReturnStatement => "ReturnStatement",
    IfStatement => "IfStatement",
    BlockStatement => "BlockStatement",
    ForStatement => "ForStatement",
    ForInStatement => "ForInStatement",
    ForOfStatement => "ForOfStatement",
    WhileStatement => "WhileStatement",
    DoWhileStatement => "DoWhileStatement",
    BreakStatement => "BreakStatement",
    ContinueStatement => "ContinueStatement",
    ThrowStatement => "ThrowStatement",
    TryStatement => "TryStatement",
    CatchClause => "CatchClause",
    SwitchStatement => "SwitchStatement",
    SwitchCase => "SwitchCase",
    EmptyStatement => "EmptyStatement",
    // Expressions
    Identifier => "Identifier",
    Literal => "Literal",
    ThisExpression => "ThisExpression",
    ArrayExpression => "ArrayExpression",
    ObjectExpression => "ObjectExpression",
    Property => "Property",
    SpreadElement => "SpreadElement",
    FunctionExpression => "FunctionExpression",
    ArrowFunctionExpression => "ArrowFunctionExpression",
    UnaryExpression => "UnaryExpression",
    UpdateExpression => "UpdateExpression",
    BinaryExpression => "BinaryExpression",
    LogicalExpression => "LogicalExpression",
    AssignmentExpression => "AssignmentExpression",
    ConditionalExpression => "ConditionalExpression",
    CallExpression => "CallExpression",
    NewExpression => "NewExpression",
    MemberExpression => "MemberExpression",
    SequenceExpression => "SequenceExpression",
}

impl NodeKind {
    /// Returns true for kinds that appear in statement position.
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeKind::ExpressionStatement
                | NodeKind::VariableDeclaration
                | NodeKind::FunctionDeclaration
                | NodeKind::ReturnStatement
                | NodeKind::IfStatement
                | NodeKind::BlockStatement
                | NodeKind::ForStatement
                | NodeKind::ForInStatement
                | NodeKind::ForOfStatement
                | NodeKind::WhileStatement
                | NodeKind::DoWhileStatement
                | NodeKind::BreakStatement
                | NodeKind::ContinueStatement
                | NodeKind::ThrowStatement
                | NodeKind::TryStatement
                | NodeKind::SwitchStatement
                | NodeKind::EmptyStatement
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if an ESTree `type` string names a statement or declaration,
/// including kinds this crate does not model.
///
/// Used to decide whether an unmodelled node sits in statement position.
pub fn is_statement_type(kind: &str) -> bool {
    match NodeKind::from_estree(kind) {
        Some(k) => k.is_statement(),
        None => {
            kind.ends_with("Statement")
                || kind.ends_with("Declaration")
                || kind == "StaticBlock"
        }
    }
}
