// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor trait definitions for tree traversal.

use crate::nodes::{
    // Program
    Program, UnknownNode,
    // Statements
    Statement, ExpressionStatement, VariableDeclaration, VariableDeclarator, Function,
    ReturnStatement, IfStatement, BlockStatement, ForStatement, ForInStatement, WhileStatement,
    DoWhileStatement, JumpStatement, ThrowStatement, TryStatement, CatchClause, SwitchStatement,
    SwitchCase, EmptyStatement,
    // Expressions
    Expression, Identifier, Literal, ThisExpression, ArrayExpression, ObjectExpression, Property,
    SpreadElement, ArrowFunction, UnaryExpression, UpdateExpression, BinaryExpression,
    AssignmentExpression, ConditionalExpression, CallExpression, NewExpression, MemberExpression,
    SequenceExpression,
};

/// Result of visiting a node - controls traversal behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitResult {
    /// Continue traversal into children.
    ///
    /// After visiting children, `leave_*` will be called for this node.
    #[default]
    Continue,

    /// Skip children, continue with siblings.
    ///
    /// The walker will not descend into this node's children, but `leave_*`
    /// will still be called for this node.
    SkipChildren,

    /// Stop traversal entirely.
    ///
    /// No further `visit_*` or `leave_*` methods will be called.
    Stop,
}

/// Macro to generate visitor trait method signatures.
///
/// Generates pairs of `visit_*` and `leave_*` methods taking the node by
/// mutable reference, with default implementations that return
/// `VisitResult::Continue` and do nothing, respectively.
///
/// # Usage
///
/// ```ignore
/// visitor_methods! {
///     // Generates visit_literal and leave_literal for Literal
///     literal: Literal,
/// }
/// ```
macro_rules! visitor_methods {
    (
        $(
            $(#[$meta:meta])*
            $base_name:ident : $node_type:ty
        ),* $(,)?
    ) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[doc = concat!("Visit a [`", stringify!($node_type), "`] node.")]
                #[doc = ""]
                #[doc = "Called before descending into children."]
                #[doc = "Return `VisitResult` to control traversal."]
                #[allow(unused_variables)]
                fn [<visit_ $base_name>](&mut self, node: &mut $node_type) -> VisitResult {
                    VisitResult::Continue
                }

                $(#[$meta])*
                #[doc = concat!("Leave a [`", stringify!($node_type), "`] node.")]
                #[doc = ""]
                #[doc = "Called after all children have been visited,"]
                #[doc = "even if `SkipChildren` was returned."]
                #[allow(unused_variables)]
                fn [<leave_ $base_name>](&mut self, node: &mut $node_type) {}
            )*
        }
    };
}

/// Mutable visitor for tree traversal.
///
/// Hooks receive each node by mutable reference and may rewrite it in place.
/// Every node fires two hooks on the way in: the generic one for its
/// category (`visit_statement` or `visit_expression`) and then the one for
/// its kind.
///
/// # Traversal Order
///
/// - `visit_*` is called in **pre-order** (before children)
/// - `leave_*` is called in **post-order** (after children)
/// - Children are visited in source order
///
/// # Example
///
/// ```ignore
/// use jstidy_estree::visitor::{VisitorMut, VisitResult};
/// use jstidy_estree::nodes::Literal;
///
/// struct LiteralCounter {
///     count: usize,
/// }
///
/// impl VisitorMut for LiteralCounter {
///     fn visit_literal(&mut self, _node: &mut Literal) -> VisitResult {
///         self.count += 1;
///         VisitResult::Continue
///     }
/// }
/// ```
pub trait VisitorMut {
    // Program
    visitor_methods! {
        program: Program,
        unknown: UnknownNode,
    }

    // Categories
    visitor_methods! {
        statement: Statement,
        expression: Expression,
    }

    // Statements
    visitor_methods! {
        expression_statement: ExpressionStatement,
        variable_declaration: VariableDeclaration,
        variable_declarator: VariableDeclarator,
        function: Function,
        return_stmt: ReturnStatement,
        if_stmt: IfStatement,
        block: BlockStatement,
        for_stmt: ForStatement,
        for_in: ForInStatement,
        while_stmt: WhileStatement,
        do_while: DoWhileStatement,
        jump: JumpStatement,
        throw_stmt: ThrowStatement,
        try_stmt: TryStatement,
        catch_clause: CatchClause,
        switch_stmt: SwitchStatement,
        switch_case: SwitchCase,
        empty: EmptyStatement,
    }

    // Expressions
    visitor_methods! {
        identifier: Identifier,
        literal: Literal,
        this_expr: ThisExpression,
        array: ArrayExpression,
        object: ObjectExpression,
        property: Property,
        spread: SpreadElement,
        arrow: ArrowFunction,
        unary: UnaryExpression,
        update: UpdateExpression,
        /// Also fired for logical expressions.
        binary: BinaryExpression,
        assignment: AssignmentExpression,
        conditional: ConditionalExpression,
        call: CallExpression,
        new_expr: NewExpression,
        member: MemberExpression,
        sequence: SequenceExpression,
    }
}
