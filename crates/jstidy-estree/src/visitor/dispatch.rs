// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Walk functions for tree traversal.
//!
//! The walk functions traverse nodes and call visitor methods:
//!
//! - **Pre-order**: `visit_*` is called before descending into children
//! - **Post-order**: `leave_*` is called after all children have been visited
//! - **Source order**: children are visited in the order they appear in the
//!   source text
//!
//! Statements and expressions fire their category hook (`visit_statement`,
//! `visit_expression`) around their kind hook, so for an expression statement
//! the order is `visit_statement`, `visit_expression_statement`,
//! `visit_expression`, then the hook for the expression's kind.
//!
//! # Control Flow
//!
//! - `VisitResult::Continue` - traverse into children
//! - `VisitResult::SkipChildren` - skip children but still call `leave_*`
//! - `VisitResult::Stop` - halt traversal immediately (no `leave_*` called)

use super::traits::{VisitResult, VisitorMut};
use crate::nodes::{
    // Program
    Program, UnknownNode, Child,
    // Statements
    Statement, ExpressionStatement, VariableDeclaration, VariableDeclarator, Function,
    ReturnStatement, IfStatement, BlockStatement, ForHead, ForStatement, ForInStatement,
    WhileStatement, DoWhileStatement, JumpStatement, ThrowStatement, TryStatement, CatchClause,
    SwitchStatement, SwitchCase, EmptyStatement,
    // Expressions
    Expression, Identifier, Literal, ThisExpression, ArrayExpression, ObjectExpression,
    ObjectMember, Property, SpreadElement, ArrowBody, ArrowFunction, UnaryExpression,
    UpdateExpression, BinaryExpression, AssignmentExpression, ConditionalExpression,
    CallExpression, NewExpression, MemberExpression, SequenceExpression,
};

/// Return early from the enclosing walk if a child walk stopped.
macro_rules! walk_child {
    ($walk:expr) => {
        if $walk == VisitResult::Stop {
            return VisitResult::Stop;
        }
    };
}

/// The visit / children / leave skeleton shared by every walk function.
macro_rules! walk_node {
    ($visitor:ident, $node:ident, $visit:ident, $leave:ident, $children:block) => {{
        match $visitor.$visit($node) {
            VisitResult::Stop => return VisitResult::Stop,
            VisitResult::SkipChildren => {}
            VisitResult::Continue => $children,
        }
        $visitor.$leave($node);
        VisitResult::Continue
    }};
}

// ============================================================================
// Program walk
// ============================================================================

/// Walk a [`Program`] node and every node beneath it.
///
/// Traversal order:
/// 1. `visit_program`
/// 2. Walk each statement in `body` (in source order)
/// 3. `leave_program`
pub fn walk_program<V: VisitorMut>(visitor: &mut V, node: &mut Program) -> VisitResult {
    walk_node!(visitor, node, visit_program, leave_program, {
        for stmt in &mut node.body {
            walk_child!(walk_statement(visitor, stmt));
        }
    })
}

/// Walk an [`UnknownNode`]: its recognised children, in source order.
pub fn walk_unknown<V: VisitorMut>(visitor: &mut V, node: &mut UnknownNode) -> VisitResult {
    walk_node!(visitor, node, visit_unknown, leave_unknown, {
        for child in &mut node.children {
            walk_child!(match child {
                Child::Statement(s) => walk_statement(visitor, s),
                Child::Expression(e) => walk_expression(visitor, e),
            });
        }
    })
}

// ============================================================================
// Statement walks
// ============================================================================

/// Walk a [`Statement`] node.
///
/// Calls `visit_statement`, dispatches to the walk for the statement's kind,
/// then calls `leave_statement`.
pub fn walk_statement<V: VisitorMut>(visitor: &mut V, node: &mut Statement) -> VisitResult {
    walk_node!(visitor, node, visit_statement, leave_statement, {
        walk_child!(match node {
            Statement::Expression(n) => walk_expression_statement(visitor, n),
            Statement::VariableDeclaration(n) => walk_variable_declaration(visitor, n),
            Statement::FunctionDeclaration(n) => walk_function(visitor, n),
            Statement::Return(n) => walk_return(visitor, n),
            Statement::If(n) => walk_if(visitor, n),
            Statement::Block(n) => walk_block(visitor, n),
            Statement::For(n) => walk_for(visitor, n),
            Statement::ForIn(n) | Statement::ForOf(n) => walk_for_in(visitor, n),
            Statement::While(n) => walk_while(visitor, n),
            Statement::DoWhile(n) => walk_do_while(visitor, n),
            Statement::Break(n) | Statement::Continue(n) => walk_jump(visitor, n),
            Statement::Throw(n) => walk_throw(visitor, n),
            Statement::Try(n) => walk_try(visitor, n),
            Statement::Switch(n) => walk_switch(visitor, n),
            Statement::Empty(n) => walk_empty(visitor, n),
            Statement::Unknown(n) => walk_unknown(visitor, n),
        });
    })
}

/// Walk an [`ExpressionStatement`] node.
pub fn walk_expression_statement<V: VisitorMut>(
    visitor: &mut V,
    node: &mut ExpressionStatement,
) -> VisitResult {
    walk_node!(visitor, node, visit_expression_statement, leave_expression_statement, {
        walk_child!(walk_expression(visitor, &mut node.expression));
    })
}

/// Walk a [`VariableDeclaration`] node: each declarator in order.
pub fn walk_variable_declaration<V: VisitorMut>(
    visitor: &mut V,
    node: &mut VariableDeclaration,
) -> VisitResult {
    walk_node!(visitor, node, visit_variable_declaration, leave_variable_declaration, {
        for decl in &mut node.declarations {
            walk_child!(walk_variable_declarator(visitor, decl));
        }
    })
}

/// Walk a [`VariableDeclarator`] node: the binding target, then the initialiser.
pub fn walk_variable_declarator<V: VisitorMut>(
    visitor: &mut V,
    node: &mut VariableDeclarator,
) -> VisitResult {
    walk_node!(visitor, node, visit_variable_declarator, leave_variable_declarator, {
        walk_child!(walk_expression(visitor, &mut node.id));
        if let Some(init) = &mut node.init {
            walk_child!(walk_expression(visitor, init));
        }
    })
}

/// Walk a [`Function`] node: name, parameters, body.
pub fn walk_function<V: VisitorMut>(visitor: &mut V, node: &mut Function) -> VisitResult {
    walk_node!(visitor, node, visit_function, leave_function, {
        if let Some(id) = &mut node.id {
            walk_child!(walk_identifier(visitor, id));
        }
        for param in &mut node.params {
            walk_child!(walk_expression(visitor, param));
        }
        walk_child!(walk_block(visitor, &mut node.body));
    })
}

/// Walk a [`ReturnStatement`] node.
pub fn walk_return<V: VisitorMut>(visitor: &mut V, node: &mut ReturnStatement) -> VisitResult {
    walk_node!(visitor, node, visit_return_stmt, leave_return_stmt, {
        if let Some(argument) = &mut node.argument {
            walk_child!(walk_expression(visitor, argument));
        }
    })
}

/// Walk an [`IfStatement`] node: test, consequent, alternate.
pub fn walk_if<V: VisitorMut>(visitor: &mut V, node: &mut IfStatement) -> VisitResult {
    walk_node!(visitor, node, visit_if_stmt, leave_if_stmt, {
        walk_child!(walk_expression(visitor, &mut node.test));
        walk_child!(walk_statement(visitor, &mut node.consequent));
        if let Some(alternate) = &mut node.alternate {
            walk_child!(walk_statement(visitor, alternate));
        }
    })
}

/// Walk a [`BlockStatement`] node.
pub fn walk_block<V: VisitorMut>(visitor: &mut V, node: &mut BlockStatement) -> VisitResult {
    walk_node!(visitor, node, visit_block, leave_block, {
        for stmt in &mut node.body {
            walk_child!(walk_statement(visitor, stmt));
        }
    })
}

fn walk_for_head<V: VisitorMut>(visitor: &mut V, head: &mut ForHead) -> VisitResult {
    match head {
        ForHead::Declaration(decl) => walk_variable_declaration(visitor, decl),
        ForHead::Expression(expr) => walk_expression(visitor, expr),
    }
}

/// Walk a [`ForStatement`] node: init, test, update, body.
pub fn walk_for<V: VisitorMut>(visitor: &mut V, node: &mut ForStatement) -> VisitResult {
    walk_node!(visitor, node, visit_for_stmt, leave_for_stmt, {
        if let Some(init) = &mut node.init {
            walk_child!(walk_for_head(visitor, init));
        }
        if let Some(test) = &mut node.test {
            walk_child!(walk_expression(visitor, test));
        }
        if let Some(update) = &mut node.update {
            walk_child!(walk_expression(visitor, update));
        }
        walk_child!(walk_statement(visitor, &mut node.body));
    })
}

/// Walk a `for-in` or `for-of` node: left, right, body.
pub fn walk_for_in<V: VisitorMut>(visitor: &mut V, node: &mut ForInStatement) -> VisitResult {
    walk_node!(visitor, node, visit_for_in, leave_for_in, {
        walk_child!(walk_for_head(visitor, &mut node.left));
        walk_child!(walk_expression(visitor, &mut node.right));
        walk_child!(walk_statement(visitor, &mut node.body));
    })
}

/// Walk a [`WhileStatement`] node.
pub fn walk_while<V: VisitorMut>(visitor: &mut V, node: &mut WhileStatement) -> VisitResult {
    walk_node!(visitor, node, visit_while_stmt, leave_while_stmt, {
        walk_child!(walk_expression(visitor, &mut node.test));
        walk_child!(walk_statement(visitor, &mut node.body));
    })
}

/// Walk a [`DoWhileStatement`] node: body first, as written.
pub fn walk_do_while<V: VisitorMut>(visitor: &mut V, node: &mut DoWhileStatement) -> VisitResult {
    walk_node!(visitor, node, visit_do_while, leave_do_while, {
        walk_child!(walk_statement(visitor, &mut node.body));
        walk_child!(walk_expression(visitor, &mut node.test));
    })
}

/// Walk a `break` or `continue` node.
pub fn walk_jump<V: VisitorMut>(visitor: &mut V, node: &mut JumpStatement) -> VisitResult {
    walk_node!(visitor, node, visit_jump, leave_jump, {
        if let Some(label) = &mut node.label {
            walk_child!(walk_identifier(visitor, label));
        }
    })
}

/// Walk a [`ThrowStatement`] node.
pub fn walk_throw<V: VisitorMut>(visitor: &mut V, node: &mut ThrowStatement) -> VisitResult {
    walk_node!(visitor, node, visit_throw_stmt, leave_throw_stmt, {
        walk_child!(walk_expression(visitor, &mut node.argument));
    })
}

/// Walk a [`TryStatement`] node: block, handler, finalizer.
pub fn walk_try<V: VisitorMut>(visitor: &mut V, node: &mut TryStatement) -> VisitResult {
    walk_node!(visitor, node, visit_try_stmt, leave_try_stmt, {
        walk_child!(walk_block(visitor, &mut node.block));
        if let Some(handler) = &mut node.handler {
            walk_child!(walk_catch_clause(visitor, handler));
        }
        if let Some(finalizer) = &mut node.finalizer {
            walk_child!(walk_block(visitor, finalizer));
        }
    })
}

/// Walk a [`CatchClause`] node.
pub fn walk_catch_clause<V: VisitorMut>(visitor: &mut V, node: &mut CatchClause) -> VisitResult {
    walk_node!(visitor, node, visit_catch_clause, leave_catch_clause, {
        if let Some(param) = &mut node.param {
            walk_child!(walk_expression(visitor, param));
        }
        walk_child!(walk_block(visitor, &mut node.body));
    })
}

/// Walk a [`SwitchStatement`] node: discriminant, then each case.
pub fn walk_switch<V: VisitorMut>(visitor: &mut V, node: &mut SwitchStatement) -> VisitResult {
    walk_node!(visitor, node, visit_switch_stmt, leave_switch_stmt, {
        walk_child!(walk_expression(visitor, &mut node.discriminant));
        for case in &mut node.cases {
            walk_child!(walk_switch_case(visitor, case));
        }
    })
}

/// Walk a [`SwitchCase`] node.
pub fn walk_switch_case<V: VisitorMut>(visitor: &mut V, node: &mut SwitchCase) -> VisitResult {
    walk_node!(visitor, node, visit_switch_case, leave_switch_case, {
        if let Some(test) = &mut node.test {
            walk_child!(walk_expression(visitor, test));
        }
        for stmt in &mut node.consequent {
            walk_child!(walk_statement(visitor, stmt));
        }
    })
}

/// Walk an [`EmptyStatement`] node.
pub fn walk_empty<V: VisitorMut>(visitor: &mut V, node: &mut EmptyStatement) -> VisitResult {
    walk_node!(visitor, node, visit_empty, leave_empty, {})
}

// ============================================================================
// Expression walks
// ============================================================================

/// Walk an [`Expression`] node.
///
/// Calls `visit_expression`, dispatches to the walk for the expression's
/// kind, then calls `leave_expression`.
pub fn walk_expression<V: VisitorMut>(visitor: &mut V, node: &mut Expression) -> VisitResult {
    walk_node!(visitor, node, visit_expression, leave_expression, {
        walk_child!(match node {
            Expression::Identifier(n) => walk_identifier(visitor, n),
            Expression::Literal(n) => walk_literal(visitor, n),
            Expression::This(n) => walk_this(visitor, n),
            Expression::Array(n) => walk_array(visitor, n),
            Expression::Object(n) => walk_object(visitor, n),
            Expression::Spread(n) => walk_spread(visitor, n),
            Expression::Function(n) => walk_function(visitor, n),
            Expression::Arrow(n) => walk_arrow(visitor, n),
            Expression::Unary(n) => walk_unary(visitor, n),
            Expression::Update(n) => walk_update(visitor, n),
            Expression::Binary(n) | Expression::Logical(n) => walk_binary(visitor, n),
            Expression::Assignment(n) => walk_assignment(visitor, n),
            Expression::Conditional(n) => walk_conditional(visitor, n),
            Expression::Call(n) => walk_call(visitor, n),
            Expression::New(n) => walk_new(visitor, n),
            Expression::Member(n) => walk_member(visitor, n),
            Expression::Sequence(n) => walk_sequence(visitor, n),
            Expression::Unknown(n) => walk_unknown(visitor, n),
        });
    })
}

/// Walk an [`Identifier`] node (a leaf).
pub fn walk_identifier<V: VisitorMut>(visitor: &mut V, node: &mut Identifier) -> VisitResult {
    walk_node!(visitor, node, visit_identifier, leave_identifier, {})
}

/// Walk a [`Literal`] node (a leaf).
pub fn walk_literal<V: VisitorMut>(visitor: &mut V, node: &mut Literal) -> VisitResult {
    walk_node!(visitor, node, visit_literal, leave_literal, {})
}

/// Walk a [`ThisExpression`] node (a leaf).
pub fn walk_this<V: VisitorMut>(visitor: &mut V, node: &mut ThisExpression) -> VisitResult {
    walk_node!(visitor, node, visit_this_expr, leave_this_expr, {})
}

/// Walk an [`ArrayExpression`] node, skipping holes.
pub fn walk_array<V: VisitorMut>(visitor: &mut V, node: &mut ArrayExpression) -> VisitResult {
    walk_node!(visitor, node, visit_array, leave_array, {
        for element in node.elements.iter_mut().flatten() {
            walk_child!(walk_expression(visitor, element));
        }
    })
}

/// Walk an [`ObjectExpression`] node.
pub fn walk_object<V: VisitorMut>(visitor: &mut V, node: &mut ObjectExpression) -> VisitResult {
    walk_node!(visitor, node, visit_object, leave_object, {
        for member in &mut node.properties {
            walk_child!(match member {
                ObjectMember::Property(p) => walk_property(visitor, p),
                ObjectMember::Spread(s) => walk_spread(visitor, s),
                ObjectMember::Unknown(u) => walk_unknown(visitor, u),
            });
        }
    })
}

/// Walk a [`Property`] node: key, then value.
pub fn walk_property<V: VisitorMut>(visitor: &mut V, node: &mut Property) -> VisitResult {
    walk_node!(visitor, node, visit_property, leave_property, {
        walk_child!(walk_expression(visitor, &mut node.key));
        walk_child!(walk_expression(visitor, &mut node.value));
    })
}

/// Walk a [`SpreadElement`] node.
pub fn walk_spread<V: VisitorMut>(visitor: &mut V, node: &mut SpreadElement) -> VisitResult {
    walk_node!(visitor, node, visit_spread, leave_spread, {
        walk_child!(walk_expression(visitor, &mut node.argument));
    })
}

/// Walk an [`ArrowFunction`] node: parameters, then body.
pub fn walk_arrow<V: VisitorMut>(visitor: &mut V, node: &mut ArrowFunction) -> VisitResult {
    walk_node!(visitor, node, visit_arrow, leave_arrow, {
        for param in &mut node.params {
            walk_child!(walk_expression(visitor, param));
        }
        walk_child!(match &mut node.body {
            ArrowBody::Block(block) => walk_block(visitor, block),
            ArrowBody::Expression(expr) => walk_expression(visitor, expr),
        });
    })
}

/// Walk a [`UnaryExpression`] node.
pub fn walk_unary<V: VisitorMut>(visitor: &mut V, node: &mut UnaryExpression) -> VisitResult {
    walk_node!(visitor, node, visit_unary, leave_unary, {
        walk_child!(walk_expression(visitor, &mut node.argument));
    })
}

/// Walk an [`UpdateExpression`] node.
pub fn walk_update<V: VisitorMut>(visitor: &mut V, node: &mut UpdateExpression) -> VisitResult {
    walk_node!(visitor, node, visit_update, leave_update, {
        walk_child!(walk_expression(visitor, &mut node.argument));
    })
}

/// Walk a binary or logical expression: left, then right.
pub fn walk_binary<V: VisitorMut>(visitor: &mut V, node: &mut BinaryExpression) -> VisitResult {
    walk_node!(visitor, node, visit_binary, leave_binary, {
        walk_child!(walk_expression(visitor, &mut node.left));
        walk_child!(walk_expression(visitor, &mut node.right));
    })
}

/// Walk an [`AssignmentExpression`] node: target, then value.
pub fn walk_assignment<V: VisitorMut>(
    visitor: &mut V,
    node: &mut AssignmentExpression,
) -> VisitResult {
    walk_node!(visitor, node, visit_assignment, leave_assignment, {
        walk_child!(walk_expression(visitor, &mut node.left));
        walk_child!(walk_expression(visitor, &mut node.right));
    })
}

/// Walk a [`ConditionalExpression`] node.
pub fn walk_conditional<V: VisitorMut>(
    visitor: &mut V,
    node: &mut ConditionalExpression,
) -> VisitResult {
    walk_node!(visitor, node, visit_conditional, leave_conditional, {
        walk_child!(walk_expression(visitor, &mut node.test));
        walk_child!(walk_expression(visitor, &mut node.consequent));
        walk_child!(walk_expression(visitor, &mut node.alternate));
    })
}

/// Walk a [`CallExpression`] node: callee, then arguments.
pub fn walk_call<V: VisitorMut>(visitor: &mut V, node: &mut CallExpression) -> VisitResult {
    walk_node!(visitor, node, visit_call, leave_call, {
        walk_child!(walk_expression(visitor, &mut node.callee));
        for arg in &mut node.arguments {
            walk_child!(walk_expression(visitor, arg));
        }
    })
}

/// Walk a [`NewExpression`] node: callee, then arguments.
pub fn walk_new<V: VisitorMut>(visitor: &mut V, node: &mut NewExpression) -> VisitResult {
    walk_node!(visitor, node, visit_new_expr, leave_new_expr, {
        walk_child!(walk_expression(visitor, &mut node.callee));
        for arg in &mut node.arguments {
            walk_child!(walk_expression(visitor, arg));
        }
    })
}

/// Walk a [`MemberExpression`] node: object, then property.
pub fn walk_member<V: VisitorMut>(visitor: &mut V, node: &mut MemberExpression) -> VisitResult {
    walk_node!(visitor, node, visit_member, leave_member, {
        walk_child!(walk_expression(visitor, &mut node.object));
        walk_child!(walk_expression(visitor, &mut node.property));
    })
}

/// Walk a [`SequenceExpression`] node.
pub fn walk_sequence<V: VisitorMut>(
    visitor: &mut V,
    node: &mut SequenceExpression,
) -> VisitResult {
    walk_node!(visitor, node, visit_sequence, leave_sequence, {
        for expr in &mut node.expressions {
            walk_child!(walk_expression(visitor, expr));
        }
    })
}

// ============================================================================
// Single-node dispatch
// ============================================================================

/// Fire only the kind-specific `visit_*` hook of one expression.
///
/// Neither the `visit_expression` category hook nor any hook of a child is
/// called, and no `leave_*` hook runs.
pub fn dispatch_expression<V: VisitorMut>(visitor: &mut V, node: &mut Expression) -> VisitResult {
    match node {
        Expression::Identifier(n) => visitor.visit_identifier(n),
        Expression::Literal(n) => visitor.visit_literal(n),
        Expression::This(n) => visitor.visit_this_expr(n),
        Expression::Array(n) => visitor.visit_array(n),
        Expression::Object(n) => visitor.visit_object(n),
        Expression::Spread(n) => visitor.visit_spread(n),
        Expression::Function(n) => visitor.visit_function(n),
        Expression::Arrow(n) => visitor.visit_arrow(n),
        Expression::Unary(n) => visitor.visit_unary(n),
        Expression::Update(n) => visitor.visit_update(n),
        Expression::Binary(n) | Expression::Logical(n) => visitor.visit_binary(n),
        Expression::Assignment(n) => visitor.visit_assignment(n),
        Expression::Conditional(n) => visitor.visit_conditional(n),
        Expression::Call(n) => visitor.visit_call(n),
        Expression::New(n) => visitor.visit_new_expr(n),
        Expression::Member(n) => visitor.visit_member(n),
        Expression::Sequence(n) => visitor.visit_sequence(n),
        Expression::Unknown(n) => visitor.visit_unknown(n),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::from_value;
    use serde_json::json;

    /// Records the kind hooks that fire, in order.
    #[derive(Default)]
    struct Trace {
        events: Vec<String>,
        stop_at: Option<&'static str>,
    }

    impl Trace {
        fn record(&mut self, name: &str) -> VisitResult {
            self.events.push(name.to_string());
            if self.stop_at == Some(name) {
                VisitResult::Stop
            } else {
                VisitResult::Continue
            }
        }
    }

    impl VisitorMut for Trace {
        fn visit_variable_declaration(&mut self, _: &mut VariableDeclaration) -> VisitResult {
            self.record("decl")
        }
        fn visit_identifier(&mut self, node: &mut Identifier) -> VisitResult {
            let name = format!("id:{}", node.name);
            self.record(&name)
        }
        fn visit_literal(&mut self, node: &mut Literal) -> VisitResult {
            let raw = format!("lit:{}", node.raw.as_deref().unwrap_or_default());
            self.record(&raw)
        }
        fn visit_assignment(&mut self, _: &mut AssignmentExpression) -> VisitResult {
            self.record("assign")
        }
        fn leave_program(&mut self, _: &mut Program) {
            self.events.push("leave".to_string());
        }
    }

    fn sample() -> Program {
        // var a = 1; a = "x"; class C { m() { b } }
        let tree = json!({
            "type": "Program",
            "body": [
                {"type": "VariableDeclaration", "kind": "var", "start": 0, "declarations": [
                    {"type": "VariableDeclarator", "start": 4,
                     "id": {"type": "Identifier", "name": "a", "start": 4},
                     "init": {"type": "Literal", "value": 1, "raw": "1", "start": 8}}
                ]},
                {"type": "ExpressionStatement", "start": 11, "expression": {
                    "type": "AssignmentExpression", "operator": "=", "start": 11,
                    "left": {"type": "Identifier", "name": "a", "start": 11},
                    "right": {"type": "Literal", "value": "x", "raw": "\"x\"", "start": 15}
                }},
                {"type": "ClassDeclaration", "start": 20,
                 "id": {"type": "Identifier", "name": "C", "start": 26},
                 "body": {"type": "ClassBody", "start": 28, "body": [
                    {"type": "MethodDefinition", "start": 30,
                     "key": {"type": "Identifier", "name": "m", "start": 30},
                     "value": {"type": "FunctionExpression", "start": 31, "params": [],
                               "body": {"type": "BlockStatement", "start": 34, "body": [
                                   {"type": "ExpressionStatement", "start": 36,
                                    "expression": {"type": "Identifier", "name": "b", "start": 36}}
                               ]}}}
                 ]}}
            ]
        });
        from_value(&tree, None).unwrap()
    }

    #[test]
    fn preorder_source_order() {
        let mut program = sample();
        let mut trace = Trace::default();
        assert_eq!(walk_program(&mut trace, &mut program), VisitResult::Continue);
        assert_eq!(
            trace.events,
            vec![
                "decl", "id:a", "lit:1", "assign", "id:a", "lit:\"x\"", "id:C", "id:m", "id:b",
                "leave"
            ]
        );
    }

    #[test]
    fn stop_halts_traversal() {
        let mut program = sample();
        let mut trace = Trace {
            stop_at: Some("assign"),
            ..Trace::default()
        };
        assert_eq!(walk_program(&mut trace, &mut program), VisitResult::Stop);
        assert_eq!(trace.events, vec!["decl", "id:a", "lit:1", "assign"]);
    }

    #[test]
    fn skip_children_still_leaves() {
        struct Skipper {
            literals: usize,
            left_declarations: usize,
        }
        impl VisitorMut for Skipper {
            fn visit_variable_declaration(&mut self, _: &mut VariableDeclaration) -> VisitResult {
                VisitResult::SkipChildren
            }
            fn leave_variable_declaration(&mut self, _: &mut VariableDeclaration) {
                self.left_declarations += 1;
            }
            fn visit_literal(&mut self, _: &mut Literal) -> VisitResult {
                self.literals += 1;
                VisitResult::Continue
            }
        }

        let mut program = sample();
        let mut skipper = Skipper {
            literals: 0,
            left_declarations: 0,
        };
        walk_program(&mut skipper, &mut program);
        assert_eq!(skipper.left_declarations, 1);
        assert_eq!(skipper.literals, 1);
    }

    #[test]
    fn hooks_can_mutate() {
        struct Upper;
        impl VisitorMut for Upper {
            fn visit_identifier(&mut self, node: &mut Identifier) -> VisitResult {
                node.name = node.name.to_uppercase();
                VisitResult::Continue
            }
        }

        let mut program = sample();
        walk_program(&mut Upper, &mut program);
        let Statement::VariableDeclaration(decl) = &program.body[0] else {
            panic!("expected declaration");
        };
        assert_eq!(decl.first_name(), Some("A"));
    }

    #[test]
    fn dispatch_expression_does_not_descend() {
        let mut program = sample();
        let Statement::Expression(stmt) = &mut program.body[1] else {
            panic!("expected expression statement");
        };
        let mut trace = Trace::default();
        dispatch_expression(&mut trace, &mut stmt.expression);
        assert_eq!(trace.events, vec!["assign"]);
    }
}
