// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Expression emission and operator precedence.

use super::{emit_block, emit_unknown, CodegenState};
use crate::nodes::{
    ArrowBody, ArrowFunction, Expression, Function, Literal, LiteralValue, ObjectMember, Property,
    PropertyKind,
};

// Binding strength, loosest first. An operand whose precedence is below the
// minimum its position requires gets parenthesised.
pub(crate) const PREC_LOWEST: u8 = 0;
const PREC_SEQUENCE: u8 = 1;
pub(crate) const PREC_ASSIGN: u8 = 2;
const PREC_CONDITIONAL: u8 = 3;
const PREC_NULLISH: u8 = 4;
const PREC_UNARY: u8 = 15;
const PREC_PREFIX: u8 = 16;
const PREC_POSTFIX: u8 = 17;
const PREC_CALL: u8 = 19;
const PREC_PRIMARY: u8 = 20;

fn binary_precedence(operator: &str) -> u8 {
    match operator {
        "??" | "||" => PREC_NULLISH,
        "&&" => 5,
        "|" => 6,
        "^" => 7,
        "&" => 8,
        "==" | "!=" | "===" | "!==" => 9,
        "<" | ">" | "<=" | ">=" | "in" | "instanceof" => 10,
        "<<" | ">>" | ">>>" => 11,
        "+" | "-" => 12,
        "*" | "/" | "%" => 13,
        "**" => 14,
        _ => PREC_PRIMARY,
    }
}

pub(crate) fn precedence(expr: &Expression) -> u8 {
    match expr {
        Expression::Sequence(_) => PREC_SEQUENCE,
        Expression::Assignment(_) | Expression::Arrow(_) | Expression::Spread(_) => PREC_ASSIGN,
        Expression::Conditional(_) => PREC_CONDITIONAL,
        Expression::Binary(b) | Expression::Logical(b) => binary_precedence(&b.operator),
        Expression::Unary(_) => PREC_UNARY,
        Expression::Update(u) if u.prefix => PREC_PREFIX,
        Expression::Update(_) => PREC_POSTFIX,
        Expression::Call(_) | Expression::New(_) | Expression::Member(_) => PREC_CALL,
        Expression::Unknown(u) => match u.kind.as_str() {
            "YieldExpression" | "AssignmentPattern" | "RestElement" => PREC_ASSIGN,
            "AwaitExpression" => PREC_UNARY,
            "ChainExpression" | "TaggedTemplateExpression" | "ImportExpression" => PREC_CALL,
            _ => PREC_PRIMARY,
        },
        Expression::Identifier(_)
        | Expression::Literal(_)
        | Expression::This(_)
        | Expression::Array(_)
        | Expression::Object(_)
        | Expression::Function(_) => PREC_PRIMARY,
    }
}

/// Emit `expr`, parenthesised if it binds looser than `min`.
pub(crate) fn emit_expression(expr: &Expression, min: u8, state: &mut CodegenState<'_>) {
    if precedence(expr) < min {
        state.add_token("(");
        emit_bare(expr, state);
        state.add_token(")");
    } else {
        emit_bare(expr, state);
    }
}

/// Emit a comma-separated list, each item at assignment precedence.
fn emit_list(items: &[Expression], state: &mut CodegenState<'_>) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            state.add_token(", ");
        }
        emit_expression(item, PREC_ASSIGN, state);
    }
}

fn emit_bare(expr: &Expression, state: &mut CodegenState<'_>) {
    match expr {
        Expression::Identifier(ident) => state.add_token(&ident.name),
        Expression::Literal(lit) => emit_literal(lit, state),
        Expression::This(_) => state.add_token("this"),
        Expression::Array(array) => {
            state.add_token("[");
            for (i, element) in array.elements.iter().enumerate() {
                if i > 0 {
                    state.add_token(", ");
                }
                if let Some(element) = element {
                    emit_expression(element, PREC_ASSIGN, state);
                }
            }
            if matches!(array.elements.last(), Some(None)) {
                state.add_token(",");
            }
            state.add_token("]");
        }
        Expression::Object(object) => {
            if object.properties.is_empty() {
                state.add_token("{}");
                return;
            }
            state.add_token("{");
            state.add_newline();
            state.indent();
            for (i, member) in object.properties.iter().enumerate() {
                state.add_indent();
                match member {
                    ObjectMember::Property(property) => emit_property(property, state),
                    ObjectMember::Spread(spread) => {
                        state.add_token("...");
                        emit_expression(&spread.argument, PREC_ASSIGN, state);
                    }
                    ObjectMember::Unknown(unknown) => emit_unknown(unknown, state),
                }
                if i + 1 < object.properties.len() {
                    state.add_token(",");
                }
                state.add_newline();
            }
            state.dedent();
            state.add_indent();
            state.add_token("}");
        }
        Expression::Spread(spread) => {
            state.add_token("...");
            emit_expression(&spread.argument, PREC_ASSIGN, state);
        }
        Expression::Function(func) => emit_function(func, state),
        Expression::Arrow(arrow) => emit_arrow(arrow, state),
        Expression::Unary(unary) => {
            state.add_token(&unary.operator);
            let is_word = unary.operator.chars().all(|c| c.is_ascii_alphabetic());
            if is_word || doubles_sign(&unary.operator, &unary.argument) {
                state.add_token(" ");
            }
            emit_expression(&unary.argument, PREC_UNARY, state);
        }
        Expression::Update(update) => {
            if update.prefix {
                state.add_token(&update.operator);
                emit_expression(&update.argument, PREC_PREFIX, state);
            } else {
                emit_expression(&update.argument, PREC_CALL, state);
                state.add_token(&update.operator);
            }
        }
        Expression::Binary(binary) | Expression::Logical(binary) => {
            let prec = binary_precedence(&binary.operator);
            let (left_min, right_min) = if binary.operator == "**" {
                (prec + 1, prec)
            } else {
                (prec, prec + 1)
            };
            // `-a ** b` is a syntax error; so is mixing `??` with `||`/`&&`.
            let left_needs_parens = (binary.operator == "**"
                && matches!(binary.left, Expression::Unary(_)))
                || mixes_nullish(&binary.operator, &binary.left);
            if left_needs_parens {
                state.add_token("(");
                emit_bare(&binary.left, state);
                state.add_token(")");
            } else {
                emit_expression(&binary.left, left_min, state);
            }
            state.add_token(" ");
            state.add_token(&binary.operator);
            state.add_token(" ");
            if mixes_nullish(&binary.operator, &binary.right) {
                state.add_token("(");
                emit_bare(&binary.right, state);
                state.add_token(")");
            } else {
                emit_expression(&binary.right, right_min, state);
            }
        }
        Expression::Assignment(assign) => {
            emit_expression(&assign.left, PREC_CALL, state);
            state.add_token(" ");
            state.add_token(&assign.operator);
            state.add_token(" ");
            emit_expression(&assign.right, PREC_ASSIGN, state);
        }
        Expression::Conditional(cond) => {
            emit_expression(&cond.test, PREC_NULLISH, state);
            state.add_token(" ? ");
            emit_expression(&cond.consequent, PREC_ASSIGN, state);
            state.add_token(" : ");
            emit_expression(&cond.alternate, PREC_ASSIGN, state);
        }
        Expression::Call(call) => {
            emit_expression(&call.callee, PREC_CALL, state);
            if call.optional {
                state.add_token("?.");
            }
            state.add_token("(");
            emit_list(&call.arguments, state);
            state.add_token(")");
        }
        Expression::New(new) => {
            state.add_token("new ");
            if has_call_in_chain(&new.callee) {
                state.add_token("(");
                emit_bare(&new.callee, state);
                state.add_token(")");
            } else {
                emit_expression(&new.callee, PREC_CALL, state);
            }
            state.add_token("(");
            emit_list(&new.arguments, state);
            state.add_token(")");
        }
        Expression::Member(member) => {
            if is_bare_integer(&member.object) {
                state.add_token("(");
                emit_bare(&member.object, state);
                state.add_token(")");
            } else {
                emit_expression(&member.object, PREC_CALL, state);
            }
            match (member.computed, member.optional) {
                (true, true) => state.add_token("?.["),
                (true, false) => state.add_token("["),
                (false, true) => state.add_token("?."),
                (false, false) => state.add_token("."),
            }
            emit_expression(&member.property, PREC_LOWEST, state);
            if member.computed {
                state.add_token("]");
            }
        }
        Expression::Sequence(seq) => emit_list(&seq.expressions, state),
        Expression::Unknown(unknown) => emit_unknown(unknown, state),
    }
}

pub(crate) fn emit_literal(lit: &Literal, state: &mut CodegenState<'_>) {
    if let Some(raw) = &lit.raw {
        state.add_token(raw);
        return;
    }
    match &lit.value {
        LiteralValue::String(s) => state.add_token(&quote(s)),
        LiteralValue::Number(n) => state.add_token(&format_number(*n)),
        LiteralValue::Boolean(b) => state.add_token(if *b { "true" } else { "false" }),
        LiteralValue::Null => state.add_token("null"),
        LiteralValue::RegExp { pattern, flags } => {
            state.add_token(&format!("/{pattern}/{flags}"));
        }
        LiteralValue::BigInt(digits) => state.add_token(&format!("{digits}n")),
    }
}

/// Single-quoted JavaScript string literal.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{}", n as i128)
    } else {
        format!("{n}")
    }
}

fn emit_params(params: &[Expression], state: &mut CodegenState<'_>) {
    state.add_token("(");
    emit_list(params, state);
    state.add_token(")");
}

/// `(params) { body }`: the part of a function shared with method syntax.
pub(crate) fn emit_function_tail(func: &Function, state: &mut CodegenState<'_>) {
    emit_params(&func.params, state);
    state.add_token(" ");
    emit_block(&func.body, state);
}

pub(crate) fn emit_function(func: &Function, state: &mut CodegenState<'_>) {
    if func.is_async {
        state.add_token("async ");
    }
    state.add_token("function");
    if func.is_generator {
        state.add_token("*");
    }
    if let Some(id) = &func.id {
        state.add_token(" ");
        state.add_token(&id.name);
    }
    emit_function_tail(func, state);
}

fn emit_arrow(arrow: &ArrowFunction, state: &mut CodegenState<'_>) {
    if arrow.is_async {
        state.add_token("async ");
    }
    emit_params(&arrow.params, state);
    state.add_token(" => ");
    match &arrow.body {
        ArrowBody::Block(block) => emit_block(block, state),
        // A body opening with `{` would be read as a block.
        ArrowBody::Expression(expr) if starts_ambiguously(expr) => {
            state.add_token("(");
            emit_expression(expr, PREC_ASSIGN, state);
            state.add_token(")");
        }
        ArrowBody::Expression(expr) => emit_expression(expr, PREC_ASSIGN, state),
    }
}

fn emit_property(property: &Property, state: &mut CodegenState<'_>) {
    let accessor = match property.kind {
        PropertyKind::Get => Some("get "),
        PropertyKind::Set => Some("set "),
        PropertyKind::Init => None,
    };
    let method = match &property.value {
        Expression::Function(func) if accessor.is_some() || property.method => Some(func),
        _ => None,
    };

    if let Some(func) = method {
        if let Some(accessor) = accessor {
            state.add_token(accessor);
        }
        if func.is_async {
            state.add_token("async ");
        }
        if func.is_generator {
            state.add_token("*");
        }
        emit_property_key(property, state);
        emit_function_tail(func, state);
        return;
    }

    if property.shorthand {
        // `{ a }` or, in patterns, `{ a = 1 }`.
        emit_expression(&property.value, PREC_ASSIGN, state);
        return;
    }

    emit_property_key(property, state);
    state.add_token(": ");
    emit_expression(&property.value, PREC_ASSIGN, state);
}

fn emit_property_key(property: &Property, state: &mut CodegenState<'_>) {
    if property.computed {
        state.add_token("[");
        emit_expression(&property.key, PREC_ASSIGN, state);
        state.add_token("]");
    } else {
        emit_expression(&property.key, PREC_LOWEST, state);
    }
}

/// `- -x` and `+ +x` need the space to avoid reading as `--x` / `++x`.
fn doubles_sign(operator: &str, argument: &Expression) -> bool {
    let next = match argument {
        Expression::Unary(inner) => inner.operator.as_str(),
        Expression::Update(inner) if inner.prefix => inner.operator.as_str(),
        _ => return false,
    };
    matches!(operator, "-" | "+") && next.starts_with(operator)
}

fn mixes_nullish(operator: &str, operand: &Expression) -> bool {
    let Expression::Logical(inner) = operand else {
        return false;
    };
    (operator == "??") != (inner.operator == "??")
}

fn has_call_in_chain(expr: &Expression) -> bool {
    match expr {
        Expression::Call(_) => true,
        Expression::Member(member) => has_call_in_chain(&member.object),
        _ => false,
    }
}

/// `1.toString()` parses as a malformed number; `(1).toString()` does not.
fn is_bare_integer(expr: &Expression) -> bool {
    match expr {
        Expression::Literal(lit) => match (&lit.value, &lit.raw) {
            (LiteralValue::Number(_), Some(raw)) => raw.bytes().all(|b| b.is_ascii_digit()),
            (LiteralValue::Number(n), None) => n.fract() == 0.0,
            _ => false,
        },
        _ => false,
    }
}

/// True if `expr`, printed at the start of a statement, would begin with a
/// token that makes the statement parse as something else.
pub(crate) fn starts_ambiguously(expr: &Expression) -> bool {
    match expr {
        Expression::Function(_) | Expression::Object(_) => true,
        Expression::Unknown(u) => matches!(u.kind.as_str(), "ClassExpression" | "ObjectPattern"),
        Expression::Call(call) => starts_ambiguously(&call.callee),
        Expression::Member(member) => starts_ambiguously(&member.object),
        Expression::Binary(b) | Expression::Logical(b) => {
            precedence(&b.left) >= binary_precedence(&b.operator) && starts_ambiguously(&b.left)
        }
        Expression::Assignment(a) => starts_ambiguously(&a.left),
        Expression::Conditional(c) => {
            precedence(&c.test) >= PREC_NULLISH && starts_ambiguously(&c.test)
        }
        Expression::Sequence(s) => s.expressions.first().is_some_and(starts_ambiguously),
        Expression::Update(u) if !u.prefix => starts_ambiguously(&u.argument),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn quoting() {
        assert_eq!(quote("it's"), "'it\\'s'");
        assert_eq!(quote("a\nb"), "'a\\nb'");
    }

    #[test]
    fn operator_table() {
        assert!(binary_precedence("*") > binary_precedence("+"));
        assert!(binary_precedence("&&") > binary_precedence("||"));
        assert!(binary_precedence("===") > binary_precedence("&"));
    }
}
