//! Shared test support utilities.
//!
//! ESTree fixtures are written as `serde_json` values with explicit source
//! offsets. Builders take a node's start offset and derive its end from its
//! text or its last child, so a fixture only spells out where each token
//! begins. Line and column are computed by the loader from the source text.

#![allow(dead_code)]

use jstidy::estree::{from_value, generate, Program};
use jstidy::processor::Processor;
use serde_json::{json, Value};

/// Display name used for every fixture.
pub const FILE: &str = "f.js";

pub fn start_of(node: &Value) -> u64 {
    node["start"].as_u64().expect("node has a start")
}

pub fn end_of(node: &Value) -> u64 {
    node["end"].as_u64().expect("node has an end")
}

pub fn program(body: Vec<Value>, end: u64) -> Value {
    json!({"type": "Program", "sourceType": "script", "start": 0, "end": end, "body": body})
}

pub fn ident(name: &str, start: u64) -> Value {
    let end = start + name.len() as u64;
    json!({"type": "Identifier", "name": name, "start": start, "end": end})
}

pub fn num(raw: &str, start: u64) -> Value {
    let value: f64 = raw.parse().expect("numeric literal");
    let end = start + raw.len() as u64;
    json!({"type": "Literal", "value": value, "raw": raw, "start": start, "end": end})
}

/// A string literal; `raw` includes its quotes.
pub fn string(raw: &str, start: u64) -> Value {
    let value = &raw[1..raw.len() - 1];
    let end = start + raw.len() as u64;
    json!({"type": "Literal", "value": value, "raw": raw, "start": start, "end": end})
}

/// `kind name = init;` starting at `start`. The name sits after the keyword
/// and one space; the statement ends one past `init` (the semicolon).
pub fn declaration(kind: &str, name: &str, init: Value, start: u64) -> Value {
    let id = ident(name, start + kind.len() as u64 + 1);
    let declarator = json!({
        "type": "VariableDeclarator", "start": start_of(&id), "end": end_of(&init),
        "id": id, "init": init
    });
    json!({
        "type": "VariableDeclaration", "kind": kind,
        "start": start, "end": end_of(&init) + 1,
        "declarations": [declarator]
    })
}

pub fn assign(left: Value, right: Value) -> Value {
    json!({
        "type": "AssignmentExpression", "operator": "=",
        "start": start_of(&left), "end": end_of(&right),
        "left": left, "right": right
    })
}

/// `object.property`
pub fn member(object: Value, property: Value) -> Value {
    json!({
        "type": "MemberExpression", "computed": false, "optional": false,
        "start": start_of(&object), "end": end_of(&property),
        "object": object, "property": property
    })
}

/// A call ending at `end` (one past the closing paren).
pub fn call(callee: Value, arguments: Vec<Value>, end: u64) -> Value {
    json!({
        "type": "CallExpression", "optional": false,
        "start": start_of(&callee), "end": end,
        "callee": callee, "arguments": arguments
    })
}

/// `expression;`
pub fn stmt(expression: Value) -> Value {
    json!({
        "type": "ExpressionStatement",
        "start": start_of(&expression), "end": end_of(&expression) + 1,
        "expression": expression
    })
}

/// `<object>.<method>(args);` starting at `start`, with `args` listed as
/// already-positioned nodes.
pub fn console_call(object: &str, method: &str, arguments: Vec<Value>, start: u64) -> Value {
    let callee = member(
        ident(object, start),
        ident(method, start + object.len() as u64 + 1),
    );
    let end = match arguments.last() {
        Some(last) => end_of(last) + 1,
        None => end_of(&callee) + 2,
    };
    stmt(call(callee, arguments, end))
}

pub fn load(source: &str, tree: &Value) -> Program {
    from_value(tree, Some(source)).expect("tree should load")
}

/// Run the processor over a fixture and return the generated code and the
/// rendered diagnostics.
pub fn run(source: &str, tree: &Value) -> (String, Vec<String>) {
    let mut program = load(source, tree);
    let mut processor = Processor::new(FILE);
    processor.process(&mut program);
    let diagnostics = processor
        .diagnostics()
        .iter()
        .map(ToString::to_string)
        .collect();
    (generate(&program, Some(source)), diagnostics)
}
