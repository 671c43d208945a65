// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Loading ESTree JSON into the typed tree.
//!
//! The parser is an external collaborator: any ESTree producer (espree, acorn,
//! Babel with the `estree` plugin) serialises its tree as JSON, and this
//! module turns that JSON into [`Program`].
//!
//! # Leniency
//!
//! Only the root is validated. Anywhere below it, a node whose kind is not
//! modelled, or whose required fields are missing or mistyped, is loaded as
//! an [`UnknownNode`]. Its recognisable children are still loaded, so the
//! rest of the pipeline degrades by omission instead of failing.
//!
//! A node's shape is checked before any of its children are loaded, so each
//! subtree is loaded once whichever way its parent ends up.
//!
//! # Positions
//!
//! Offsets come from `start`/`end` or `range`, positions from `loc.start`.
//! When source text is supplied, offsets (UTF-16 code units in ESTree) are
//! converted to byte spans and missing `loc` data is computed from the text.

use serde_json::{Map, Value};
use thiserror::Error;

use jstidy_core::text::SourceIndex;

use crate::nodes::*;

/// Fields never searched for children of unknown nodes.
const SKIP_KEYS: &[&str] = &[
    "type",
    "loc",
    "range",
    "start",
    "end",
    "comments",
    "tokens",
    "leadingComments",
    "trailingComments",
    "innerComments",
];

/// Error loading a tree. Only the root can fail.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The root value is not a JSON object.
    #[error("root node must be an object")]
    NotAnObject,

    /// The root object is not a `Program` node.
    #[error("root node has type '{found}', expected 'Program'")]
    NotAProgram { found: String },
}

/// Parse ESTree JSON text into a [`Program`].
///
/// `source` is the JavaScript text the tree was produced from. It is optional,
/// but without it spans stay in the producer's units and positions missing
/// from `loc` are zero.
pub fn parse_tree(json: &str, source: Option<&str>) -> Result<Program, TreeError> {
    let value: Value = serde_json::from_str(json)?;
    from_value(&value, source)
}

/// Convert an already-parsed ESTree JSON value into a [`Program`].
pub fn from_value(value: &Value, source: Option<&str>) -> Result<Program, TreeError> {
    let mut loader = Loader::new(source);
    loader.program(value)
}

struct Loader<'s> {
    index: Option<SourceIndex<'s>>,
    next_id: u32,
    unknown_count: usize,
}

impl<'s> Loader<'s> {
    fn new(source: Option<&'s str>) -> Self {
        Self {
            index: source.map(SourceIndex::new),
            next_id: 0,
            unknown_count: 0,
        }
    }

    fn next_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn program(&mut self, value: &Value) -> Result<Program, TreeError> {
        let obj = value.as_object().ok_or(TreeError::NotAnObject)?;
        let kind = type_of(obj).unwrap_or_default();
        if kind != "Program" {
            return Err(TreeError::NotAProgram {
                found: kind.to_string(),
            });
        }

        let (span, start) = self.location(obj);
        let body = self.statements(obj.get("body"));
        let source_type = match obj.get("sourceType").and_then(Value::as_str) {
            Some("module") => SourceType::Module,
            _ => SourceType::Script,
        };

        tracing::debug!(
            statements = body.len(),
            unknown_nodes = self.unknown_count,
            "loaded program"
        );

        Ok(Program {
            body,
            source_type,
            span,
            start,
        })
    }

    // ------------------------------------------------------------------------
    // Locations
    // ------------------------------------------------------------------------

    fn location(&self, obj: &Map<String, Value>) -> (Span, Position) {
        let range = obj.get("range").and_then(Value::as_array);
        let start_offset = obj
            .get("start")
            .and_then(Value::as_u64)
            .or_else(|| range.and_then(|r| r.first()).and_then(Value::as_u64))
            .unwrap_or(0);
        let end_offset = obj
            .get("end")
            .and_then(Value::as_u64)
            .or_else(|| range.and_then(|r| r.get(1)).and_then(Value::as_u64))
            .unwrap_or(start_offset);

        let loc_start = obj
            .get("loc")
            .and_then(|loc| loc.get("start"))
            .and_then(|start| {
                let line = start.get("line")?.as_u64()?;
                let column = start.get("column")?.as_u64()?;
                Some(Position::new(line as u32, column as u32, start_offset))
            });

        match &self.index {
            Some(index) => {
                let span = Span::new(
                    index.byte_offset(start_offset) as u64,
                    index.byte_offset(end_offset) as u64,
                );
                let position = loc_start.unwrap_or_else(|| index.position(start_offset));
                (span, position)
            }
            None => (
                Span::new(start_offset, end_offset),
                loc_start.unwrap_or_else(|| Position::new(0, 0, start_offset)),
            ),
        }
    }

    // ------------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------------

    fn statements(&mut self, value: Option<&Value>) -> Vec<Statement> {
        value
            .and_then(Value::as_array)
            .map(|items| items.iter().map(|item| self.statement(item)).collect())
            .unwrap_or_default()
    }

    fn statement(&mut self, value: &Value) -> Statement {
        self.try_statement(value)
            .unwrap_or_else(|| Statement::Unknown(self.unknown(value)))
    }

    fn try_statement(&mut self, value: &Value) -> Option<Statement> {
        let obj = value.as_object()?;
        let kind = NodeKind::from_estree(type_of(obj)?)?;
        if !is_well_formed(kind, obj) {
            return None;
        }
        let (span, start) = self.location(obj);

        let statement = match kind {
            NodeKind::ExpressionStatement => Statement::Expression(ExpressionStatement {
                expression: self.required_expression(obj.get("expression"))?,
                directive: obj
                    .get("directive")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                span,
                start,
            }),
            NodeKind::VariableDeclaration => {
                Statement::VariableDeclaration(self.variable_declaration(value)?)
            }
            NodeKind::FunctionDeclaration => {
                Statement::FunctionDeclaration(self.function(obj, span, start)?)
            }
            NodeKind::ReturnStatement => Statement::Return(ReturnStatement {
                argument: self.optional_expression(obj.get("argument")),
                span,
                start,
            }),
            NodeKind::IfStatement => Statement::If(IfStatement {
                test: self.required_expression(obj.get("test"))?,
                consequent: Box::new(self.required_statement(obj.get("consequent"))?),
                alternate: self.optional_statement(obj.get("alternate")).map(Box::new),
                span,
                start,
            }),
            NodeKind::BlockStatement => Statement::Block(self.block(value)?),
            NodeKind::ForStatement => Statement::For(ForStatement {
                init: obj
                    .get("init")
                    .filter(|v| v.is_object())
                    .map(|v| self.for_head(v)),
                test: self.optional_expression(obj.get("test")),
                update: self.optional_expression(obj.get("update")),
                body: Box::new(self.required_statement(obj.get("body"))?),
                span,
                start,
            }),
            NodeKind::ForInStatement | NodeKind::ForOfStatement => {
                let node = ForInStatement {
                    left: self.for_head(obj.get("left").filter(|v| v.is_object())?),
                    right: self.required_expression(obj.get("right"))?,
                    body: Box::new(self.required_statement(obj.get("body"))?),
                    is_await: flag(obj, "await"),
                    span,
                    start,
                };
                if kind == NodeKind::ForInStatement {
                    Statement::ForIn(node)
                } else {
                    Statement::ForOf(node)
                }
            }
            NodeKind::WhileStatement => Statement::While(WhileStatement {
                test: self.required_expression(obj.get("test"))?,
                body: Box::new(self.required_statement(obj.get("body"))?),
                span,
                start,
            }),
            NodeKind::DoWhileStatement => Statement::DoWhile(DoWhileStatement {
                body: Box::new(self.required_statement(obj.get("body"))?),
                test: self.required_expression(obj.get("test"))?,
                span,
                start,
            }),
            NodeKind::BreakStatement | NodeKind::ContinueStatement => {
                let node = JumpStatement {
                    label: self.optional_identifier(obj.get("label"))?,
                    span,
                    start,
                };
                if kind == NodeKind::BreakStatement {
                    Statement::Break(node)
                } else {
                    Statement::Continue(node)
                }
            }
            NodeKind::ThrowStatement => Statement::Throw(ThrowStatement {
                argument: self.required_expression(obj.get("argument"))?,
                span,
                start,
            }),
            NodeKind::TryStatement => Statement::Try(TryStatement {
                block: self.block(obj.get("block")?)?,
                handler: match obj.get("handler").filter(|v| v.is_object()) {
                    Some(handler) => Some(self.catch_clause(handler)?),
                    None => None,
                },
                finalizer: match obj.get("finalizer").filter(|v| v.is_object()) {
                    Some(finalizer) => Some(self.block(finalizer)?),
                    None => None,
                },
                span,
                start,
            }),
            NodeKind::SwitchStatement => Statement::Switch(SwitchStatement {
                discriminant: self.required_expression(obj.get("discriminant"))?,
                cases: obj
                    .get("cases")
                    .and_then(Value::as_array)
                    .map(|cases| {
                        cases
                            .iter()
                            .map(|case| self.switch_case(case))
                            .collect::<Option<Vec<_>>>()
                    })
                    .unwrap_or(Some(Vec::new()))?,
                span,
                start,
            }),
            NodeKind::EmptyStatement => Statement::Empty(EmptyStatement { span, start }),
            _ => return None,
        };
        Some(statement)
    }

    fn required_statement(&mut self, value: Option<&Value>) -> Option<Statement> {
        value.filter(|v| v.is_object()).map(|v| self.statement(v))
    }

    fn optional_statement(&mut self, value: Option<&Value>) -> Option<Statement> {
        self.required_statement(value)
    }

    fn variable_declaration(&mut self, value: &Value) -> Option<VariableDeclaration> {
        let obj = value.as_object()?;
        if !is_well_formed(NodeKind::VariableDeclaration, obj) {
            return None;
        }
        let id = self.next_id();
        let (span, start) = self.location(obj);
        let kind = DeclarationKind::parse(obj.get("kind")?.as_str()?)?;

        let mut declarations = Vec::new();
        if let Some(items) = obj.get("declarations").and_then(Value::as_array) {
            for item in items {
                let decl = item.as_object()?;
                if type_of(decl)? != "VariableDeclarator" {
                    return None;
                }
                let (span, start) = self.location(decl);
                declarations.push(VariableDeclarator {
                    id: self.required_expression(decl.get("id"))?,
                    init: self.optional_expression(decl.get("init")),
                    span,
                    start,
                });
            }
        }

        Some(VariableDeclaration {
            id,
            kind,
            declarations,
            span,
            start,
        })
    }

    fn for_head(&mut self, value: &Value) -> ForHead {
        let is_declaration = value
            .as_object()
            .and_then(type_of)
            .is_some_and(|kind| kind == "VariableDeclaration");
        if is_declaration {
            if let Some(decl) = self.variable_declaration(value) {
                return ForHead::Declaration(decl);
            }
        }
        ForHead::Expression(self.expression(value))
    }

    fn block(&mut self, value: &Value) -> Option<BlockStatement> {
        let obj = value.as_object()?;
        if type_of(obj)? != "BlockStatement" {
            return None;
        }
        let (span, start) = self.location(obj);
        Some(BlockStatement {
            body: self.statements(obj.get("body")),
            span,
            start,
        })
    }

    fn catch_clause(&mut self, value: &Value) -> Option<CatchClause> {
        let obj = value.as_object()?;
        if type_of(obj)? != "CatchClause" {
            return None;
        }
        let (span, start) = self.location(obj);
        Some(CatchClause {
            param: self.optional_expression(obj.get("param")),
            body: self.block(obj.get("body")?)?,
            span,
            start,
        })
    }

    fn switch_case(&mut self, value: &Value) -> Option<SwitchCase> {
        let obj = value.as_object()?;
        if type_of(obj)? != "SwitchCase" {
            return None;
        }
        let (span, start) = self.location(obj);
        Some(SwitchCase {
            test: self.optional_expression(obj.get("test")),
            consequent: self.statements(obj.get("consequent")),
            span,
            start,
        })
    }

    fn function(
        &mut self,
        obj: &Map<String, Value>,
        span: Span,
        start: Position,
    ) -> Option<Function> {
        Some(Function {
            id: self.optional_identifier(obj.get("id"))?,
            params: self.expressions(obj.get("params")),
            body: self.block(obj.get("body")?)?,
            is_async: flag(obj, "async"),
            is_generator: flag(obj, "generator"),
            span,
            start,
        })
    }

    // ------------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------------

    fn expression(&mut self, value: &Value) -> Expression {
        self.try_expression(value)
            .unwrap_or_else(|| Expression::Unknown(self.unknown(value)))
    }

    fn required_expression(&mut self, value: Option<&Value>) -> Option<Expression> {
        value.filter(|v| v.is_object()).map(|v| self.expression(v))
    }

    fn optional_expression(&mut self, value: Option<&Value>) -> Option<Expression> {
        self.required_expression(value)
    }

    fn expressions(&mut self, value: Option<&Value>) -> Vec<Expression> {
        value
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter(|item| item.is_object())
                    .map(|item| self.expression(item))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `Some(None)` when absent or null, `None` when present but malformed.
    fn optional_identifier(&mut self, value: Option<&Value>) -> Option<Option<Identifier>> {
        match value.filter(|v| !v.is_null()) {
            None => Some(None),
            Some(v) => match self.try_expression(v)? {
                Expression::Identifier(ident) => Some(Some(ident)),
                _ => None,
            },
        }
    }

    fn try_expression(&mut self, value: &Value) -> Option<Expression> {
        let obj = value.as_object()?;
        let kind = NodeKind::from_estree(type_of(obj)?)?;
        if !is_well_formed(kind, obj) {
            return None;
        }
        let (span, start) = self.location(obj);

        let expression = match kind {
            NodeKind::Identifier => Expression::Identifier(Identifier {
                name: obj.get("name")?.as_str()?.to_string(),
                span,
                start,
            }),
            NodeKind::Literal => Expression::Literal(Literal {
                value: literal_value(obj),
                raw: obj.get("raw").and_then(Value::as_str).map(str::to_string),
                span,
                start,
            }),
            NodeKind::ThisExpression => Expression::This(ThisExpression { span, start }),
            NodeKind::ArrayExpression => Expression::Array(ArrayExpression {
                elements: obj
                    .get("elements")
                    .and_then(Value::as_array)
                    .map(|items| {
                        items
                            .iter()
                            .map(|item| item.is_object().then(|| self.expression(item)))
                            .collect()
                    })
                    .unwrap_or_default(),
                span,
                start,
            }),
            NodeKind::ObjectExpression => Expression::Object(ObjectExpression {
                properties: obj
                    .get("properties")
                    .and_then(Value::as_array)
                    .map(|items| {
                        items
                            .iter()
                            .filter(|item| item.is_object())
                            .map(|item| self.object_member(item))
                            .collect()
                    })
                    .unwrap_or_default(),
                span,
                start,
            }),
            NodeKind::SpreadElement => Expression::Spread(SpreadElement {
                argument: Box::new(self.required_expression(obj.get("argument"))?),
                span,
                start,
            }),
            NodeKind::FunctionExpression => {
                Expression::Function(Box::new(self.function(obj, span, start)?))
            }
            NodeKind::ArrowFunctionExpression => {
                let body_value = obj.get("body").filter(|v| v.is_object())?;
                let body_is_block = body_value
                    .as_object()
                    .and_then(type_of)
                    .is_some_and(|kind| kind == "BlockStatement");
                let params = self.expressions(obj.get("params"));
                let body = if body_is_block {
                    ArrowBody::Block(self.block(body_value)?)
                } else {
                    ArrowBody::Expression(self.expression(body_value))
                };
                Expression::Arrow(Box::new(ArrowFunction {
                    params,
                    body,
                    is_async: flag(obj, "async"),
                    span,
                    start,
                }))
            }
            NodeKind::UnaryExpression => Expression::Unary(Box::new(UnaryExpression {
                operator: operator(obj)?,
                argument: self.required_expression(obj.get("argument"))?,
                span,
                start,
            })),
            NodeKind::UpdateExpression => Expression::Update(Box::new(UpdateExpression {
                operator: operator(obj)?,
                prefix: flag(obj, "prefix"),
                argument: self.required_expression(obj.get("argument"))?,
                span,
                start,
            })),
            NodeKind::BinaryExpression | NodeKind::LogicalExpression => {
                let node = Box::new(BinaryExpression {
                    operator: operator(obj)?,
                    left: self.required_expression(obj.get("left"))?,
                    right: self.required_expression(obj.get("right"))?,
                    span,
                    start,
                });
                if kind == NodeKind::BinaryExpression {
                    Expression::Binary(node)
                } else {
                    Expression::Logical(node)
                }
            }
            NodeKind::AssignmentExpression => {
                Expression::Assignment(Box::new(AssignmentExpression {
                    operator: operator(obj)?,
                    left: self.required_expression(obj.get("left"))?,
                    right: self.required_expression(obj.get("right"))?,
                    span,
                    start,
                }))
            }
            NodeKind::ConditionalExpression => {
                Expression::Conditional(Box::new(ConditionalExpression {
                    test: self.required_expression(obj.get("test"))?,
                    consequent: self.required_expression(obj.get("consequent"))?,
                    alternate: self.required_expression(obj.get("alternate"))?,
                    span,
                    start,
                }))
            }
            NodeKind::CallExpression => Expression::Call(Box::new(CallExpression {
                callee: self.required_expression(obj.get("callee"))?,
                arguments: self.expressions(obj.get("arguments")),
                optional: flag(obj, "optional"),
                span,
                start,
            })),
            NodeKind::NewExpression => Expression::New(Box::new(NewExpression {
                callee: self.required_expression(obj.get("callee"))?,
                arguments: self.expressions(obj.get("arguments")),
                span,
                start,
            })),
            NodeKind::MemberExpression => Expression::Member(Box::new(MemberExpression {
                object: self.required_expression(obj.get("object"))?,
                property: self.required_expression(obj.get("property"))?,
                computed: flag(obj, "computed"),
                optional: flag(obj, "optional"),
                span,
                start,
            })),
            NodeKind::SequenceExpression => Expression::Sequence(SequenceExpression {
                expressions: self.expressions(obj.get("expressions")),
                span,
                start,
            }),
            _ => return None,
        };
        Some(expression)
    }

    fn object_member(&mut self, value: &Value) -> ObjectMember {
        let kind = value.as_object().and_then(type_of);
        match kind {
            Some("Property") => match self.property(value) {
                Some(property) => ObjectMember::Property(property),
                None => ObjectMember::Unknown(self.unknown(value)),
            },
            Some("SpreadElement") => match self.try_expression(value) {
                Some(Expression::Spread(spread)) => ObjectMember::Spread(spread),
                _ => ObjectMember::Unknown(self.unknown(value)),
            },
            _ => ObjectMember::Unknown(self.unknown(value)),
        }
    }

    fn property(&mut self, value: &Value) -> Option<Property> {
        let obj = value.as_object()?;
        let kind = match obj.get("kind").and_then(Value::as_str).unwrap_or("init") {
            "init" => PropertyKind::Init,
            "get" => PropertyKind::Get,
            "set" => PropertyKind::Set,
            _ => return None,
        };
        if !(is_node(obj.get("key")) && is_node(obj.get("value"))) {
            return None;
        }
        let (span, start) = self.location(obj);
        Some(Property {
            key: self.required_expression(obj.get("key"))?,
            value: self.required_expression(obj.get("value"))?,
            kind,
            computed: flag(obj, "computed"),
            shorthand: flag(obj, "shorthand"),
            method: flag(obj, "method"),
            span,
            start,
        })
    }

    // ------------------------------------------------------------------------
    // Unknown nodes
    // ------------------------------------------------------------------------

    fn unknown(&mut self, value: &Value) -> UnknownNode {
        self.unknown_count += 1;
        let Some(obj) = value.as_object() else {
            return UnknownNode {
                kind: String::new(),
                children: Vec::new(),
                span: Span::default(),
                start: Position::default(),
            };
        };

        let kind = type_of(obj).unwrap_or_default().to_string();
        tracing::trace!(kind = %kind, "loading unmodelled node");
        let (span, start) = self.location(obj);

        let mut children = Vec::new();
        for (key, field) in obj {
            if SKIP_KEYS.contains(&key.as_str()) {
                continue;
            }
            match field {
                Value::Object(child) if type_of(child).is_some() => {
                    children.push(self.child(field));
                }
                Value::Array(items) => {
                    for item in items {
                        if item.as_object().and_then(type_of).is_some() {
                            children.push(self.child(item));
                        }
                    }
                }
                _ => {}
            }
        }
        children.sort_by_key(|child| child.span().start);

        UnknownNode {
            kind,
            children,
            span,
            start,
        }
    }

    fn child(&mut self, value: &Value) -> Child {
        let kind = value.as_object().and_then(type_of).unwrap_or_default();
        if is_statement_type(kind) {
            Child::Statement(self.statement(value))
        } else {
            Child::Expression(self.expression(value))
        }
    }
}

// ============================================================================
// Shape checks
// ============================================================================

/// Whether `obj` has every field the typed node of `kind` requires.
///
/// Checks fields and the `type` of directly required sub-nodes only; child
/// subtrees are not descended into. A node that passes always loads as
/// `kind`, never falling back to [`UnknownNode`] halfway through.
fn is_well_formed(kind: NodeKind, obj: &Map<String, Value>) -> bool {
    let node = |key: &str| is_node(obj.get(key));
    let has_operator = || obj.get("operator").is_some_and(Value::is_string);
    match kind {
        NodeKind::ExpressionStatement => node("expression"),
        NodeKind::VariableDeclaration => {
            type_of(obj) == Some("VariableDeclaration")
                && obj
                    .get("kind")
                    .and_then(Value::as_str)
                    .and_then(DeclarationKind::parse)
                    .is_some()
                && obj
                    .get("declarations")
                    .and_then(Value::as_array)
                    .is_none_or(|items| items.iter().all(is_declarator))
        }
        NodeKind::FunctionDeclaration | NodeKind::FunctionExpression => {
            is_identifier_or_absent(obj.get("id")) && is_node_of(obj.get("body"), "BlockStatement")
        }
        NodeKind::IfStatement => node("test") && node("consequent"),
        NodeKind::ForStatement => node("body"),
        NodeKind::ForInStatement | NodeKind::ForOfStatement => {
            node("left") && node("right") && node("body")
        }
        NodeKind::WhileStatement | NodeKind::DoWhileStatement => node("test") && node("body"),
        NodeKind::BreakStatement | NodeKind::ContinueStatement => {
            is_identifier_or_absent(obj.get("label"))
        }
        NodeKind::ThrowStatement | NodeKind::SpreadElement => node("argument"),
        NodeKind::TryStatement => {
            let handler_ok = match obj.get("handler").filter(|v| v.is_object()) {
                Some(handler) => {
                    handler.as_object().and_then(type_of) == Some("CatchClause")
                        && is_node_of(handler.get("body"), "BlockStatement")
                }
                None => true,
            };
            let finalizer_ok = match obj.get("finalizer").filter(|v| v.is_object()) {
                Some(finalizer) => is_node_of(Some(finalizer), "BlockStatement"),
                None => true,
            };
            is_node_of(obj.get("block"), "BlockStatement") && handler_ok && finalizer_ok
        }
        NodeKind::SwitchStatement => {
            node("discriminant")
                && obj
                    .get("cases")
                    .and_then(Value::as_array)
                    .is_none_or(|cases| cases.iter().all(|c| is_node_of(Some(c), "SwitchCase")))
        }
        NodeKind::Identifier => obj.get("name").is_some_and(Value::is_string),
        NodeKind::ArrowFunctionExpression => node("body"),
        NodeKind::UnaryExpression | NodeKind::UpdateExpression => {
            has_operator() && node("argument")
        }
        NodeKind::BinaryExpression
        | NodeKind::LogicalExpression
        | NodeKind::AssignmentExpression => has_operator() && node("left") && node("right"),
        NodeKind::ConditionalExpression => {
            node("test") && node("consequent") && node("alternate")
        }
        NodeKind::CallExpression | NodeKind::NewExpression => node("callee"),
        NodeKind::MemberExpression => node("object") && node("property"),
        _ => true,
    }
}

fn is_node(value: Option<&Value>) -> bool {
    value.is_some_and(Value::is_object)
}

fn is_node_of(value: Option<&Value>, kind: &str) -> bool {
    value.and_then(Value::as_object).and_then(type_of) == Some(kind)
}

/// Absent, `null`, or an `Identifier` with a name.
fn is_identifier_or_absent(value: Option<&Value>) -> bool {
    match value.filter(|v| !v.is_null()) {
        None => true,
        Some(v) => v.as_object().is_some_and(|obj| {
            type_of(obj) == Some("Identifier") && obj.get("name").is_some_and(Value::is_string)
        }),
    }
}

fn is_declarator(value: &Value) -> bool {
    value.as_object().is_some_and(|decl| {
        type_of(decl) == Some("VariableDeclarator") && is_node(decl.get("id"))
    })
}

// ============================================================================
// Field helpers
// ============================================================================

fn type_of(obj: &Map<String, Value>) -> Option<&str> {
    obj.get("type").and_then(Value::as_str)
}

fn flag(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn operator(obj: &Map<String, Value>) -> Option<String> {
    obj.get("operator")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn literal_value(obj: &Map<String, Value>) -> LiteralValue {
    if let Some(regex) = obj.get("regex") {
        let text = |key: &str| {
            regex
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        return LiteralValue::RegExp {
            pattern: text("pattern"),
            flags: text("flags"),
        };
    }
    if let Some(bigint) = obj.get("bigint").and_then(Value::as_str) {
        return LiteralValue::BigInt(bigint.to_string());
    }
    match obj.get("value") {
        Some(Value::String(s)) => LiteralValue::String(s.clone()),
        Some(Value::Number(n)) => LiteralValue::Number(n.as_f64().unwrap_or_default()),
        Some(Value::Bool(b)) => LiteralValue::Boolean(*b),
        _ => LiteralValue::Null,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ident(name: &str, start: u64) -> Value {
        let end = start + name.len() as u64;
        json!({"type": "Identifier", "name": name, "start": start, "end": end})
    }

    #[test]
    fn rejects_non_program_root() {
        let err = from_value(&json!({"type": "Identifier", "name": "x"}), None).unwrap_err();
        assert!(matches!(err, TreeError::NotAProgram { found } if found == "Identifier"));
    }

    #[test]
    fn rejects_non_object_root() {
        assert!(matches!(
            from_value(&json!([1, 2]), None),
            Err(TreeError::NotAnObject)
        ));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(parse_tree("{", None), Err(TreeError::Json(_))));
    }

    #[test]
    fn loads_declaration_with_loc() {
        let tree = json!({
            "type": "Program", "start": 0, "end": 10, "sourceType": "module",
            "body": [{
                "type": "VariableDeclaration", "kind": "var", "start": 0, "end": 10,
                "loc": {"start": {"line": 1, "column": 0}, "end": {"line": 1, "column": 10}},
                "declarations": [{
                    "type": "VariableDeclarator", "start": 4, "end": 9,
                    "id": ident("x", 4),
                    "init": {"type": "Literal", "value": 1, "raw": "1", "start": 8, "end": 9}
                }]
            }]
        });
        let program = from_value(&tree, None).unwrap();
        assert_eq!(program.source_type, SourceType::Module);
        let Statement::VariableDeclaration(decl) = &program.body[0] else {
            panic!("expected declaration, got {:?}", program.body[0]);
        };
        assert_eq!(decl.kind, DeclarationKind::Var);
        assert_eq!(decl.first_name(), Some("x"));
        assert_eq!(decl.start, Position::new(1, 0, 0));
        assert_eq!(decl.span, Span::new(0, 10));
    }

    #[test]
    fn declaration_ids_are_preorder() {
        let decl = |start: u64| {
            json!({
                "type": "VariableDeclaration", "kind": "let", "start": start, "declarations": []
            })
        };
        let tree = json!({
            "type": "Program",
            "body": [
                decl(0),
                {"type": "BlockStatement", "start": 10, "body": [decl(11)]},
                decl(20)
            ]
        });
        let program = from_value(&tree, None).unwrap();
        let ids: Vec<u32> = program
            .body
            .iter()
            .filter_map(|s| match s {
                Statement::VariableDeclaration(d) => Some(d.id.as_u32()),
                Statement::Block(b) => match &b.body[0] {
                    Statement::VariableDeclaration(d) => Some(d.id.as_u32()),
                    _ => None,
                },
                _ => None,
            })
            .collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn positions_computed_from_source_when_loc_missing() {
        let source = "a;\nb;";
        let tree = json!({
            "type": "Program", "start": 0, "end": 5,
            "body": [
                {"type": "ExpressionStatement", "start": 0, "end": 2, "expression": ident("a", 0)},
                {"type": "ExpressionStatement", "start": 3, "end": 5, "expression": ident("b", 3)}
            ]
        });
        let program = from_value(&tree, Some(source)).unwrap();
        assert_eq!(program.body[1].start(), Position::new(2, 0, 3));
    }

    #[test]
    fn range_is_accepted_instead_of_start_end() {
        let tree = json!({
            "type": "Program", "range": [0, 2],
            "body": [{"type": "EmptyStatement", "range": [1, 2]}]
        });
        let program = from_value(&tree, None).unwrap();
        assert_eq!(program.body[0].span(), Span::new(1, 2));
    }

    #[test]
    fn malformed_known_node_becomes_unknown_with_children() {
        // IfStatement without `test` keeps its consequent reachable.
        let tree = json!({
            "type": "Program",
            "body": [{
                "type": "IfStatement", "start": 0,
                "consequent": {
                    "type": "ExpressionStatement", "start": 5, "expression": ident("x", 5)
                }
            }]
        });
        let program = from_value(&tree, None).unwrap();
        let Statement::Unknown(unknown) = &program.body[0] else {
            panic!("expected unknown node");
        };
        assert_eq!(unknown.kind, "IfStatement");
        assert_eq!(unknown.children.len(), 1);
        assert!(matches!(unknown.children[0], Child::Statement(Statement::Expression(_))));
    }

    #[test]
    fn nested_malformed_nodes_load_each_subtree_once() {
        // Every level is a DoWhileStatement missing `test`.
        let depth = 64;
        let mut node = json!({"type": "VariableDeclaration", "kind": "var", "declarations": [
            {"type": "VariableDeclarator", "id": ident("x", 0), "init": null}
        ]});
        for _ in 0..depth {
            node = json!({"type": "DoWhileStatement", "body": node});
        }
        let program = from_value(&json!({"type": "Program", "body": [node]}), None).unwrap();

        let mut stmt = &program.body[0];
        for _ in 0..depth {
            let Statement::Unknown(unknown) = stmt else {
                panic!("expected unknown node, got {stmt:?}");
            };
            assert_eq!(unknown.kind, "DoWhileStatement");
            assert_eq!(unknown.children.len(), 1);
            let Child::Statement(child) = &unknown.children[0] else {
                panic!("expected statement child");
            };
            stmt = child;
        }
        let Statement::VariableDeclaration(decl) = stmt else {
            panic!("expected declaration, got {stmt:?}");
        };
        assert_eq!(decl.id, NodeId::new(0));
    }

    #[test]
    fn declarator_without_id_makes_declaration_unknown() {
        let tree = json!({"type": "Program", "body": [
            {"type": "VariableDeclaration", "kind": "var", "declarations": [
                {"type": "VariableDeclarator", "init": ident("y", 0)}
            ]},
            {"type": "VariableDeclaration", "kind": "let", "declarations": []}
        ]});
        let program = from_value(&tree, None).unwrap();
        assert!(matches!(
            &program.body[0],
            Statement::Unknown(u) if u.kind == "VariableDeclaration"
        ));
        let Statement::VariableDeclaration(decl) = &program.body[1] else {
            panic!("expected declaration");
        };
        assert_eq!(decl.id, NodeId::new(0));
    }

    #[test]
    fn unmodelled_kind_keeps_children_in_source_order() {
        let tree = json!({
            "type": "Program",
            "body": [{
                "type": "ExpressionStatement", "start": 0,
                "expression": {
                    "type": "TemplateLiteral", "start": 0, "end": 12,
                    "quasis": [
                        {"type": "TemplateElement", "start": 1, "end": 3,
                         "value": {"raw": "a ", "cooked": "a "}},
                        {"type": "TemplateElement", "start": 7, "end": 11,
                         "value": {"raw": " b", "cooked": " b"}}
                    ],
                    "expressions": [ident("x", 5)]
                }
            }]
        });
        let program = from_value(&tree, None).unwrap();
        let Statement::Expression(stmt) = &program.body[0] else {
            panic!("expected expression statement");
        };
        let Expression::Unknown(template) = &stmt.expression else {
            panic!("expected unknown template literal");
        };
        let starts: Vec<u64> = template.children.iter().map(|c| c.span().start).collect();
        assert_eq!(starts, vec![1, 5, 7]);
    }

    #[test]
    fn comments_are_not_children() {
        let tree = json!({
            "type": "Program",
            "body": [{
                "type": "ClassDeclaration", "start": 0,
                "leadingComments": [{"type": "Line", "value": " hi", "start": 0}],
                "id": ident("A", 6)
            }]
        });
        let program = from_value(&tree, None).unwrap();
        let Statement::Unknown(class) = &program.body[0] else {
            panic!("expected unknown class");
        };
        assert_eq!(class.children.len(), 1);
    }

    #[test]
    fn literal_values() {
        let regex = json!({
            "type": "Literal", "value": {}, "raw": "/a/g",
            "regex": {"pattern": "a", "flags": "g"}
        });
        let mut loader = Loader::new(None);
        let Expression::Literal(lit) = loader.expression(&regex) else {
            panic!("expected literal");
        };
        assert_eq!(
            lit.value,
            LiteralValue::RegExp {
                pattern: "a".to_string(),
                flags: "g".to_string()
            }
        );
        assert_eq!(lit.raw.as_deref(), Some("/a/g"));
    }

    #[test]
    fn declaration_without_declarators_is_kept() {
        let tree = json!({
            "type": "Program",
            "body": [{"type": "VariableDeclaration", "kind": "var"}]
        });
        let program = from_value(&tree, None).unwrap();
        let Statement::VariableDeclaration(decl) = &program.body[0] else {
            panic!("expected declaration");
        };
        assert!(decl.declarations.is_empty());
        assert_eq!(decl.first_name(), None);
    }

    #[test]
    fn utf16_offsets_become_byte_spans() {
        let source = "'é';x;";
        let tree = json!({
            "type": "Program", "start": 0, "end": 6,
            "body": [
                {"type": "ExpressionStatement", "start": 0, "end": 4,
                 "expression": {
                     "type": "Literal", "value": "é", "raw": "'é'", "start": 0, "end": 3
                 }},
                {"type": "ExpressionStatement", "start": 4, "end": 6, "expression": ident("x", 4)}
            ]
        });
        let program = from_value(&tree, Some(source)).unwrap();
        let span = program.body[1].span();
        assert_eq!(span.slice(source), Some("x;"));
        assert_eq!(program.body[1].start().offset, 4);
    }
}
