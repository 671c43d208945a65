// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An ESTree syntax tree model for JavaScript.
//!
//! This crate does not parse JavaScript itself. An external ESTree producer
//! writes the tree as JSON; this crate loads it, lets passes walk and rewrite
//! it in place, and prints it back out as source.
//!
//! # Overview
//!
//! - **Loading**: [`parse_tree`] turns ESTree JSON into a [`Program`].
//! - **Traversal**: the [`VisitorMut`] trait and the `walk_*` functions in
//!   [`visitor`] give pre-order, source-order traversal with mutable access.
//! - **Code Generation**: [`generate`] (or the [`Codegen`] trait) turns the
//!   tree back into source text.
//!
//! # Quick Start
//!
//! ```
//! use jstidy_estree::{generate, parse_tree};
//!
//! let json = r#"{"type": "Program", "body": [
//!     {"type": "ExpressionStatement",
//!      "expression": {"type": "Identifier", "name": "x"}}
//! ]}"#;
//! let program = parse_tree(json, None).expect("load error");
//! assert_eq!(generate(&program, None), "x;\n");
//! ```

/// Code generation from the tree.
pub mod codegen;
pub use codegen::{generate, generate_with_indent, Codegen, CodegenState};

/// Loading ESTree JSON.
pub mod loader;
pub use loader::{from_value, parse_tree, TreeError};

/// Syntax tree node types.
pub mod nodes;
pub use nodes::{Located, NodeId, NodeKind, Program};

/// Visitor infrastructure for tree traversal.
pub mod visitor;
pub use visitor::{VisitResult, VisitorMut};
