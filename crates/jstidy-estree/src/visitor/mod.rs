// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for tree traversal.
//!
//! The design follows a hybrid approach: macro-generated trait method
//! signatures with hand-written walk functions for each node kind.
//!
//! # Traversal Order
//!
//! - **Depth-first, pre-order** for `visit_*` methods
//! - **Post-order** for `leave_*` methods
//! - Children are visited in source order
//!
//! # Visitor Pattern
//!
//! The [`VisitorMut`] trait hands every node to its hooks by mutable
//! reference, so rewriting passes and read-only analyses share one walker:
//!
//! ```ignore
//! use jstidy_estree::visitor::{walk_program, VisitorMut, VisitResult};
//! use jstidy_estree::nodes::Identifier;
//!
//! struct NameCounter {
//!     count: usize,
//! }
//!
//! impl VisitorMut for NameCounter {
//!     fn visit_identifier(&mut self, _node: &mut Identifier) -> VisitResult {
//!         self.count += 1;
//!         VisitResult::Continue
//!     }
//! }
//!
//! let mut counter = NameCounter { count: 0 };
//! walk_program(&mut counter, &mut program);
//! ```

mod dispatch;
mod traits;

pub use dispatch::*;
pub use traits::{VisitResult, VisitorMut};
