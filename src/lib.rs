//! jstidy: a JavaScript style rewriter
//!
//! Takes an ESTree syntax tree, rewrites it in place to a house style
//! (single quotes, no `var`, `const` for single-use bindings, no top-level
//! console calls) and reports each reportable change as a diagnostic.

// Core infrastructure - re-exported from jstidy-core
pub use jstidy_core::config;
pub use jstidy_core::diagnostics;
pub use jstidy_core::error;
pub use jstidy_core::output;
pub use jstidy_core::text;
pub use jstidy_core::types;

// Tree model - re-exported from jstidy-estree
pub use jstidy_estree as estree;

// Rewriting engine
pub mod processor;

// Front door
pub mod cli;

// Error bridges - converts crate-specific errors to TidyError
mod error_bridges;
