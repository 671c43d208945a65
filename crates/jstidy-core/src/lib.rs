//! Core infrastructure for jstidy.
//!
//! This crate provides the language-agnostic pieces shared by the tree crate,
//! the rewriting engine and the CLI:
//! - Diagnostic records and the ordered diagnostics collector
//! - Error types and error codes
//! - Source spans and positions
//! - Byte offset to line:column conversion
//! - Configuration loading
//! - JSON output types for CLI responses

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod output;
pub mod text;
pub mod types;
