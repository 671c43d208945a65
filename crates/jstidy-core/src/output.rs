//! JSON output types for CLI responses.
//!
//! With `--json` the CLI prints exactly one response object to stdout:
//! a [`LintResponse`] on success or an [`ErrorResponse`] on failure.
//! Both carry `status` and `schema_version` so consumers can branch without
//! inspecting the rest of the payload.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;
use crate::error::{OutputErrorCode, TidyError};

/// Version of the JSON response schema.
pub const SCHEMA_VERSION: &str = "1";

/// Successful lint run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LintResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Response schema version.
    pub schema_version: String,
    /// Display name of the processed file.
    pub file: String,
    /// Findings in discovery order.
    pub diagnostics: Vec<Diagnostic>,
    /// Path of the fixed file, when fix mode wrote one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_path: Option<String>,
}

impl LintResponse {
    /// Create a response for a processed file.
    pub fn new(file: impl Into<String>, diagnostics: Vec<Diagnostic>) -> Self {
        LintResponse {
            status: "ok".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            file: file.into(),
            diagnostics,
            fixed_path: None,
        }
    }

    /// Record the path written in fix mode.
    pub fn with_fixed_path(mut self, path: impl Into<String>) -> Self {
        self.fixed_path = Some(path.into());
        self
    }
}

/// Error details for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Numeric error code.
    pub code: u8,
    /// Human-readable message.
    pub message: String,
    /// Path the error relates to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorInfo {
    /// Create from a TidyError.
    pub fn from_error(err: &TidyError) -> Self {
        let path = match err {
            TidyError::FileNotFound { path }
            | TidyError::Config { path, .. }
            | TidyError::Io { path, .. } => Some(path.clone()),
            TidyError::InvalidTree { path, .. } => path.clone(),
            TidyError::InvalidArguments { .. } | TidyError::InternalError { .. } => None,
        };
        ErrorInfo {
            code: OutputErrorCode::from(err).code(),
            message: err.to_string(),
            path,
        }
    }
}

/// Failed run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Always `"error"`.
    pub status: String,
    /// Response schema version.
    pub schema_version: String,
    /// Error details.
    pub error: ErrorInfo,
}

impl ErrorResponse {
    /// Create from a TidyError.
    pub fn from_error(err: &TidyError) -> Self {
        ErrorResponse {
            status: "error".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            error: ErrorInfo::from_error(err),
        }
    }
}

/// Emit a response as pretty-printed JSON followed by a newline.
pub fn emit_response<T: Serialize>(response: &T, writer: &mut impl Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}
