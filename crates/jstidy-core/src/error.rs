//! Error types and error code constants for jstidy.
//!
//! The rewriting engine itself never fails: it degrades by omission. Errors
//! only arise at the edges (arguments, file I/O, tree loading, configuration),
//! and all of them are funnelled into [`TidyError`].
//!
//! ## Error Code Mapping
//!
//! - `2`: Invalid arguments (bad input from caller)
//! - `3`: Resolution errors (input file not found)
//! - `4`: Tree errors (the ESTree input could not be loaded)
//! - `10`: Internal errors (I/O failures, bugs, unexpected state)

use std::fmt;

use thiserror::Error;

// ============================================================================
// Output Error Codes
// ============================================================================

/// Error codes for JSON output and process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputErrorCode {
    /// Invalid arguments from caller (bad flag combination, bad config).
    InvalidArguments = 2,
    /// Input file could not be found.
    ResolutionError = 3,
    /// The syntax tree input was not a loadable ESTree program.
    TreeError = 4,
    /// Internal errors (I/O, bugs, unexpected state).
    InternalError = 10,
}

impl OutputErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for OutputErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Unified error type for the CLI and library edges.
#[derive(Debug, Error)]
pub enum TidyError {
    /// Invalid arguments from caller.
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// The syntax tree could not be loaded.
    #[error("invalid syntax tree{}: {message}", in_path(.path))]
    InvalidTree {
        message: String,
        path: Option<String>,
    },

    /// Configuration file could not be read or parsed.
    #[error("config error in {path}: {message}")]
    Config { path: String, message: String },

    /// I/O failure while reading or writing a file.
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Internal error (bug or unexpected state).
    #[error("internal error: {message}")]
    InternalError { message: String },
}

fn in_path(path: &Option<String>) -> String {
    path.as_ref().map(|p| format!(" in {p}")).unwrap_or_default()
}

// ============================================================================
// Error Code Mapping
// ============================================================================

impl From<&TidyError> for OutputErrorCode {
    fn from(err: &TidyError) -> Self {
        match err {
            TidyError::InvalidArguments { .. } => OutputErrorCode::InvalidArguments,
            TidyError::Config { .. } => OutputErrorCode::InvalidArguments,
            TidyError::FileNotFound { .. } => OutputErrorCode::ResolutionError,
            TidyError::InvalidTree { .. } => OutputErrorCode::TreeError,
            TidyError::Io { .. } => OutputErrorCode::InternalError,
            TidyError::InternalError { .. } => OutputErrorCode::InternalError,
        }
    }
}

impl From<TidyError> for OutputErrorCode {
    fn from(err: TidyError) -> Self {
        OutputErrorCode::from(&err)
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl TidyError {
    /// Create an invalid arguments error.
    pub fn invalid_args(message: impl Into<String>) -> Self {
        TidyError::InvalidArguments {
            message: message.into(),
        }
    }

    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<String>) -> Self {
        TidyError::FileNotFound { path: path.into() }
    }

    /// Create an invalid tree error, optionally naming the tree file.
    pub fn invalid_tree(message: impl Into<String>, path: Option<String>) -> Self {
        TidyError::InvalidTree {
            message: message.into(),
            path,
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<String>, message: impl Into<String>) -> Self {
        TidyError::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Wrap an I/O error, mapping `NotFound` to [`TidyError::FileNotFound`].
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            TidyError::FileNotFound { path }
        } else {
            TidyError::Io { path, source }
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        TidyError::InternalError {
            message: message.into(),
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> OutputErrorCode {
        OutputErrorCode::from(self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod error_code_mapping {
        use super::*;

        #[test]
        fn invalid_arguments_maps_to_invalid_arguments() {
            let err = TidyError::invalid_args("missing --file");
            assert_eq!(
                OutputErrorCode::from(&err),
                OutputErrorCode::InvalidArguments
            );
            assert_eq!(err.error_code().code(), 2);
        }

        #[test]
        fn file_not_found_maps_to_resolution_error() {
            let err = TidyError::file_not_found("missing.js");
            assert_eq!(err.error_code(), OutputErrorCode::ResolutionError);
            assert_eq!(err.error_code().code(), 3);
        }

        #[test]
        fn invalid_tree_maps_to_tree_error() {
            let err = TidyError::invalid_tree("root is not a Program", None);
            assert_eq!(err.error_code().code(), 4);
        }

        #[test]
        fn config_maps_to_invalid_arguments() {
            let err = TidyError::config("jstidy.toml", "expected a table");
            assert_eq!(err.error_code(), OutputErrorCode::InvalidArguments);
        }

        #[test]
        fn io_not_found_becomes_file_not_found() {
            let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
            let err = TidyError::io("a.js", io);
            assert!(matches!(err, TidyError::FileNotFound { .. }));
        }

        #[test]
        fn io_other_maps_to_internal_error() {
            let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
            let err = TidyError::io("a.js", io);
            assert_eq!(err.error_code().code(), 10);
        }
    }

    mod error_display {
        use super::*;

        #[test]
        fn invalid_tree_display_with_path() {
            let err = TidyError::invalid_tree("expected object", Some("a.json".to_string()));
            assert_eq!(err.to_string(), "invalid syntax tree in a.json: expected object");
        }

        #[test]
        fn invalid_tree_display_without_path() {
            let err = TidyError::invalid_tree("expected object", None);
            assert_eq!(err.to_string(), "invalid syntax tree: expected object");
        }

        #[test]
        fn file_not_found_display() {
            assert_eq!(
                TidyError::file_not_found("x.js").to_string(),
                "file not found: x.js"
            );
        }
    }

    #[test]
    fn code_values() {
        assert_eq!(OutputErrorCode::InvalidArguments.code(), 2);
        assert_eq!(OutputErrorCode::ResolutionError.code(), 3);
        assert_eq!(OutputErrorCode::TreeError.code(), 4);
        assert_eq!(OutputErrorCode::InternalError.code(), 10);
        assert_eq!(format!("{}", OutputErrorCode::InternalError), "10");
    }
}
