//! Error bridges from crate-specific errors to `TidyError`.
//!
//! These live in the root crate rather than `jstidy-core` because they
//! depend on types (the tree loader's) that core does not know about.

use std::path::Path;

use jstidy_core::error::TidyError;
use jstidy_estree::TreeError;

// ============================================================================
// Bridge: TreeError -> TidyError
// ============================================================================

/// Convert a loader error for the tree file at `path`.
pub(crate) fn tree_error(err: TreeError, path: &Path) -> TidyError {
    TidyError::invalid_tree(err.to_string(), Some(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jstidy_core::error::OutputErrorCode;

    #[test]
    fn tree_error_maps_to_tree_code() {
        let err = tree_error(
            TreeError::NotAProgram {
                found: "File".to_string(),
            },
            Path::new("a.js.json"),
        );
        assert_eq!(err.error_code(), OutputErrorCode::TreeError);
        match err {
            TidyError::InvalidTree { path, .. } => assert_eq!(path.as_deref(), Some("a.js.json")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
