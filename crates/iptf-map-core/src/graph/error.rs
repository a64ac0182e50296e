//! Graph build error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a graph build.
///
/// Structural absences (no frontmatter, no summary section, missing category
/// directory) and unresolved links are not errors.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Content root is missing or not a directory.
    #[error("Content root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// IO error.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file name that is not valid UTF-8.
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
}

impl GraphError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GraphError::Io {
            path: path.into(),
            source,
        }
    }
}
