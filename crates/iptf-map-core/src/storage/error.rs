use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the graph artifact.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Graph artifact not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid artifact path: {}", .0.display())]
    InvalidPath(PathBuf),
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}
