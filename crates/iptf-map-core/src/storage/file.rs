use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::config::OutputConfig;
use crate::graph::GraphData;

use super::error::StorageError;
use super::Storage;

/// File-based storage for the graph artifact.
///
/// Writes go to a temporary file next to the destination which is then
/// renamed over it, so readers see either the previous artifact or the new
/// one, never a truncated file.
pub struct FileStorage {
    path: PathBuf,
    pretty: bool,
}

impl FileStorage {
    /// Creates a FileStorage writing pretty JSON to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    /// Creates a FileStorage from output configuration.
    pub fn with_config(config: &OutputConfig) -> Self {
        Self {
            path: config.path.clone(),
            pretty: config.pretty,
        }
    }

    /// Returns the artifact path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensures the destination directory exists and returns it.
    fn ensure_parent_dir(&self) -> Result<PathBuf, StorageError> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            Some(_) => PathBuf::from("."),
            None => return Err(StorageError::InvalidPath(self.path.clone())),
        };
        if !parent.exists() {
            fs::create_dir_all(&parent).map_err(|e| StorageError::io(&parent, e))?;
        }
        Ok(parent)
    }
}

impl Storage for FileStorage {
    fn save_graph(&self, graph: &GraphData) -> Result<(), StorageError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(graph)?
        } else {
            serde_json::to_string(graph)?
        };

        let dir = self.ensure_parent_dir()?;
        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| StorageError::io(&dir, e))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| StorageError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StorageError::io(&self.path, e.error))?;

        debug!(path = %self.path.display(), bytes = json.len(), "Graph artifact written");
        Ok(())
    }

    fn load_graph(&self) -> Result<GraphData, StorageError> {
        if !self.path.exists() {
            return Err(StorageError::NotFound(self.path.clone()));
        }

        let json = fs::read_to_string(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        let graph: GraphData = serde_json::from_str(&json)?;

        Ok(graph)
    }
}
