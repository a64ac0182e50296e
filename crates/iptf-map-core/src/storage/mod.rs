mod error;
mod file;

pub use error::StorageError;
pub use file::FileStorage;

use crate::graph::GraphData;

/// Trait for graph artifact storage backends.
///
/// The artifact is written once per build and read-only afterwards.
pub trait Storage {
    /// Replaces the stored artifact with `graph`.
    fn save_graph(&self, graph: &GraphData) -> Result<(), StorageError>;

    /// Loads the stored artifact.
    fn load_graph(&self) -> Result<GraphData, StorageError>;
}
