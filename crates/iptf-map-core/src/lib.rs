pub mod config;
pub mod graph;
pub mod storage;

pub use config::{Config, ConfigError, ContentConfig, OutputConfig};
pub use graph::{build_graph, GraphBuilder, GraphData, GraphError};
pub use storage::{FileStorage, Storage, StorageError};
