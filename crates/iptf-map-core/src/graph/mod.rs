//! Knowledge graph of privacy pattern documents.
//!
//! This module turns a corpus of cross-linked markdown documents into a typed
//! node/edge graph:
//! - **Nodes**: one per document, keyed `{category}/{slug}`
//! - **Edges**: one per resolvable internal link, typed by section and category
//!
//! # Components
//!
//! - [`parse_frontmatter`] - leading `---` metadata block
//! - [`extract_summary`] - short summary from known sections
//! - [`extract_links`] - internal links tagged with their `##` section
//! - [`resolve_link`] - relative href to node id
//! - [`classify_edge`] - relationship type of a link
//! - [`GraphBuilder`] - two-pass orchestration over the content tree
//!
//! # Example
//!
//! ```ignore
//! use iptf_map_core::graph::build_graph;
//!
//! let graph = build_graph("content")?;
//! println!("{} nodes, {} edges", graph.meta.node_count, graph.meta.edge_count);
//! ```

mod builder;
mod category;
mod classify;
mod error;
mod frontmatter;
mod index;
mod links;
mod models;
mod resolve;
mod summary;

pub use builder::{build_graph, GraphBuilder};
pub use category::{Category, CategoryConfig, CONTENT_DIRS};
pub use classify::{classify_edge, EdgeType};
pub use error::GraphError;
pub use frontmatter::{parse_frontmatter, Frontmatter, FrontmatterValue};
pub use index::MembershipIndex;
pub use links::{extract_links, Link};
pub use models::{GraphData, GraphEdge, GraphMeta, GraphNode};
pub use resolve::{file_to_node_id, file_to_slug, resolve_link};
pub use summary::{extract_summary, SUMMARY_SECTIONS};
