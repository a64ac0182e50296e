//! Two-pass graph construction over the content tree.
//!
//! Pass 1 turns every document into a node and fills the membership index.
//! Pass 2 re-reads every document, resolves its links against the complete
//! index and emits deduplicated, classified edges.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{ContentConfig, DOCUMENT_EXTENSION, TITLE_LABEL_PREFIXES};

use super::category::{Category, CategoryConfig, CONTENT_DIRS};
use super::classify::classify_edge;
use super::error::GraphError;
use super::frontmatter::{parse_frontmatter, Frontmatter};
use super::index::MembershipIndex;
use super::links::extract_links;
use super::models::{GraphData, GraphEdge, GraphNode};
use super::resolve::{file_to_node_id, file_to_slug, resolve_link};
use super::summary::extract_summary;

/// A document discovered in pass 1.
#[derive(Debug, Clone)]
struct SourceDocument {
    category: &'static CategoryConfig,
    file_name: String,
    path: PathBuf,
    id: String,
}

/// Builds [`GraphData`] from a content root.
///
/// Holds no state between builds; every call starts from scratch.
pub struct GraphBuilder {
    config: ContentConfig,
}

impl GraphBuilder {
    /// Create a builder with the given content settings.
    pub fn new(config: ContentConfig) -> Self {
        Self { config }
    }

    /// Build the graph for the corpus under `root`.
    ///
    /// Missing category directories are skipped. Any read failure aborts the
    /// whole build, so no partial graph is ever returned.
    pub fn build(&self, root: &Path) -> Result<GraphData, GraphError> {
        if !root.is_dir() {
            return Err(GraphError::RootNotFound(root.to_path_buf()));
        }
        info!(root = %root.display(), "Building graph");

        let discovered = self.discover(root)?;

        // Only documents that own their node take part in pass 2.
        let mut nodes = Vec::with_capacity(discovered.len());
        let mut documents = Vec::with_capacity(discovered.len());
        let mut index = MembershipIndex::new();
        for doc in discovered {
            let node = self.load_node(&doc)?;
            if !index.insert(node.id.clone(), node.node_type) {
                warn!(id = %node.id, path = %doc.path.display(), "Duplicate node id, document skipped");
                continue;
            }
            nodes.push(node);
            documents.push(doc);
        }

        for (slug, categories) in index.ambiguous_slugs() {
            let names: Vec<&str> = categories.iter().map(Category::as_str).collect();
            warn!(
                slug = %slug,
                categories = %names.join(", "),
                "Slug shared across categories; unqualified links resolve to the first"
            );
        }

        let edges = self.load_edges(&documents, &index)?;

        let graph = GraphData::new(nodes, edges);
        info!(
            nodes = graph.meta.node_count,
            edges = graph.meta.edge_count,
            "Graph built"
        );
        Ok(graph)
    }

    // =========================================================================
    // Pass 1
    // =========================================================================

    /// List document files of every existing category directory.
    fn discover(&self, root: &Path) -> Result<Vec<SourceDocument>, GraphError> {
        let mut documents = Vec::new();

        for cfg in CONTENT_DIRS {
            let dir = root.join(cfg.dir);
            match fs::metadata(&dir) {
                Ok(meta) if meta.is_dir() => {}
                Ok(_) => {
                    debug!(dir = %dir.display(), "Category path is not a directory, skipping");
                    continue;
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!(dir = %dir.display(), "Category directory missing, skipping");
                    continue;
                }
                Err(e) => return Err(GraphError::io(&dir, e)),
            }

            let mut file_names = Vec::new();
            let entries = fs::read_dir(&dir).map_err(|e| GraphError::io(&dir, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| GraphError::io(&dir, e))?;
                let path = entry.path();
                let file_name = entry
                    .file_name()
                    .into_string()
                    .map_err(|_| GraphError::InvalidPath(path.clone()))?;

                // Not stat'ed: an unreadable document fails the build in pass 1.
                if self.config.is_document(&file_name) {
                    file_names.push(file_name);
                }
            }
            file_names.sort();

            debug!(category = %cfg.category, count = file_names.len(), "Discovered documents");

            documents.extend(file_names.into_iter().map(|file_name| SourceDocument {
                category: cfg,
                id: file_to_node_id(cfg.category, &file_name, cfg.prefix),
                path: dir.join(&file_name),
                file_name,
            }));
        }

        Ok(documents)
    }

    /// Read one document and turn it into a node.
    fn load_node(&self, doc: &SourceDocument) -> Result<GraphNode, GraphError> {
        let parsed = self.read_document(doc)?;
        let cfg = doc.category;

        let stem = doc
            .file_name
            .strip_suffix(DOCUMENT_EXTENSION)
            .unwrap_or(&doc.file_name);
        let title = strip_title_label(parsed.get_str("title").unwrap_or(stem)).to_string();
        let attr = |key: &str| parsed.get_str(key).map(str::to_string);

        Ok(GraphNode {
            id: doc.id.clone(),
            node_type: cfg.category,
            title,
            slug: file_to_slug(&doc.file_name, cfg.prefix),
            file: format!("{}/{}", cfg.dir, doc.file_name),
            layer: attr("layer"),
            maturity: attr("maturity"),
            status: attr("status"),
            privacy_goal: attr("privacy_goal"),
            primary_domain: attr("primary_domain"),
            region: attr("region"),
            summary: extract_summary(&parsed.body, self.config.summary_max_len),
            content: parsed.body,
        })
    }

    // =========================================================================
    // Pass 2
    // =========================================================================

    /// Resolve and classify the links of every document.
    fn load_edges(
        &self,
        documents: &[SourceDocument],
        index: &MembershipIndex,
    ) -> Result<Vec<GraphEdge>, GraphError> {
        let mut edges = Vec::new();
        let mut seen_edges = HashSet::new();

        for doc in documents {
            let parsed = self.read_document(doc)?;

            for link in extract_links(&parsed.body) {
                let Some(target) = resolve_link(&link.href, index) else {
                    debug!(source = %doc.id, href = %link.href, "Unresolved link dropped");
                    continue;
                };
                if target == doc.id {
                    continue;
                }

                let target_type = index.category_of(&target).unwrap_or(Category::Pattern);
                let edge = GraphEdge {
                    source: doc.id.clone(),
                    edge_type: classify_edge(doc.category.category, target_type, &link.section),
                    target,
                };

                if seen_edges.insert(edge.clone()) {
                    edges.push(edge);
                }
            }
        }

        Ok(edges)
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    fn read_document(&self, doc: &SourceDocument) -> Result<Frontmatter, GraphError> {
        let content = fs::read_to_string(&doc.path).map_err(|e| GraphError::io(&doc.path, e))?;
        Ok(parse_frontmatter(&content))
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(ContentConfig::default())
    }
}

/// Build the graph under `root` with default content settings.
pub fn build_graph(root: impl AsRef<Path>) -> Result<GraphData, GraphError> {
    GraphBuilder::default().build(root.as_ref())
}

/// Remove a leading category label such as `Pattern:` from a title.
fn strip_title_label(title: &str) -> &str {
    for label in TITLE_LABEL_PREFIXES {
        let Some(head) = title.get(..label.len()) else {
            continue;
        };
        if head.eq_ignore_ascii_case(label) {
            if let Some(rest) = title[label.len()..].strip_prefix(':') {
                return rest.trim_start();
            }
        }
    }
    title
}
