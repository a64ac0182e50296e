//! Graph artifact models.
//!
//! These types define the JSON shape read by the map UI. The rendering layer
//! only ever reads this structure.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::classify::EdgeType;

// =============================================================================
// Graph Data
// =============================================================================

/// Complete graph artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub meta: GraphMeta,
}

impl GraphData {
    /// Assemble the artifact, stamping the generation time and counts.
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        let meta = GraphMeta {
            generated_at: chrono::Utc::now()
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            node_count: nodes.len(),
            edge_count: edges.len(),
        };
        Self { nodes, edges, meta }
    }

    /// Find a node by id.
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Edges leaving the given node.
    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.edges.iter().filter(move |e| e.source == id)
    }

    /// Edges arriving at the given node.
    pub fn incoming<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.edges.iter().filter(move |e| e.target == id)
    }
}

/// Build metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphMeta {
    /// RFC 3339 UTC timestamp of the build.
    pub generated_at: String,
    pub node_count: usize,
    pub edge_count: usize,
}

// =============================================================================
// Nodes and Edges
// =============================================================================

/// One document in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// `{category}/{slug}`, unique within a build.
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: Category,
    pub title: String,
    pub slug: String,
    /// Source document path relative to the content root.
    pub file: String,

    // Descriptive attributes, absent when the document does not declare them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    pub summary: String,
    /// Document body after the frontmatter.
    pub content: String,
}

/// A typed, directed relationship inferred from a markdown link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
}
