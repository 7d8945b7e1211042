use serde::{Deserialize, Serialize};

use super::document::DocumentUnit;
use super::graph::{GraphNode, GraphRelationship};

/// Which evidence source produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Vector,
    Graph,
    Hybrid,
}

/// The fusion output unit: one per surfaced piece of evidence.
///
/// Lifecycle is scoped to a single retrieval call; never persisted.
/// `graph_entities` and `graph_relationships` are always present
/// (empty when the result has no graph context).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedResult {
    pub source_type: SourceType,
    /// Absent only for graph-only results.
    pub document_unit: Option<DocumentUnit>,
    pub vector_score: f64,
    pub graph_score: f64,
    /// Fused score in [0, 1], set by the fusion stage.
    pub relevance_score: f64,
    pub graph_entities: Vec<GraphNode>,
    pub graph_relationships: Vec<GraphRelationship>,
    /// Short human-readable note on what graph context was attached.
    pub enhancement_summary: Option<String>,
}

impl EnhancedResult {
    /// A vector-sourced base result with no graph context yet.
    pub fn from_vector(unit: DocumentUnit, vector_score: f64) -> Self {
        Self {
            source_type: SourceType::Vector,
            document_unit: Some(unit),
            vector_score,
            graph_score: 0.0,
            relevance_score: 0.0,
            graph_entities: Vec::new(),
            graph_relationships: Vec::new(),
            enhancement_summary: None,
        }
    }

    /// A standalone graph-only result for a node no vector hit covered.
    pub fn from_graph(node: GraphNode, relationships: Vec<GraphRelationship>) -> Self {
        Self {
            source_type: SourceType::Graph,
            document_unit: None,
            vector_score: 0.0,
            graph_score: 0.0,
            relevance_score: 0.0,
            graph_entities: vec![node],
            graph_relationships: relationships,
            enhancement_summary: None,
        }
    }

    /// The document content, empty for graph-only results.
    pub fn content(&self) -> &str {
        self.document_unit
            .as_ref()
            .map(|u| u.content.as_str())
            .unwrap_or("")
    }
}
