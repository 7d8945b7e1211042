//! Shared mock source clients for the integration tests.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Mutex;

use lattice_core::errors::{LatticeResult, SourceError};
use lattice_core::models::{
    Direction, DocumentUnit, GraphNode, GraphRelationship, VectorMatch,
};
use lattice_core::traits::{
    IDocumentUnitStore, IEmbeddingService, IGraphStore, IRerankService, IVectorStore,
};

/// Route tracing output through the test harness capture. Safe to call
/// from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

pub fn unit(id: &str, dataset_id: &str, content: &str) -> DocumentUnit {
    DocumentUnit {
        id: id.to_string(),
        dataset_id: dataset_id.to_string(),
        file_id: format!("file-{id}"),
        page: 1,
        content: content.to_string(),
        relevance_order: 0,
    }
}

pub fn node(id: &str, name: &str, description: &str) -> GraphNode {
    let mut properties = BTreeMap::new();
    properties.insert("name".to_string(), serde_json::json!(name));
    if !description.is_empty() {
        properties.insert("description".to_string(), serde_json::json!(description));
    }
    GraphNode {
        id: id.to_string(),
        labels: vec!["Entity".to_string()],
        properties,
    }
}

pub fn relationship(id: &str, source: &str, target: &str) -> GraphRelationship {
    GraphRelationship {
        id: id.to_string(),
        source_node_id: source.to_string(),
        target_node_id: target.to_string(),
        rel_type: "RELATED_TO".to_string(),
        properties: BTreeMap::new(),
    }
}

/// Returns a fixed unit vector for any text.
pub struct MockEmbedding;

impl IEmbeddingService for MockEmbedding {
    fn embed(&self, _text: &str) -> LatticeResult<Vec<f32>> {
        Ok(vec![0.1; 8])
    }

    fn dimensions(&self) -> usize {
        8
    }
}

/// Always fails; drives the vector branch's degradation path.
pub struct FailingEmbedding;

impl IEmbeddingService for FailingEmbedding {
    fn embed(&self, _text: &str) -> LatticeResult<Vec<f32>> {
        Err(SourceError::Embedding {
            message: "model offline".to_string(),
        }
        .into())
    }

    fn dimensions(&self) -> usize {
        8
    }
}

/// Serves matches filtered by the requested `min_score`, and counts calls.
pub struct MockVectorStore {
    pub matches: Vec<VectorMatch>,
    pub calls: Mutex<Vec<f64>>,
}

impl MockVectorStore {
    pub fn with_similarities(sims: &[(&str, f64)]) -> Self {
        Self {
            matches: sims
                .iter()
                .map(|(id, sim)| VectorMatch {
                    document_unit_id: id.to_string(),
                    similarity: *sim,
                    metadata: None,
                })
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl IVectorStore for MockVectorStore {
    fn search(
        &self,
        _dataset_ids: &[String],
        _query_vector: &[f32],
        max_results: usize,
        min_score: f64,
    ) -> LatticeResult<Vec<VectorMatch>> {
        self.calls.lock().unwrap().push(min_score);
        let mut hits: Vec<VectorMatch> = self
            .matches
            .iter()
            .filter(|m| m.similarity >= min_score)
            .cloned()
            .collect();
        hits.sort_by(|a, b| b.similarity.partial_cmp(&a.similarity).unwrap());
        hits.truncate(max_results);
        Ok(hits)
    }

    fn add(&self, _vector: &[f32], _unit: &DocumentUnit) -> LatticeResult<()> {
        Ok(())
    }

    fn delete(&self, _dataset_ids: &[String]) -> LatticeResult<()> {
        Ok(())
    }
}

/// Returns stored units in reverse id order to prove the retriever
/// re-orders by retrieval rank, not storage order.
pub struct MockDocumentStore {
    pub units: Vec<DocumentUnit>,
}

impl IDocumentUnitStore for MockDocumentStore {
    fn list_by_ids(&self, ids: &[String]) -> LatticeResult<Vec<DocumentUnit>> {
        let mut found: Vec<DocumentUnit> = self
            .units
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(found)
    }
}

/// Graph store over in-memory node and relationship lists.
pub struct MockGraphStore {
    pub nodes: Vec<GraphNode>,
    pub relationships: Vec<GraphRelationship>,
}

impl IGraphStore for MockGraphStore {
    fn find_nodes_by_property(
        &self,
        _label: &str,
        property: &str,
        value: &str,
        limit: usize,
    ) -> LatticeResult<Vec<GraphNode>> {
        Ok(self
            .nodes
            .iter()
            .filter(|n| {
                n.properties
                    .get(property)
                    .and_then(|v| v.as_str())
                    .is_some_and(|v| v == value)
            })
            .take(limit)
            .cloned()
            .collect())
    }

    fn find_nodes_by_property_contains(
        &self,
        _label: &str,
        property: &str,
        fragment: &str,
        limit: usize,
    ) -> LatticeResult<Vec<GraphNode>> {
        let fragment = fragment.to_lowercase();
        Ok(self
            .nodes
            .iter()
            .filter(|n| {
                n.properties
                    .get(property)
                    .and_then(|v| v.as_str())
                    .is_some_and(|v| v.to_lowercase().contains(&fragment))
            })
            .take(limit)
            .cloned()
            .collect())
    }

    fn find_relationships(
        &self,
        node_id: &str,
        _rel_type: Option<&str>,
        _direction: Direction,
        limit: usize,
    ) -> LatticeResult<(Vec<GraphNode>, Vec<GraphRelationship>)> {
        let rels: Vec<GraphRelationship> = self
            .relationships
            .iter()
            .filter(|r| r.touches(node_id))
            .take(limit)
            .cloned()
            .collect();
        let far_ids: Vec<&str> = rels
            .iter()
            .map(|r| {
                if r.source_node_id == node_id {
                    r.target_node_id.as_str()
                } else {
                    r.source_node_id.as_str()
                }
            })
            .collect();
        let far_nodes = self
            .nodes
            .iter()
            .filter(|n| far_ids.contains(&n.id.as_str()))
            .cloned()
            .collect();
        Ok((far_nodes, rels))
    }
}

/// Every call fails; drives the graph branch's error isolation.
pub struct FailingGraphStore;

impl IGraphStore for FailingGraphStore {
    fn find_nodes_by_property(
        &self,
        _label: &str,
        _property: &str,
        _value: &str,
        _limit: usize,
    ) -> LatticeResult<Vec<GraphNode>> {
        Err(SourceError::GraphStore {
            message: "store timeout".to_string(),
        }
        .into())
    }

    fn find_nodes_by_property_contains(
        &self,
        _label: &str,
        _property: &str,
        _fragment: &str,
        _limit: usize,
    ) -> LatticeResult<Vec<GraphNode>> {
        Err(SourceError::GraphStore {
            message: "store timeout".to_string(),
        }
        .into())
    }

    fn find_relationships(
        &self,
        _node_id: &str,
        _rel_type: Option<&str>,
        _direction: Direction,
        _limit: usize,
    ) -> LatticeResult<(Vec<GraphNode>, Vec<GraphRelationship>)> {
        Err(SourceError::GraphStore {
            message: "store timeout".to_string(),
        }
        .into())
    }
}

/// Reverses the candidate order, making reranking observable.
pub struct ReversingReranker;

impl IRerankService for ReversingReranker {
    fn rerank(&self, _query: &str, documents: &[String]) -> LatticeResult<Vec<usize>> {
        Ok((0..documents.len()).rev().collect())
    }
}
