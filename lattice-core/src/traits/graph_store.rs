use crate::errors::LatticeResult;
use crate::models::{Direction, GraphNode, GraphRelationship};

/// Property-graph store of extracted entities and relationships.
pub trait IGraphStore: Send + Sync {
    /// Exact lookup of nodes whose `property` equals `value`.
    fn find_nodes_by_property(
        &self,
        label: &str,
        property: &str,
        value: &str,
        limit: usize,
    ) -> LatticeResult<Vec<GraphNode>>;

    /// Substring lookup: nodes whose `property` contains `fragment`.
    /// Candidate source for fuzzy matching; ranking happens caller-side.
    fn find_nodes_by_property_contains(
        &self,
        label: &str,
        property: &str,
        fragment: &str,
        limit: usize,
    ) -> LatticeResult<Vec<GraphNode>>;

    /// Relationships touching `node_id`, with the nodes on the far end.
    fn find_relationships(
        &self,
        node_id: &str,
        rel_type: Option<&str>,
        direction: Direction,
        limit: usize,
    ) -> LatticeResult<(Vec<GraphNode>, Vec<GraphRelationship>)>;
}
