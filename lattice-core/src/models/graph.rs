use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A transient read-only copy of a node owned by the external graph store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub labels: Vec<String>,
    pub properties: BTreeMap<String, serde_json::Value>,
}

impl GraphNode {
    /// The node's `name` property, if present and a string.
    pub fn name(&self) -> Option<&str> {
        self.properties.get("name").and_then(|v| v.as_str())
    }

    /// The node's `description` property, if present and a string.
    pub fn description(&self) -> Option<&str> {
        self.properties.get("description").and_then(|v| v.as_str())
    }
}

/// A transient read-only copy of a relationship from the graph store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRelationship {
    pub id: String,
    pub source_node_id: String,
    pub target_node_id: String,
    pub rel_type: String,
    pub properties: BTreeMap<String, serde_json::Value>,
}

impl GraphRelationship {
    /// Whether this relationship touches the given node.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source_node_id == node_id || self.target_node_id == node_id
    }
}

/// Traversal direction for relationship queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Outgoing,
    Incoming,
    Both,
}
