use serde::{Deserialize, Serialize};

use super::result::EnhancedResult;

/// Wall-clock milliseconds spent in each retrieval stage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StageTimings {
    pub vector_ms: u64,
    pub graph_ms: u64,
    pub fusion_ms: u64,
    pub rerank_ms: u64,
    pub total_ms: u64,
}

/// The engine's response: ranked evidence plus honest per-stage counts.
///
/// Returned for every well-formed request, possibly with an empty result
/// list — retrieval never surfaces a hard error to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResponse {
    pub results: Vec<EnhancedResult>,
    /// Document units the vector branch returned before fusion.
    pub vector_result_count: usize,
    /// Distinct graph nodes the graph branch collected.
    pub graph_entity_count: usize,
    /// Distinct graph relationships the graph branch collected.
    pub graph_relationship_count: usize,
    pub timings: StageTimings,
}

impl RetrievalResponse {
    /// An empty response with zeroed counts, used when every branch
    /// degraded or the request was cancelled before any work ran.
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            vector_result_count: 0,
            graph_entity_count: 0,
            graph_relationship_count: 0,
            timings: StageTimings::default(),
        }
    }
}
