use serde::{Deserialize, Serialize};

use super::defaults;

/// How entities are pulled out of the question text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    /// Pattern tables plus a generic token pass. Always available.
    #[default]
    Keyword,
    /// Model-based NER; degrades to keyword when no backend is configured.
    Ner,
    /// LLM-based extraction; degrades to keyword when no backend is configured.
    Llm,
}

/// The request contract for a single retrieval call.
///
/// Out-of-range values are never rejected: [`RetrievalConfig::normalized`]
/// clamps everything into its documented range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub dataset_ids: Vec<String>,
    pub question: String,
    pub max_results: usize,
    pub min_score: f64,
    pub enable_rerank: bool,
    pub candidate_multiplier: usize,
    pub enable_graph_enhancement: bool,
    pub include_graph_only_results: bool,
    pub graph_weight: f64,
    pub entity_extraction_strategy: ExtractionStrategy,
    pub max_graph_depth: usize,
    pub max_relations_per_entity: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            dataset_ids: Vec::new(),
            question: String::new(),
            max_results: defaults::DEFAULT_MAX_RESULTS,
            min_score: defaults::DEFAULT_MIN_SCORE,
            enable_rerank: true,
            candidate_multiplier: defaults::DEFAULT_CANDIDATE_MULTIPLIER,
            enable_graph_enhancement: true,
            include_graph_only_results: false,
            graph_weight: defaults::DEFAULT_GRAPH_WEIGHT,
            entity_extraction_strategy: ExtractionStrategy::Keyword,
            max_graph_depth: defaults::DEFAULT_MAX_GRAPH_DEPTH,
            max_relations_per_entity: defaults::DEFAULT_MAX_RELATIONS_PER_ENTITY,
        }
    }
}

impl RetrievalConfig {
    /// Clamp every numeric field into its valid range.
    ///
    /// Configuration problems are recovered here, never surfaced as errors.
    pub fn normalized(mut self) -> Self {
        self.max_results = self.max_results.clamp(1, 100);
        self.min_score = self.min_score.clamp(0.0, 1.0);
        self.candidate_multiplier = self.candidate_multiplier.clamp(1, 5);
        self.graph_weight = self.graph_weight.clamp(0.0, 1.0);
        self.max_graph_depth = self.max_graph_depth.clamp(1, 5);
        self.max_relations_per_entity = self.max_relations_per_entity.clamp(1, 50);
        self
    }
}
