//! Hybrid fusion: merge vector and graph evidence into enhanced results and
//! compute a fused relevance score.
//!
//! Fusion failure must never drop evidence vector search already found, so
//! any internal error degrades to the unmodified vector-only base results.

pub mod strategy;

use std::collections::HashSet;

use tracing::{debug, warn};

use lattice_core::config::{EngineTuning, RetrievalConfig};
use lattice_core::constants::{MAX_GRAPH_ONLY_RESULTS, SUMMARY_ENTITY_LIMIT};
use lattice_core::errors::LatticeResult;
use lattice_core::models::{EnhancedResult, GraphNode, RetrievedUnit, SourceType};

use crate::search::GraphContext;

/// Similarity assumed for a vector hit that carried no score.
const DEFAULT_VECTOR_SCORE: f64 = 0.8;

/// Graph score contribution caps and increments.
const ENTITY_INCREMENT: f64 = 0.1;
const ENTITY_CAP: f64 = 0.4;
const RELATIONSHIP_INCREMENT: f64 = 0.05;
const RELATIONSHIP_CAP: f64 = 0.3;
const EXACT_NAME_BONUS: f64 = 0.2;
const PARTIAL_NAME_BONUS: f64 = 0.1;

/// Base score of an injected graph-only result.
const GRAPH_ONLY_BASE: f64 = 0.6;
const GRAPH_ONLY_REL_INCREMENT: f64 = 0.1;
const GRAPH_ONLY_REL_CAP: f64 = 0.3;

/// Minimum description keywords that must overlap document content, scaled
/// down for short documents: `min(3, content_words / 3)`.
const OVERLAP_FLOOR: usize = 3;

/// Merges the two evidence sources and scores the union.
pub struct HybridFusionEngine<'a> {
    tuning: &'a EngineTuning,
}

impl<'a> HybridFusionEngine<'a> {
    pub fn new(tuning: &'a EngineTuning) -> Self {
        Self { tuning }
    }

    /// Fuse vector results with graph context into scored enhanced results.
    ///
    /// On any internal error the vector-only base results are returned
    /// unchanged in content, scored by their vector similarity alone.
    /// Every step of the current pipeline is infallible, so the error arm
    /// exists for fallible steps added behind [`Self::try_fuse`] later;
    /// panics are not caught here.
    pub fn fuse(
        &self,
        vector_units: &[RetrievedUnit],
        graph: &GraphContext,
        config: &RetrievalConfig,
    ) -> Vec<EnhancedResult> {
        match self.try_fuse(vector_units, graph, config) {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, "fusion failed, degrading to vector-only results");
                let mut base = base_results(vector_units);
                for r in &mut base {
                    r.relevance_score = r.vector_score.clamp(0.0, 1.0);
                }
                base
            }
        }
    }

    fn try_fuse(
        &self,
        vector_units: &[RetrievedUnit],
        graph: &GraphContext,
        config: &RetrievalConfig,
    ) -> LatticeResult<Vec<EnhancedResult>> {
        let mut results = base_results(vector_units);
        let mut attached_node_ids: HashSet<String> = HashSet::new();

        // Cross-association: attach related graph context to vector hits.
        if config.enable_graph_enhancement && !graph.is_empty() {
            for result in &mut results {
                self.associate(result, graph, &mut attached_node_ids);
            }
        }

        // Graph-only injection: nodes no vector hit covered.
        if config.include_graph_only_results {
            let injected = self.graph_only_results(graph, &attached_node_ids);
            debug!(injected = injected.len(), "graph-only results injected");
            results.extend(injected);
        }

        let strategy = strategy::select(config.graph_weight, self.tuning);
        debug!(?strategy, graph_weight = config.graph_weight, "fusion strategy selected");
        strategy::apply(strategy, &mut results, self.tuning);

        Ok(results)
    }

    /// Attach graph nodes related to this result's content, flip it to
    /// `Hybrid`, and compute its graph score.
    fn associate(
        &self,
        result: &mut EnhancedResult,
        graph: &GraphContext,
        attached_node_ids: &mut HashSet<String>,
    ) {
        let content = result.content().to_lowercase();
        if content.is_empty() {
            return;
        }
        let content_word_count = content.split_whitespace().count();
        let content_words: HashSet<String> = content
            .split_whitespace()
            .map(|w| w.to_string())
            .collect();

        let mut exact_bonuses = 0.0;
        for node in &graph.nodes {
            let name_match = node
                .name()
                .map(|n| content.contains(&n.to_lowercase()))
                .unwrap_or(false);
            let description_match = !name_match
                && self.description_overlaps(node, &content_words, content_word_count);

            if !name_match && !description_match {
                continue;
            }

            exact_bonuses += if name_match {
                EXACT_NAME_BONUS
            } else {
                PARTIAL_NAME_BONUS
            };
            attached_node_ids.insert(node.id.clone());
            result.graph_entities.push(node.clone());
        }

        if result.graph_entities.is_empty() {
            return;
        }

        // Relationships that touch any attached node come along.
        let entity_ids: HashSet<&str> =
            result.graph_entities.iter().map(|n| n.id.as_str()).collect();
        result.graph_relationships = graph
            .relationships
            .iter()
            .filter(|rel| {
                entity_ids.contains(rel.source_node_id.as_str())
                    || entity_ids.contains(rel.target_node_id.as_str())
            })
            .cloned()
            .collect();

        result.source_type = SourceType::Hybrid;
        result.graph_score = ((result.graph_entities.len() as f64 * ENTITY_INCREMENT)
            .min(ENTITY_CAP)
            + (result.graph_relationships.len() as f64 * RELATIONSHIP_INCREMENT)
                .min(RELATIONSHIP_CAP)
            + exact_bonuses)
            .min(1.0);
        result.enhancement_summary = Some(summarize(
            &result.graph_entities,
            result.graph_relationships.len(),
        ));
    }

    /// Keyword overlap between the node's description and the content:
    /// a match needs `min(3, total_content_words / 3)` overlapping words,
    /// never fewer than one. Overlap itself is counted over distinct words.
    fn description_overlaps(
        &self,
        node: &GraphNode,
        content_words: &HashSet<String>,
        content_word_count: usize,
    ) -> bool {
        let Some(description) = node.description() else {
            return false;
        };
        if content_words.is_empty() {
            return false;
        }

        let required = OVERLAP_FLOOR.min((content_word_count / 3).max(1));
        let overlap = description
            .to_lowercase()
            .split_whitespace()
            .collect::<HashSet<_>>()
            .iter()
            .filter(|w| content_words.contains(**w))
            .count();
        overlap >= required
    }

    /// Standalone results for graph nodes not attached to any vector hit.
    fn graph_only_results(
        &self,
        graph: &GraphContext,
        attached_node_ids: &HashSet<String>,
    ) -> Vec<EnhancedResult> {
        graph
            .nodes
            .iter()
            .filter(|node| !attached_node_ids.contains(&node.id))
            .take(MAX_GRAPH_ONLY_RESULTS)
            .map(|node| {
                let relationships: Vec<_> = graph
                    .relationships
                    .iter()
                    .filter(|rel| rel.touches(&node.id))
                    .cloned()
                    .collect();
                let mut result = EnhancedResult::from_graph(node.clone(), relationships);
                result.graph_score = (GRAPH_ONLY_BASE
                    + (result.graph_relationships.len() as f64 * GRAPH_ONLY_REL_INCREMENT)
                        .min(GRAPH_ONLY_REL_CAP))
                .min(1.0);
                result
            })
            .collect()
    }
}

/// One `Vector`-sourced result per retrieved unit, in retrieval order.
fn base_results(vector_units: &[RetrievedUnit]) -> Vec<EnhancedResult> {
    vector_units
        .iter()
        .map(|ru| {
            EnhancedResult::from_vector(
                ru.unit.clone(),
                ru.similarity.unwrap_or(DEFAULT_VECTOR_SCORE),
            )
        })
        .collect()
}

/// Short human-readable note: up to three entity names plus the
/// relationship count.
fn summarize(entities: &[GraphNode], relationship_count: usize) -> String {
    let names: Vec<&str> = entities
        .iter()
        .filter_map(|n| n.name())
        .take(SUMMARY_ENTITY_LIMIT)
        .collect();
    let elided = entities.len().saturating_sub(SUMMARY_ENTITY_LIMIT);

    let mut summary = format!("Linked entities: {}", names.join(", "));
    if elided > 0 {
        summary.push_str(&format!(" (+{elided} more)"));
    }
    summary.push_str(&format!("; {relationship_count} relationships"));
    summary
}
