//! Graph retrieval: per-entity node lookup plus bounded relationship
//! traversal, fanned out over a bounded worker pool.
//!
//! One failing entity never aborts the others; its error is logged and the
//! entity contributes nothing.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, warn};

use lattice_core::cancel::CancelToken;
use lattice_core::config::EngineTuning;
use lattice_core::constants::{
    GENERIC_NODE_LABEL, MAX_EXACT_NODE_MATCHES, MAX_FUZZY_NODE_MATCHES, NODE_NAME_PROPERTY,
};
use lattice_core::errors::LatticeResult;
use lattice_core::models::{Direction, ExtractedEntity, GraphNode, GraphRelationship};
use lattice_core::traits::IGraphStore;

use super::fuzzy::trigram_similarity;

/// Accumulated graph evidence for a whole query, deduplicated by id.
#[derive(Debug, Clone, Default)]
pub struct GraphContext {
    pub nodes: Vec<GraphNode>,
    pub relationships: Vec<GraphRelationship>,
}

impl GraphContext {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.relationships.is_empty()
    }
}

/// Queries the graph store for entity context.
pub struct GraphRetriever<'a> {
    store: &'a dyn IGraphStore,
    tuning: &'a EngineTuning,
}

impl<'a> GraphRetriever<'a> {
    pub fn new(store: &'a dyn IGraphStore, tuning: &'a EngineTuning) -> Self {
        Self { store, tuning }
    }

    /// Look up one extracted entity: exact name match first, fuzzy trigram
    /// match if nothing is exact, then bounded relationship traversal from
    /// every matched node.
    pub fn query_entity(
        &self,
        entity: &ExtractedEntity,
        max_depth: usize,
        max_relations: usize,
    ) -> LatticeResult<(Vec<GraphNode>, Vec<GraphRelationship>)> {
        let exact = self.store.find_nodes_by_property(
            GENERIC_NODE_LABEL,
            NODE_NAME_PROPERTY,
            &entity.text,
            MAX_EXACT_NODE_MATCHES,
        )?;

        let seeds = if exact.is_empty() {
            self.fuzzy_match(&entity.text)?
        } else {
            exact
        };

        if seeds.is_empty() {
            debug!(entity = %entity.text, "no graph match");
            return Ok((Vec::new(), Vec::new()));
        }

        let mut nodes = seeds.clone();
        let mut relationships = Vec::new();
        for seed in &seeds {
            let (far_nodes, rels) =
                self.traverse(&seed.id, max_depth, max_relations)?;
            nodes.extend(far_nodes);
            relationships.extend(rels);
        }

        Ok((nodes, relationships))
    }

    /// Fuzzy fallback: substring candidates from the store, ranked by
    /// trigram similarity against the entity text, best first.
    fn fuzzy_match(&self, text: &str) -> LatticeResult<Vec<GraphNode>> {
        // Ask the store for a wider candidate pool than we keep.
        let candidates = self.store.find_nodes_by_property_contains(
            GENERIC_NODE_LABEL,
            NODE_NAME_PROPERTY,
            text,
            MAX_FUZZY_NODE_MATCHES * 4,
        )?;

        let mut scored: Vec<(f64, GraphNode)> = candidates
            .into_iter()
            .filter_map(|node| {
                let name = node.name()?.to_string();
                let sim = trigram_similarity(text, &name);
                (sim >= self.tuning.fuzzy_match_threshold).then_some((sim, node))
            })
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(MAX_FUZZY_NODE_MATCHES);
        Ok(scored.into_iter().map(|(_, node)| node).collect())
    }

    /// Breadth-first relationship traversal from a seed node, both
    /// directions, capped at `max_relations` total for this entity.
    fn traverse(
        &self,
        seed_id: &str,
        max_depth: usize,
        max_relations: usize,
    ) -> LatticeResult<(Vec<GraphNode>, Vec<GraphRelationship>)> {
        let mut nodes = Vec::new();
        let mut relationships: Vec<GraphRelationship> = Vec::new();
        let mut visited: HashSet<String> = HashSet::from([seed_id.to_string()]);
        let mut frontier = vec![seed_id.to_string()];

        for _ in 0..max_depth.max(1) {
            if relationships.len() >= max_relations || frontier.is_empty() {
                break;
            }

            let mut next_frontier = Vec::new();
            for node_id in &frontier {
                let remaining = max_relations.saturating_sub(relationships.len());
                if remaining == 0 {
                    break;
                }
                let (far_nodes, rels) =
                    self.store
                        .find_relationships(node_id, None, Direction::Both, remaining)?;
                for rel in rels {
                    if relationships.len() >= max_relations {
                        break;
                    }
                    relationships.push(rel);
                }
                for far in far_nodes {
                    if visited.insert(far.id.clone()) {
                        next_frontier.push(far.id.clone());
                        nodes.push(far);
                    }
                }
            }
            frontier = next_frontier;
        }

        Ok((nodes, relationships))
    }

    /// Look up every extracted entity, fanned out on a bounded worker pool,
    /// and join into deduplicated accumulator collections.
    ///
    /// Node deduplication is by node id across the whole query, not
    /// per-entity.
    pub fn query_all(
        &self,
        entities: &[ExtractedEntity],
        max_depth: usize,
        max_relations: usize,
        cancel: &CancelToken,
    ) -> GraphContext {
        if entities.is_empty() || cancel.is_cancelled() {
            return GraphContext::default();
        }

        let per_entity: Vec<(Vec<GraphNode>, Vec<GraphRelationship>)> =
            match rayon::ThreadPoolBuilder::new()
                .num_threads(self.tuning.graph_worker_limit)
                .build()
            {
                Ok(pool) => pool.install(|| {
                    entities
                        .par_iter()
                        .map(|e| self.query_entity_isolated(e, max_depth, max_relations, cancel))
                        .collect()
                }),
                Err(e) => {
                    // Sequential fallback if the pool cannot be built.
                    warn!(error = %e, "worker pool unavailable, querying entities sequentially");
                    entities
                        .iter()
                        .map(|e| self.query_entity_isolated(e, max_depth, max_relations, cancel))
                        .collect()
                }
            };

        // Join point: dedup by id into the shared accumulators.
        let mut context = GraphContext::default();
        let mut seen_nodes: HashSet<String> = HashSet::new();
        let mut seen_rels: HashSet<String> = HashSet::new();
        for (nodes, relationships) in per_entity {
            for node in nodes {
                if seen_nodes.insert(node.id.clone()) {
                    context.nodes.push(node);
                }
            }
            for rel in relationships {
                if seen_rels.insert(rel.id.clone()) {
                    context.relationships.push(rel);
                }
            }
        }

        debug!(
            nodes = context.nodes.len(),
            relationships = context.relationships.len(),
            entities = entities.len(),
            "graph retrieval complete"
        );
        context
    }

    /// Per-entity error isolation: a failing entity is logged and skipped.
    fn query_entity_isolated(
        &self,
        entity: &ExtractedEntity,
        max_depth: usize,
        max_relations: usize,
        cancel: &CancelToken,
    ) -> (Vec<GraphNode>, Vec<GraphRelationship>) {
        if cancel.is_cancelled() {
            return (Vec::new(), Vec::new());
        }
        match self.query_entity(entity, max_depth, max_relations) {
            Ok(found) => found,
            Err(e) => {
                warn!(entity = %entity.text, error = %e, "entity lookup failed, skipping");
                (Vec::new(), Vec::new())
            }
        }
    }
}
