//! Fusion scoring strategies and their selection dispatch table.
//!
//! Strategy selection is an ordered rule table keyed on the request's
//! `graph_weight`; new strategies slot in as new rules without touching the
//! selection loop. The thresholds are product-tuned constants from
//! [`EngineTuning`].

use lattice_core::config::EngineTuning;
use lattice_core::models::EnhancedResult;

/// Score boost semantic fusion grants per unit of graph score.
const SEMANTIC_GRAPH_FACTOR: f64 = 0.2;
/// Flat semantic bonus for results carrying any graph entities.
const SEMANTIC_ENTITY_BONUS: f64 = 0.1;

/// How `relevance_score` is computed from the per-source scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FusionStrategy {
    /// `(1-w) * vector + w * graph`.
    LinearWeighted(f64),
    /// Reciprocal Rank Fusion over the vector and graph rankings.
    RankFusion,
    /// Vector-led with a graph bonus.
    Semantic,
    /// Picks between the other three from the observed graph-entity ratio.
    Adaptive,
}

type SelectRule = (
    fn(f64, &EngineTuning) -> bool,
    fn(f64, &EngineTuning) -> FusionStrategy,
);

fn above_semantic_threshold(w: f64, t: &EngineTuning) -> bool {
    w > t.semantic_weight_threshold
}
fn below_linear_threshold(w: f64, t: &EngineTuning) -> bool {
    w < t.linear_weight_threshold
}
fn always(_: f64, _: &EngineTuning) -> bool {
    true
}
fn to_semantic(_: f64, _: &EngineTuning) -> FusionStrategy {
    FusionStrategy::Semantic
}
fn to_linear(w: f64, _: &EngineTuning) -> FusionStrategy {
    FusionStrategy::LinearWeighted(w)
}
fn to_adaptive(_: f64, _: &EngineTuning) -> FusionStrategy {
    FusionStrategy::Adaptive
}

/// Ordered dispatch table; the first matching rule wins.
const DISPATCH: &[SelectRule] = &[
    (above_semantic_threshold, to_semantic),
    (below_linear_threshold, to_linear),
    (always, to_adaptive),
];

/// Select the strategy for a request's `graph_weight`.
pub fn select(graph_weight: f64, tuning: &EngineTuning) -> FusionStrategy {
    for (matches, build) in DISPATCH {
        if matches(graph_weight, tuning) {
            return build(graph_weight, tuning);
        }
    }
    // The table ends with a catch-all rule.
    FusionStrategy::Adaptive
}

/// Apply a strategy, setting `relevance_score` on every result.
/// All scores land in [0, 1].
pub fn apply(strategy: FusionStrategy, results: &mut [EnhancedResult], tuning: &EngineTuning) {
    match strategy {
        FusionStrategy::LinearWeighted(w) => {
            for r in results.iter_mut() {
                r.relevance_score =
                    ((1.0 - w) * r.vector_score + w * r.graph_score).clamp(0.0, 1.0);
            }
        }
        FusionStrategy::Semantic => {
            for r in results.iter_mut() {
                let mut score = r.vector_score + SEMANTIC_GRAPH_FACTOR * r.graph_score;
                if !r.graph_entities.is_empty() {
                    score += SEMANTIC_ENTITY_BONUS;
                }
                r.relevance_score = score.clamp(0.0, 1.0);
            }
        }
        FusionStrategy::RankFusion => apply_rank_fusion(results, tuning.rrf_k),
        FusionStrategy::Adaptive => {
            let with_entities = results
                .iter()
                .filter(|r| !r.graph_entities.is_empty())
                .count();
            let graph_ratio = if results.is_empty() {
                0.0
            } else {
                with_entities as f64 / results.len() as f64
            };

            let inner = if graph_ratio > tuning.adaptive_semantic_ratio {
                FusionStrategy::Semantic
            } else if graph_ratio > tuning.adaptive_rank_fusion_ratio {
                FusionStrategy::RankFusion
            } else {
                FusionStrategy::LinearWeighted(tuning.adaptive_linear_weight)
            };
            apply(inner, results, tuning);
        }
    }
}

/// RRF: rank every result independently by vector score and by graph score,
/// sum the reciprocal ranks, and normalize by the maximum. Pure in the two
/// per-source scores, so reapplying yields identical relevance scores.
fn apply_rank_fusion(results: &mut [EnhancedResult], k: f64) {
    let vector_ranks = ranks_desc(results, |r| r.vector_score);
    let graph_ranks = ranks_desc(results, |r| r.graph_score);

    let rrf: Vec<f64> = (0..results.len())
        .map(|i| 1.0 / (k + vector_ranks[i] as f64) + 1.0 / (k + graph_ranks[i] as f64))
        .collect();
    let max_rrf = rrf.iter().cloned().fold(f64::MIN, f64::max).max(f64::EPSILON);

    for (r, score) in results.iter_mut().zip(&rrf) {
        r.relevance_score = (score / max_rrf).clamp(0.0, 1.0);
    }
}

/// 1-based rank of each result when sorted descending by `key`.
/// Ties break by original position, which keeps the ranking stable.
fn ranks_desc(results: &[EnhancedResult], key: fn(&EnhancedResult) -> f64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..results.len()).collect();
    order.sort_by(|&a, &b| {
        key(&results[b])
            .partial_cmp(&key(&results[a]))
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });

    let mut ranks = vec![0; results.len()];
    for (rank, &idx) in order.iter().enumerate() {
        ranks[idx] = rank + 1;
    }
    ranks
}
