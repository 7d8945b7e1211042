use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{LatticeError, LatticeResult};

/// Engine-level tuning knobs, shared by every request.
///
/// Defaults are the product-tuned constants from [`defaults`];
/// deployments can override them via a TOML fragment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineTuning {
    /// `graph_weight` above this selects semantic fusion.
    pub semantic_weight_threshold: f64,
    /// `graph_weight` below this selects linear weighted fusion.
    pub linear_weight_threshold: f64,
    /// Graph-entity ratio above which adaptive fusion goes semantic.
    pub adaptive_semantic_ratio: f64,
    /// Graph-entity ratio above which adaptive fusion goes rank fusion.
    pub adaptive_rank_fusion_ratio: f64,
    /// Linear weight used when adaptive fusion falls through to linear.
    pub adaptive_linear_weight: f64,
    /// RRF smoothing constant.
    pub rrf_k: f64,
    /// Minimum trigram similarity for fuzzy node matches.
    pub fuzzy_match_threshold: f64,
    /// Bounded worker count for per-entity graph fan-out.
    pub graph_worker_limit: usize,
    /// Fraction of the sorted input diversity filtering may keep.
    pub diversity_keep_ratio: f64,
    /// Score threshold applied during curation.
    pub curation_min_score: f64,
}

impl Default for EngineTuning {
    fn default() -> Self {
        Self {
            semantic_weight_threshold: defaults::SEMANTIC_WEIGHT_THRESHOLD,
            linear_weight_threshold: defaults::LINEAR_WEIGHT_THRESHOLD,
            adaptive_semantic_ratio: defaults::ADAPTIVE_SEMANTIC_RATIO,
            adaptive_rank_fusion_ratio: defaults::ADAPTIVE_RANK_FUSION_RATIO,
            adaptive_linear_weight: defaults::ADAPTIVE_LINEAR_WEIGHT,
            rrf_k: defaults::RRF_K,
            fuzzy_match_threshold: defaults::FUZZY_MATCH_THRESHOLD,
            graph_worker_limit: defaults::GRAPH_WORKER_LIMIT,
            diversity_keep_ratio: defaults::DIVERSITY_KEEP_RATIO,
            curation_min_score: defaults::CURATION_MIN_SCORE,
        }
    }
}

impl EngineTuning {
    /// Parse tuning overrides from a TOML fragment. Missing keys keep
    /// their defaults.
    pub fn from_toml_str(s: &str) -> LatticeResult<Self> {
        toml::from_str(s).map_err(|e| LatticeError::Config {
            reason: e.to_string(),
        })
    }
}
