//! Named defaults for the request contract and the product-tuned fusion
//! constants. Tuned values, not derived; override via TOML where exposed.

pub const DEFAULT_MAX_RESULTS: usize = 15;
pub const DEFAULT_MIN_SCORE: f64 = 0.7;
pub const DEFAULT_CANDIDATE_MULTIPLIER: usize = 2;
pub const DEFAULT_GRAPH_WEIGHT: f64 = 0.3;
pub const DEFAULT_MAX_GRAPH_DEPTH: usize = 2;
pub const DEFAULT_MAX_RELATIONS_PER_ENTITY: usize = 10;

/// Relaxed similarity threshold for the single empty-result vector retry.
pub const RELAXED_MIN_SCORE: f64 = 0.3;

/// `graph_weight` above this selects the semantic fusion strategy.
pub const SEMANTIC_WEIGHT_THRESHOLD: f64 = 0.5;
/// `graph_weight` below this selects linear weighted fusion.
pub const LINEAR_WEIGHT_THRESHOLD: f64 = 0.2;
/// Graph-entity ratio above which adaptive fusion goes semantic.
pub const ADAPTIVE_SEMANTIC_RATIO: f64 = 0.7;
/// Graph-entity ratio above which adaptive fusion goes rank fusion.
pub const ADAPTIVE_RANK_FUSION_RATIO: f64 = 0.3;
/// Linear weight applied when adaptive fusion falls through to linear.
pub const ADAPTIVE_LINEAR_WEIGHT: f64 = 0.2;

/// Smoothing constant for Reciprocal Rank Fusion.
pub const RRF_K: f64 = 60.0;

/// Minimum trigram similarity for a fuzzy node match to count.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.35;

/// Bounded worker count for per-entity graph fan-out.
pub const GRAPH_WORKER_LIMIT: usize = 4;

/// Fraction of the sorted input diversity filtering may keep.
pub const DIVERSITY_KEEP_RATIO: f64 = 0.8;
/// Absolute floor for diversity filtering: min(this, input/2).
pub const DIVERSITY_FLOOR: usize = 5;
/// Score threshold applied during curation.
pub const CURATION_MIN_SCORE: f64 = 0.5;
