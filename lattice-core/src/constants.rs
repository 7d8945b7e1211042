/// Lattice system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generic node label entity lookups run against.
pub const GENERIC_NODE_LABEL: &str = "Entity";

/// Node property holding the entity's canonical name.
pub const NODE_NAME_PROPERTY: &str = "name";

/// Maximum exact-match nodes considered per extracted entity.
pub const MAX_EXACT_NODE_MATCHES: usize = 5;

/// Maximum fuzzy-match nodes considered per extracted entity.
pub const MAX_FUZZY_NODE_MATCHES: usize = 5;

/// Maximum graph-only results injected during fusion.
pub const MAX_GRAPH_ONLY_RESULTS: usize = 5;

/// Minimum candidate pool requested from the vector index when reranking.
pub const RERANK_CANDIDATE_FLOOR: usize = 30;

/// Characters taken from each end of the content for diversity signatures.
pub const SIGNATURE_EDGE_CHARS: usize = 50;

/// Entity names listed in an enhancement summary before eliding.
pub const SUMMARY_ENTITY_LIMIT: usize = 3;
