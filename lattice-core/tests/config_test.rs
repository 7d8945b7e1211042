//! RetrievalConfig normalization and EngineTuning overrides.

use lattice_core::config::{defaults, EngineTuning, ExtractionStrategy, RetrievalConfig};

#[test]
fn defaults_match_named_constants() {
    let config = RetrievalConfig::default();
    assert_eq!(config.max_results, defaults::DEFAULT_MAX_RESULTS);
    assert_eq!(config.min_score, defaults::DEFAULT_MIN_SCORE);
    assert_eq!(config.candidate_multiplier, defaults::DEFAULT_CANDIDATE_MULTIPLIER);
    assert_eq!(config.graph_weight, defaults::DEFAULT_GRAPH_WEIGHT);
    assert!(config.enable_rerank);
    assert!(config.enable_graph_enhancement);
    assert!(!config.include_graph_only_results);
    assert_eq!(config.entity_extraction_strategy, ExtractionStrategy::Keyword);
}

#[test]
fn normalization_clamps_out_of_range_values() {
    let config = RetrievalConfig {
        max_results: 5000,
        min_score: 2.5,
        candidate_multiplier: 99,
        graph_weight: -0.4,
        max_graph_depth: 40,
        max_relations_per_entity: 0,
        ..RetrievalConfig::default()
    }
    .normalized();

    assert_eq!(config.max_results, 100);
    assert_eq!(config.min_score, 1.0);
    assert_eq!(config.candidate_multiplier, 5);
    assert_eq!(config.graph_weight, 0.0);
    assert_eq!(config.max_graph_depth, 5);
    assert_eq!(config.max_relations_per_entity, 1);
}

#[test]
fn normalization_keeps_in_range_values() {
    let config = RetrievalConfig {
        max_results: 20,
        min_score: 0.6,
        ..RetrievalConfig::default()
    }
    .normalized();

    assert_eq!(config.max_results, 20);
    assert_eq!(config.min_score, 0.6);
}

#[test]
fn config_deserializes_with_partial_fields() {
    let config: RetrievalConfig = serde_json::from_str(
        r#"{"question": "deploy redis", "dataset_ids": ["ds-1"], "max_results": 5}"#,
    )
    .unwrap();

    assert_eq!(config.question, "deploy redis");
    assert_eq!(config.max_results, 5);
    assert_eq!(config.min_score, defaults::DEFAULT_MIN_SCORE);
}

#[test]
fn tuning_defaults_use_product_constants() {
    let tuning = EngineTuning::default();
    assert_eq!(tuning.semantic_weight_threshold, defaults::SEMANTIC_WEIGHT_THRESHOLD);
    assert_eq!(tuning.linear_weight_threshold, defaults::LINEAR_WEIGHT_THRESHOLD);
    assert_eq!(tuning.adaptive_semantic_ratio, defaults::ADAPTIVE_SEMANTIC_RATIO);
    assert_eq!(tuning.rrf_k, defaults::RRF_K);
}

#[test]
fn tuning_toml_overrides_only_named_keys() {
    let tuning = EngineTuning::from_toml_str(
        "curation_min_score = 0.4\ngraph_worker_limit = 8\n",
    )
    .unwrap();

    assert_eq!(tuning.curation_min_score, 0.4);
    assert_eq!(tuning.graph_worker_limit, 8);
    assert_eq!(tuning.rrf_k, defaults::RRF_K);
}

#[test]
fn tuning_rejects_malformed_toml() {
    assert!(EngineTuning::from_toml_str("curation_min_score = [").is_err());
}

#[test]
fn extraction_strategy_uses_snake_case_names() {
    assert_eq!(
        serde_json::to_string(&ExtractionStrategy::Keyword).unwrap(),
        "\"keyword\""
    );
    let parsed: ExtractionStrategy = serde_json::from_str("\"llm\"").unwrap();
    assert_eq!(parsed, ExtractionStrategy::Llm);
}
