//! Property tests over config normalization and model construction.

use proptest::prelude::*;

use lattice_core::config::RetrievalConfig;
use lattice_core::models::{EntityType, ExtractedEntity};

proptest! {
    #[test]
    fn normalization_clamps_every_field(
        max_results in 0usize..10_000,
        min_score in -10.0f64..10.0,
        candidate_multiplier in 0usize..100,
        graph_weight in -10.0f64..10.0,
        max_graph_depth in 0usize..100,
        max_relations_per_entity in 0usize..1_000,
    ) {
        let config = RetrievalConfig {
            max_results,
            min_score,
            candidate_multiplier,
            graph_weight,
            max_graph_depth,
            max_relations_per_entity,
            ..RetrievalConfig::default()
        }
        .normalized();

        prop_assert!((1..=100).contains(&config.max_results));
        prop_assert!((0.0..=1.0).contains(&config.min_score));
        prop_assert!((1..=5).contains(&config.candidate_multiplier));
        prop_assert!((0.0..=1.0).contains(&config.graph_weight));
        prop_assert!((1..=5).contains(&config.max_graph_depth));
        prop_assert!((1..=50).contains(&config.max_relations_per_entity));
    }

    #[test]
    fn normalization_is_idempotent(
        max_results in 0usize..10_000,
        min_score in -10.0f64..10.0,
    ) {
        let once = RetrievalConfig {
            max_results,
            min_score,
            ..RetrievalConfig::default()
        }
        .normalized();
        let twice = once.clone().normalized();

        prop_assert_eq!(once.max_results, twice.max_results);
        prop_assert_eq!(once.min_score, twice.min_score);
    }

    #[test]
    fn entity_confidence_is_always_clamped(confidence in -10.0f64..10.0) {
        let entity = ExtractedEntity::new("x", EntityType::Unknown, 0, 1, confidence);
        prop_assert!((0.0..=1.0).contains(&entity.confidence));
    }
}
