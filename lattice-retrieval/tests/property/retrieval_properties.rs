//! Property tests over extraction, fusion scoring, and curation.

use proptest::prelude::*;

use lattice_core::config::{EngineTuning, ExtractionStrategy, RetrievalConfig};
use lattice_core::models::{DocumentUnit, EnhancedResult};
use lattice_retrieval::fusion::strategy::{self, FusionStrategy};
use lattice_retrieval::{EntityExtractor, ResultCurator};

fn doc(id: usize, content: &str) -> DocumentUnit {
    DocumentUnit {
        id: format!("u{id}"),
        dataset_id: "ds".to_string(),
        file_id: "f".to_string(),
        page: 1,
        content: content.to_string(),
        relevance_order: 0,
    }
}

fn result(id: usize, vector_score: f64, graph_score: f64) -> EnhancedResult {
    let mut r = EnhancedResult::from_vector(doc(id, &format!("content {id}")), vector_score);
    r.graph_score = graph_score;
    r.relevance_score = vector_score;
    r
}

fn arb_results() -> impl Strategy<Value = Vec<EnhancedResult>> {
    prop::collection::vec((0.0f64..=1.0, 0.0f64..=1.0), 0..30).prop_map(|scores| {
        scores
            .into_iter()
            .enumerate()
            .map(|(i, (v, g))| result(i, v, g))
            .collect()
    })
}

fn arb_strategy() -> impl Strategy<Value = FusionStrategy> {
    prop_oneof![
        (0.0f64..=1.0).prop_map(FusionStrategy::LinearWeighted),
        Just(FusionStrategy::RankFusion),
        Just(FusionStrategy::Semantic),
        Just(FusionStrategy::Adaptive),
    ]
}

proptest! {
    #[test]
    fn fused_scores_stay_in_unit_range(
        mut results in arb_results(),
        strat in arb_strategy(),
    ) {
        let tuning = EngineTuning::default();
        strategy::apply(strat, &mut results, &tuning);
        for r in &results {
            prop_assert!((0.0..=1.0).contains(&r.relevance_score));
        }
    }

    #[test]
    fn rank_fusion_reapplication_is_stable(mut results in arb_results()) {
        let tuning = EngineTuning::default();
        strategy::apply(FusionStrategy::RankFusion, &mut results, &tuning);
        let first: Vec<f64> = results.iter().map(|r| r.relevance_score).collect();
        strategy::apply(FusionStrategy::RankFusion, &mut results, &tuning);
        let second: Vec<f64> = results.iter().map(|r| r.relevance_score).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn curation_respects_cap_and_ordering(
        results in arb_results(),
        max_results in 0usize..150,
    ) {
        let tuning = EngineTuning::default();
        let curator = ResultCurator::new(&tuning);
        let config = RetrievalConfig {
            max_results,
            enable_rerank: false,
            ..RetrievalConfig::default()
        };

        let curated = curator.curate(results, &config);

        prop_assert!(curated.len() <= max_results.clamp(1, 100));
        for pair in curated.windows(2) {
            prop_assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
        for r in &curated {
            prop_assert!(r.relevance_score >= tuning.curation_min_score);
        }
    }

    #[test]
    fn curation_with_diversity_never_exceeds_input(results in arb_results()) {
        let tuning = EngineTuning::default();
        let curator = ResultCurator::new(&tuning);
        let input_len = results.len();
        let config = RetrievalConfig {
            enable_rerank: true,
            ..RetrievalConfig::default()
        };

        let curated = curator.curate(results, &config);
        prop_assert!(curated.len() <= input_len);
    }

    #[test]
    fn extraction_is_a_set(text in ".{0,200}") {
        let extractor = EntityExtractor::default();
        let entities: Vec<_> = extractor
            .extract(&text, ExtractionStrategy::Keyword)
            .into_iter()
            .collect();
        for (i, a) in entities.iter().enumerate() {
            for b in entities.iter().skip(i + 1) {
                prop_assert!(
                    !(a.text == b.text && a.entity_type == b.entity_type),
                    "duplicate entity {:?}",
                    a.text
                );
            }
        }
        for e in &entities {
            prop_assert!((0.0..=1.0).contains(&e.confidence));
        }
    }
}
