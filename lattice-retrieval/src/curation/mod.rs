//! Result curation: final multi-key sort, diversity de-duplication,
//! score-threshold filtering, and result-count capping.
//!
//! Curation failure degrades to the simplest safe behavior: sort by
//! relevance and truncate.

use std::collections::HashSet;

use tracing::{debug, warn};

use lattice_core::config::defaults::DIVERSITY_FLOOR;
use lattice_core::config::{EngineTuning, RetrievalConfig};
use lattice_core::constants::SIGNATURE_EDGE_CHARS;
use lattice_core::errors::LatticeResult;
use lattice_core::models::EnhancedResult;

/// Applies the final ordering and filtering policy.
pub struct ResultCurator<'a> {
    tuning: &'a EngineTuning,
}

impl<'a> ResultCurator<'a> {
    pub fn new(tuning: &'a EngineTuning) -> Self {
        Self { tuning }
    }

    /// Curate fused results into the final ranked list.
    ///
    /// The current steps are all infallible; the fallback arm is the
    /// contract for fallible steps added behind [`Self::try_curate`]
    /// later. Panics are not caught here.
    pub fn curate(
        &self,
        results: Vec<EnhancedResult>,
        config: &RetrievalConfig,
    ) -> Vec<EnhancedResult> {
        let fallback = results.clone();
        match self.try_curate(results, config) {
            Ok(curated) => curated,
            Err(e) => {
                warn!(error = %e, "curation failed, degrading to sort and truncate");
                let mut simple = fallback;
                sort_results(&mut simple);
                simple.truncate(config.max_results.clamp(1, 100));
                simple
            }
        }
    }

    fn try_curate(
        &self,
        mut results: Vec<EnhancedResult>,
        config: &RetrievalConfig,
    ) -> LatticeResult<Vec<EnhancedResult>> {
        // Step 1: multi-key sort.
        sort_results(&mut results);

        // Step 2: diversity filtering, only when reranking is on.
        if config.enable_rerank {
            results = self.diversity_filter(results);
        }

        // Step 3: score threshold.
        let before = results.len();
        results.retain(|r| r.relevance_score >= self.tuning.curation_min_score);
        if results.len() < before {
            debug!(
                dropped = before - results.len(),
                threshold = self.tuning.curation_min_score,
                "results below curation threshold"
            );
        }

        // Step 4: cap.
        results.truncate(config.max_results.clamp(1, 100));
        Ok(results)
    }

    /// Skip results whose content signature was already seen, keeping at
    /// most `diversity_keep_ratio` of the input. If fewer than
    /// `min(5, input/2)` survive, backfill from the sorted input.
    fn diversity_filter(&self, results: Vec<EnhancedResult>) -> Vec<EnhancedResult> {
        let input_count = results.len();
        if input_count == 0 {
            return results;
        }

        let keep_limit =
            ((input_count as f64 * self.tuning.diversity_keep_ratio).ceil() as usize).max(1);
        let floor = DIVERSITY_FLOOR.min(input_count / 2);

        let mut seen: HashSet<String> = HashSet::new();
        let mut kept_indices: Vec<usize> = Vec::new();
        for (i, result) in results.iter().enumerate() {
            if kept_indices.len() >= keep_limit {
                break;
            }
            if seen.insert(signature(result)) {
                kept_indices.push(i);
            }
        }

        // Backfill duplicates, best first, until the floor is met.
        if kept_indices.len() < floor {
            let chosen: HashSet<usize> = kept_indices.iter().copied().collect();
            for i in 0..input_count {
                if kept_indices.len() >= floor {
                    break;
                }
                if !chosen.contains(&i) {
                    kept_indices.push(i);
                }
            }
            kept_indices.sort_unstable();
        }

        debug!(
            input = input_count,
            kept = kept_indices.len(),
            "diversity filtering applied"
        );

        let mut kept = Vec::with_capacity(kept_indices.len());
        let mut want = kept_indices.into_iter();
        let mut next_want = want.next();
        for (i, r) in results.into_iter().enumerate() {
            match next_want {
                Some(w) if w == i => {
                    kept.push(r);
                    next_want = want.next();
                }
                Some(_) => {}
                None => break,
            }
        }
        kept
    }
}

/// Sort by relevance desc, then attached-entity count desc, then vector
/// score desc.
fn sort_results(results: &mut [EnhancedResult]) {
    results.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.graph_entities.len().cmp(&a.graph_entities.len()))
            .then_with(|| {
                b.vector_score
                    .partial_cmp(&a.vector_score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });
}

/// Content signature: first and last `SIGNATURE_EDGE_CHARS` characters of
/// the document content, or the raw entity id for graph-only results.
fn signature(result: &EnhancedResult) -> String {
    match &result.document_unit {
        Some(unit) => {
            let chars: Vec<char> = unit.content.chars().collect();
            if chars.len() <= SIGNATURE_EDGE_CHARS * 2 {
                unit.content.clone()
            } else {
                let head: String = chars[..SIGNATURE_EDGE_CHARS].iter().collect();
                let tail: String = chars[chars.len() - SIGNATURE_EDGE_CHARS..].iter().collect();
                format!("{head}{tail}")
            }
        }
        None => result
            .graph_entities
            .first()
            .map(|n| n.id.clone())
            .unwrap_or_default(),
    }
}
