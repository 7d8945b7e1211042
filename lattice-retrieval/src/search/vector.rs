//! Vector retrieval: embed the question, search the index with a widened
//! candidate pool, optionally rerank, relax the threshold once on empty
//! results, and hydrate document units in retrieval order.
//!
//! Any failure inside the procedure degrades to an empty result — retrieval
//! failure means "no evidence", never a hard error for the caller.

use std::collections::HashMap;
use std::time::Instant;

use tracing::{debug, warn};

use lattice_core::cancel::CancelToken;
use lattice_core::config::{defaults, RetrievalConfig};
use lattice_core::constants::RERANK_CANDIDATE_FLOOR;
use lattice_core::errors::LatticeResult;
use lattice_core::models::{RetrievedUnit, VectorMatch};
use lattice_core::traits::{IDocumentUnitStore, IEmbeddingService, IRerankService, IVectorStore};

/// Vector branch output: hydrated units in retrieval order plus the time
/// spent inside the rerank service.
#[derive(Debug, Default)]
pub struct VectorOutcome {
    pub units: Vec<RetrievedUnit>,
    pub rerank_ms: u64,
}

/// Searches the vector index and hydrates document units.
pub struct VectorRetriever<'a> {
    embedding: &'a dyn IEmbeddingService,
    vector_store: &'a dyn IVectorStore,
    documents: &'a dyn IDocumentUnitStore,
    reranker: Option<&'a dyn IRerankService>,
}

impl<'a> VectorRetriever<'a> {
    pub fn new(
        embedding: &'a dyn IEmbeddingService,
        vector_store: &'a dyn IVectorStore,
        documents: &'a dyn IDocumentUnitStore,
        reranker: Option<&'a dyn IRerankService>,
    ) -> Self {
        Self {
            embedding,
            vector_store,
            documents,
            reranker,
        }
    }

    /// Run the full vector procedure. Never fails: any error is logged and
    /// converted into an empty outcome.
    pub fn search(&self, config: &RetrievalConfig, cancel: &CancelToken) -> VectorOutcome {
        if cancel.is_cancelled() {
            return VectorOutcome::default();
        }
        match self.try_search(config, cancel) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "vector retrieval failed, degrading to empty");
                VectorOutcome::default()
            }
        }
    }

    fn try_search(
        &self,
        config: &RetrievalConfig,
        cancel: &CancelToken,
    ) -> LatticeResult<VectorOutcome> {
        let config = config.clone().normalized();
        let search_limit = if config.enable_rerank {
            (config.max_results * config.candidate_multiplier).max(RERANK_CANDIDATE_FLOOR)
        } else {
            config.max_results
        };

        let query_vector = self.embedding.embed(&config.question)?;

        let mut matches = self.vector_store.search(
            &config.dataset_ids,
            &query_vector,
            search_limit,
            config.min_score,
        )?;

        // Single relaxed retry: recall over precision, never repeated.
        if matches.is_empty() && config.min_score > defaults::RELAXED_MIN_SCORE {
            debug!(
                min_score = config.min_score,
                relaxed = defaults::RELAXED_MIN_SCORE,
                "no matches at requested threshold, retrying relaxed"
            );
            matches = self.vector_store.search(
                &config.dataset_ids,
                &query_vector,
                search_limit,
                defaults::RELAXED_MIN_SCORE,
            )?;
        }

        if matches.is_empty() || cancel.is_cancelled() {
            return Ok(VectorOutcome::default());
        }

        // Hydrate in retrieval order; storage order is ignored.
        let mut units = self.hydrate(&matches)?;
        let mut rerank_ms = 0;

        if config.enable_rerank {
            if let Some(reranker) = self.reranker {
                let started = Instant::now();
                units = self.rerank(reranker, &config.question, units);
                rerank_ms = started.elapsed().as_millis() as u64;
            }
        }

        units.truncate(config.max_results);
        debug!(units = units.len(), rerank_ms, "vector retrieval complete");
        Ok(VectorOutcome { units, rerank_ms })
    }

    /// Fetch document units for the matches and return them in match order,
    /// dropping ids the store no longer has.
    fn hydrate(&self, matches: &[VectorMatch]) -> LatticeResult<Vec<RetrievedUnit>> {
        let ids: Vec<String> = matches.iter().map(|m| m.document_unit_id.clone()).collect();
        let mut by_id: HashMap<String, _> = self
            .documents
            .list_by_ids(&ids)?
            .into_iter()
            .map(|u| (u.id.clone(), u))
            .collect();

        Ok(matches
            .iter()
            .filter_map(|m| {
                by_id.remove(&m.document_unit_id).map(|unit| RetrievedUnit {
                    unit,
                    similarity: Some(m.similarity),
                })
            })
            .collect())
    }

    /// Reorder units by the rerank service's returned ranking. Indices the
    /// service omits keep their original relative order at the tail. A
    /// failing rerank call keeps vector order.
    fn rerank(
        &self,
        reranker: &dyn IRerankService,
        question: &str,
        units: Vec<RetrievedUnit>,
    ) -> Vec<RetrievedUnit> {
        let documents: Vec<String> = units.iter().map(|u| u.unit.content.clone()).collect();
        let ranking = match reranker.rerank(question, &documents) {
            Ok(ranking) => ranking,
            Err(e) => {
                warn!(error = %e, "rerank failed, keeping vector order");
                return units;
            }
        };

        let mut slots: Vec<Option<RetrievedUnit>> = units.into_iter().map(Some).collect();
        let mut reordered = Vec::with_capacity(slots.len());
        for idx in ranking {
            if let Some(slot) = slots.get_mut(idx) {
                if let Some(unit) = slot.take() {
                    reordered.push(unit);
                }
            }
        }
        // Anything the service didn't rank goes after, in vector order.
        reordered.extend(slots.into_iter().flatten());
        reordered
    }
}
