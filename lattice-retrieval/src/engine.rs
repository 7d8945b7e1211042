//! RetrievalEngine: the entry point sequencing the full hybrid pipeline.
//!
//! vector search ∥ (entity extraction → graph lookup) → fusion → curation.
//!
//! The two gathering branches are data-independent and run concurrently;
//! each degrades to empty on failure or cancellation. The engine never
//! returns an error for a well-formed request.

use std::time::Instant;

use tracing::{debug, info};

use lattice_core::cancel::CancelToken;
use lattice_core::config::{EngineTuning, RetrievalConfig};
use lattice_core::models::{RetrievalResponse, StageTimings};
use lattice_core::traits::{
    IDocumentUnitStore, IEmbeddingService, IGraphStore, IRerankService, IVectorStore,
};

use crate::curation::ResultCurator;
use crate::extraction::EntityExtractor;
use crate::fusion::HybridFusionEngine;
use crate::search::{GraphContext, GraphRetriever, VectorOutcome, VectorRetriever};

/// The main retrieval engine. Holds the injected source clients and the
/// engine-level tuning; per-request state lives on the stack.
pub struct RetrievalEngine<'a> {
    embedding: &'a dyn IEmbeddingService,
    vector_store: &'a dyn IVectorStore,
    documents: &'a dyn IDocumentUnitStore,
    graph_store: Option<&'a dyn IGraphStore>,
    reranker: Option<&'a dyn IRerankService>,
    extractor: EntityExtractor,
    tuning: EngineTuning,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(
        embedding: &'a dyn IEmbeddingService,
        vector_store: &'a dyn IVectorStore,
        documents: &'a dyn IDocumentUnitStore,
    ) -> Self {
        Self {
            embedding,
            vector_store,
            documents,
            graph_store: None,
            reranker: None,
            extractor: EntityExtractor::default(),
            tuning: EngineTuning::default(),
        }
    }

    /// Enable graph enhancement by attaching a graph store client.
    pub fn with_graph_store(mut self, store: &'a dyn IGraphStore) -> Self {
        self.graph_store = Some(store);
        self
    }

    /// Attach a rerank service. Without one, vector order is kept even when
    /// the request enables reranking.
    pub fn with_reranker(mut self, reranker: &'a dyn IRerankService) -> Self {
        self.reranker = Some(reranker);
        self
    }

    pub fn with_tuning(mut self, tuning: EngineTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn with_extractor(mut self, extractor: EntityExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Run a retrieval without external cancellation.
    pub fn retrieve(&self, config: &RetrievalConfig) -> RetrievalResponse {
        self.retrieve_with_cancel(config, &CancelToken::new())
    }

    /// Run the full pipeline, honoring the caller's cancel token.
    ///
    /// Always returns a response object, possibly empty, with accurate
    /// per-stage counts.
    pub fn retrieve_with_cancel(
        &self,
        config: &RetrievalConfig,
        cancel: &CancelToken,
    ) -> RetrievalResponse {
        let total_started = Instant::now();
        let config = config.clone().normalized();

        if cancel.is_cancelled() {
            return RetrievalResponse::empty();
        }

        // Gather from both sources concurrently; each branch degrades to
        // empty on its own failures.
        let mut vector_ms = 0;
        let mut graph_ms = 0;
        let (vector_outcome, graph_context) = std::thread::scope(|scope| {
            let graph_handle = scope.spawn(|| {
                let started = Instant::now();
                let context = self.gather_graph(&config, cancel);
                (context, started.elapsed().as_millis() as u64)
            });

            let started = Instant::now();
            let retriever = VectorRetriever::new(
                self.embedding,
                self.vector_store,
                self.documents,
                self.reranker,
            );
            let outcome = retriever.search(&config, cancel);
            vector_ms = started.elapsed().as_millis() as u64;

            // A panicked graph branch degrades to empty like any failure.
            let (context, elapsed) = graph_handle.join().unwrap_or_else(|_| {
                (GraphContext::default(), 0)
            });
            graph_ms = elapsed;
            (outcome, context)
        });

        let VectorOutcome { units, rerank_ms } = vector_outcome;
        debug!(
            vector_units = units.len(),
            graph_nodes = graph_context.nodes.len(),
            graph_relationships = graph_context.relationships.len(),
            "sources gathered"
        );

        // Fuse and curate. Both stages carry their own degradation paths.
        let fusion_started = Instant::now();
        let fusion = HybridFusionEngine::new(&self.tuning);
        let fused = fusion.fuse(&units, &graph_context, &config);
        let curator = ResultCurator::new(&self.tuning);
        let results = curator.curate(fused, &config);
        let fusion_ms = fusion_started.elapsed().as_millis() as u64;

        let response = RetrievalResponse {
            vector_result_count: units.len(),
            graph_entity_count: graph_context.nodes.len(),
            graph_relationship_count: graph_context.relationships.len(),
            results,
            timings: StageTimings {
                vector_ms,
                graph_ms,
                fusion_ms,
                rerank_ms,
                total_ms: total_started.elapsed().as_millis() as u64,
            },
        };

        info!(
            results = response.results.len(),
            vector = response.vector_result_count,
            graph_entities = response.graph_entity_count,
            total_ms = response.timings.total_ms,
            "retrieval complete"
        );
        response
    }

    /// The graph branch: extract entities, then fan out graph lookups.
    /// Disabled requests and missing graph stores yield an empty context.
    fn gather_graph(&self, config: &RetrievalConfig, cancel: &CancelToken) -> GraphContext {
        if !config.enable_graph_enhancement {
            return GraphContext::default();
        }
        let Some(graph_store) = self.graph_store else {
            debug!("graph enhancement requested but no graph store attached");
            return GraphContext::default();
        };

        let entities: Vec<_> = self
            .extractor
            .extract(&config.question, config.entity_extraction_strategy)
            .into_iter()
            .collect();
        if entities.is_empty() {
            return GraphContext::default();
        }

        let retriever = GraphRetriever::new(graph_store, &self.tuning);
        retriever.query_all(
            &entities,
            config.max_graph_depth,
            config.max_relations_per_entity,
            cancel,
        )
    }
}
