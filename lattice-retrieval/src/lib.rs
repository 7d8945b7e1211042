//! # lattice-retrieval
//!
//! Knowledge-graph-enhanced hybrid retrieval engine. Turns a natural-language
//! question plus a set of dataset ids into a ranked list of evidence snippets
//! drawn from a vector index over document chunks and a property graph of
//! extracted entities.
//!
//! Pipeline: vector search ∥ (entity extraction → graph lookup) → hybrid
//! fusion → curation. Every branch degrades to empty on failure; the engine
//! never returns an error for a well-formed request.

pub mod curation;
pub mod engine;
pub mod extraction;
pub mod fusion;
pub mod search;

pub use curation::ResultCurator;
pub use engine::RetrievalEngine;
pub use extraction::EntityExtractor;
pub use fusion::HybridFusionEngine;
