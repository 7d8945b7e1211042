//! Narrow, swappable interfaces over the external capabilities the
//! retrieval engine consumes. None of them are implemented in this
//! workspace; callers inject store and service clients.

mod document_store;
mod embedding;
mod graph_store;
mod rerank;
mod vector_store;

pub use document_store::IDocumentUnitStore;
pub use embedding::IEmbeddingService;
pub use graph_store::IGraphStore;
pub use rerank::IRerankService;
pub use vector_store::IVectorStore;
