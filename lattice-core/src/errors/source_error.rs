/// Failures of the external evidence sources consumed through traits.
///
/// Every variant is recoverable: the owning branch degrades to an empty
/// result instead of surfacing the error to the caller.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("embedding service failed: {message}")]
    Embedding { message: String },

    #[error("vector store query failed: {message}")]
    VectorStore { message: String },

    #[error("graph store query failed: {message}")]
    GraphStore { message: String },

    #[error("rerank service failed: {message}")]
    Rerank { message: String },

    #[error("document unit store failed: {message}")]
    DocumentStore { message: String },
}
