use crate::errors::LatticeResult;

/// Cross-encoder reranking service.
pub trait IRerankService: Send + Sync {
    /// Rerank `documents` against `query`.
    ///
    /// Returns indices into `documents`, most relevant first. Indices the
    /// service omits are appended by the caller in their original order.
    fn rerank(&self, query: &str, documents: &[String]) -> LatticeResult<Vec<usize>>;
}
