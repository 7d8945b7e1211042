use crate::errors::LatticeResult;

/// Text embedding provider.
pub trait IEmbeddingService: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> LatticeResult<Vec<f32>>;

    /// The dimensionality of embeddings produced by this service.
    fn dimensions(&self) -> usize;
}
