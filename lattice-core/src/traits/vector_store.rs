use crate::errors::LatticeResult;
use crate::models::{DocumentUnit, VectorMatch};

/// Vector similarity index over document units.
pub trait IVectorStore: Send + Sync {
    /// Search the index filtered to the given datasets.
    ///
    /// Returns at most `max_results` matches with similarity >= `min_score`,
    /// best first.
    fn search(
        &self,
        dataset_ids: &[String],
        query_vector: &[f32],
        max_results: usize,
        min_score: f64,
    ) -> LatticeResult<Vec<VectorMatch>>;

    /// Index one embedded document unit. Used by ingestion, not retrieval.
    fn add(&self, vector: &[f32], unit: &DocumentUnit) -> LatticeResult<()>;

    /// Drop every vector belonging to the given datasets.
    fn delete(&self, dataset_ids: &[String]) -> LatticeResult<()>;
}
