use crate::errors::LatticeResult;
use crate::models::DocumentUnit;

/// Persistence for document units, external to this subsystem.
pub trait IDocumentUnitStore: Send + Sync {
    /// Fetch units by id. Order of the returned records is unspecified;
    /// the retriever re-orders them by retrieval rank.
    fn list_by_ids(&self, ids: &[String]) -> LatticeResult<Vec<DocumentUnit>>;
}
