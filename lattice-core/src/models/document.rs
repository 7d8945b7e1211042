use serde::{Deserialize, Serialize};

/// A raw hit from the vector index, consumed immediately to hydrate
/// the matching [`DocumentUnit`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorMatch {
    pub document_unit_id: String,
    /// Cosine similarity in [0, 1].
    pub similarity: f64,
    /// Opaque index-side metadata carried through for observability.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// A persisted, page-scoped chunk of ingested document content.
/// The atomic unit of vector indexing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentUnit {
    pub id: String,
    pub dataset_id: String,
    pub file_id: String,
    pub page: u32,
    pub content: String,
    /// Relevance order assigned at ingestion time. Retrieval ignores this
    /// and keeps rank order from the index instead.
    pub relevance_order: u32,
}

/// A hydrated document unit in retrieval order, with the similarity of the
/// vector match that surfaced it (absent for backfilled units).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedUnit {
    pub unit: DocumentUnit,
    pub similarity: Option<f64>,
}
