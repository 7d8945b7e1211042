/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("fusion failed: {reason}")]
    FusionFailed { reason: String },

    #[error("curation failed: {reason}")]
    CurationFailed { reason: String },

    #[error("entity extraction failed: {reason}")]
    ExtractionFailed { reason: String },

    #[error("retrieval cancelled")]
    Cancelled,
}
