//! Error types for the Lattice workspace, one enum per failure domain.

mod retrieval_error;
mod source_error;

pub use retrieval_error::RetrievalError;
pub use source_error::SourceError;

/// Top-level error wrapping every subsystem's failure domain.
#[derive(Debug, thiserror::Error)]
pub enum LatticeError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Convenience result alias used across the workspace.
pub type LatticeResult<T> = Result<T, LatticeError>;
