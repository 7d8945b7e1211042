pub mod defaults;
mod retrieval_config;
mod tuning;

pub use retrieval_config::{ExtractionStrategy, RetrievalConfig};
pub use tuning::EngineTuning;
