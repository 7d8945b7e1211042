pub mod document;
pub mod entity;
pub mod graph;
pub mod response;
pub mod result;

pub use document::{DocumentUnit, RetrievedUnit, VectorMatch};
pub use entity::{EntityType, ExtractedEntity};
pub use graph::{Direction, GraphNode, GraphRelationship};
pub use response::{RetrievalResponse, StageTimings};
pub use result::{EnhancedResult, SourceType};
