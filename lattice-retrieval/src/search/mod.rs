//! Evidence gathering from the two heterogeneous sources: the vector
//! similarity index and the entity property graph.

pub mod fuzzy;
pub mod graph;
pub mod vector;

pub use graph::{GraphContext, GraphRetriever};
pub use vector::{VectorOutcome, VectorRetriever};
