use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Category assigned to an extracted entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Person,
    Organization,
    Technology,
    Concept,
    Unknown,
}

/// A candidate named entity pulled out of the query text.
///
/// Identity is `(text, entity_type)` only: the same surface form found at
/// two different offsets is one entity, so a query yields a set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedEntity {
    pub text: String,
    pub entity_type: EntityType,
    /// Byte offset of the first occurrence in the query text.
    pub start_offset: usize,
    pub end_offset: usize,
    /// Extraction confidence in [0, 1].
    pub confidence: f64,
}

impl PartialEq for ExtractedEntity {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.entity_type == other.entity_type
    }
}

impl Eq for ExtractedEntity {}

impl Hash for ExtractedEntity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        self.entity_type.hash(state);
    }
}

impl ExtractedEntity {
    pub fn new(
        text: impl Into<String>,
        entity_type: EntityType,
        start_offset: usize,
        end_offset: usize,
        confidence: f64,
    ) -> Self {
        Self {
            text: text.into(),
            entity_type,
            start_offset,
            end_offset,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}
