//! Entity extraction: pattern- and heuristic-based recognition of named
//! entities in the question text.
//!
//! Pure — no I/O. All tables are immutable configuration injected at
//! construction time.

pub mod tables;

use std::collections::HashSet;

use tracing::debug;

use lattice_core::config::ExtractionStrategy;
use lattice_core::models::{EntityType, ExtractedEntity};

use tables::ExtractionTables;

/// Confidence for generic-pass hits from the technical vocabulary.
const KEYWORD_CONFIDENCE: f64 = 0.7;
/// Confidence for generic-pass hits accepted on shape alone.
const SHAPE_CONFIDENCE: f64 = 0.5;

/// Pulls candidate named entities out of query text.
pub struct EntityExtractor {
    tables: ExtractionTables,
}

impl EntityExtractor {
    pub fn new(tables: ExtractionTables) -> Self {
        Self { tables }
    }

    /// Extract entities using the requested strategy.
    ///
    /// `Ner` and `Llm` degrade to `Keyword` when no specialized backend is
    /// configured — a documented fallback, logged once per call.
    pub fn extract(&self, text: &str, strategy: ExtractionStrategy) -> HashSet<ExtractedEntity> {
        match strategy {
            ExtractionStrategy::Keyword => {}
            other => {
                debug!(?other, "no backend configured, degrading to keyword extraction");
            }
        }
        self.extract_keyword(text)
    }

    /// Two-pass keyword extraction: label-specific patterns, then a generic
    /// token pass. Output is deduplicated by `(text, type)`.
    fn extract_keyword(&self, text: &str) -> HashSet<ExtractedEntity> {
        let mut entities: HashSet<ExtractedEntity> = HashSet::new();

        // Pass 1: label-specific patterns.
        for pattern in self.tables.patterns() {
            for m in pattern.regex.find_iter(text) {
                entities.insert(ExtractedEntity::new(
                    m.as_str(),
                    pattern.entity_type,
                    m.start(),
                    m.end(),
                    pattern.confidence,
                ));
            }
        }

        // Pass 2: generic token pass.
        for (offset, token) in self.tables.tokenize(text) {
            let len = token.chars().count();
            if len < 2 || len > 20 || self.tables.is_stop_word(token) {
                continue;
            }

            let (entity_type, confidence) = if self.tables.is_technical_keyword(token) {
                (EntityType::Technology, KEYWORD_CONFIDENCE)
            } else if self.tables.is_cjk_run(token) {
                (EntityType::Concept, SHAPE_CONFIDENCE)
            } else if self.tables.is_capitalized_run(token) {
                (EntityType::Unknown, SHAPE_CONFIDENCE)
            } else {
                continue;
            };

            entities.insert(ExtractedEntity::new(
                token,
                entity_type,
                offset,
                offset + token.len(),
                confidence,
            ));
        }

        debug!(count = entities.len(), "extracted entities");
        entities
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new(ExtractionTables::new())
    }
}
