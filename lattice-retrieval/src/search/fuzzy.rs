//! Trigram similarity for fuzzy node-name matching.
//!
//! Jaccard overlap of character trigrams, case-folded. Strings shorter than
//! three characters fall back to whole-string comparison.

use std::collections::HashSet;

/// Similarity in [0, 1] between two strings by trigram Jaccard overlap.
pub fn trigram_similarity(a: &str, b: &str) -> f64 {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();

    if a_lower == b_lower {
        return 1.0;
    }

    let a_grams = trigrams(&a_lower);
    let b_grams = trigrams(&b_lower);

    if a_grams.is_empty() || b_grams.is_empty() {
        // Too short for trigrams; containment is the only signal left.
        return if a_lower.contains(&b_lower) || b_lower.contains(&a_lower) {
            0.5
        } else {
            0.0
        };
    }

    let intersection = a_grams.intersection(&b_grams).count();
    let union = a_grams.union(&b_grams).count();
    intersection as f64 / union as f64
}

fn trigrams(s: &str) -> HashSet<String> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < 3 {
        return HashSet::new();
    }
    chars.windows(3).map(|w| w.iter().collect()).collect()
}
