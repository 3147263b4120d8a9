//! Search utilities shared across crates.
//!
//! A query matches a hunt when it is a case-insensitive substring of the
//! hypothesis, the full content, the notes, or any single tag.

use crate::models::Hunt;

/// Lowercase a query once so it can be matched against many hunts
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase()
}

/// Check if text contains an already-lowercased term (case-insensitive)
pub fn text_contains_term(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    text.to_lowercase().contains(term)
}

/// Check whether a hunt matches an already-lowercased term
pub fn hunt_matches(hunt: &Hunt, term: &str) -> bool {
    text_contains_term(&hunt.content, term)
        || text_contains_term(&hunt.hypothesis, term)
        || hunt.tags.iter().any(|tag| text_contains_term(tag, term))
        || hunt
            .notes
            .as_deref()
            .is_some_and(|notes| text_contains_term(notes, term))
}

/// Keep the hunts that match `query`, preserving order
pub fn filter_hunts(hunts: Vec<Hunt>, query: &str) -> Vec<Hunt> {
    let term = normalize_query(query);
    hunts
        .into_iter()
        .filter(|hunt| hunt_matches(hunt, &term))
        .collect()
}
