//! High-priority specific answers.
//!
//! A handful of factual questions (mention counts of named prophets) need an
//! exact canned answer. They are looked up before intent classification and
//! before the knowledge base, so near-duplicate records cannot outrank them.

use super::patterns::{SPECIFIC_ANSWERS, SpecificAnswer};
use crate::text::normalize_urdu;

/// Returns the first specific answer whose pattern occurs in the query.
///
/// The query is punctuation-stripped and lowercased before the substring
/// test. Entries are tried in table order; the first hit wins.
#[must_use]
pub fn find_specific_answer(query: &str) -> Option<&'static SpecificAnswer> {
    let prepared = normalize_urdu(query).to_lowercase();
    if prepared.is_empty() {
        return None;
    }

    let hit = SPECIFIC_ANSWERS
        .iter()
        .find(|entry| entry.patterns.iter().any(|p| prepared.contains(p)));

    if let Some(entry) = hit {
        tracing::debug!(key = entry.key, "Specific answer matched");
    }
    hit
}
