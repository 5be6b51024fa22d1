//! Blended query/reference similarity.

use super::{Language, normalize, sequence_ratio, tokenize};
use std::collections::HashSet;

/// Weight of the character-sequence ratio in the blended score.
const SEQUENCE_WEIGHT: f64 = 0.6;
/// Weight of the word-overlap ratio in the blended score.
const OVERLAP_WEIGHT: f64 = 0.4;

/// Scores how close `query` is to `reference`, in `[0, 1]`.
///
/// Both strings are normalized, then
/// `0.6 * sequence_ratio + 0.4 * word_overlap`, where word overlap is the
/// number of query tokens found among the reference tokens divided by the
/// number of distinct tokens in either string (capped at 1).
#[must_use]
pub fn similarity(query: &str, reference: &str, language: Language) -> f64 {
    let query = normalize(query, language);
    let reference = normalize(reference, language);

    let sequence = sequence_ratio(&query, &reference);
    let overlap = word_overlap(
        &tokenize(&query, language),
        &tokenize(&reference, language),
    );

    SEQUENCE_WEIGHT.mul_add(sequence, OVERLAP_WEIGHT * overlap)
}

/// Urdu-mode similarity.
#[must_use]
pub fn similarity_urdu(query: &str, reference: &str) -> f64 {
    similarity(query, reference, Language::Urdu)
}

#[allow(clippy::cast_precision_loss)]
fn word_overlap(query_tokens: &[String], reference_tokens: &[String]) -> f64 {
    let reference: HashSet<&str> = reference_tokens.iter().map(String::as_str).collect();
    let union: HashSet<&str> = query_tokens
        .iter()
        .map(String::as_str)
        .chain(reference.iter().copied())
        .collect();
    if union.is_empty() {
        return 0.0;
    }

    let matching = query_tokens
        .iter()
        .filter(|token| reference.contains(token.as_str()))
        .count();

    // Repeated query tokens can push the raw ratio past 1.
    (matching as f64 / union.len() as f64).min(1.0)
}
