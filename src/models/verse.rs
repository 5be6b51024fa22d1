//! Verse corpus types.

use serde::{Deserialize, Serialize};

/// One translated verse of the secondary corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    /// Surah number (1-114).
    pub surah: u16,
    /// Ayah number (1-based).
    pub ayah: u16,
    /// Translation text.
    pub verse: String,
    /// Display reference, e.g. `البقرة ، آیت 255`.
    pub reference: String,
}

/// How a verse matched a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    /// The whole verse equals the query.
    ExactMatch,
    /// The verse contains the query.
    ContainsMatch,
    /// Some query words occur in the verse.
    WordMatch,
    /// Sequence similarity above the fuzzy floor.
    FuzzyMatch,
}

impl MatchMethod {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExactMatch => "exact_match",
            Self::ContainsMatch => "contains_match",
            Self::WordMatch => "word_match",
            Self::FuzzyMatch => "fuzzy_match",
        }
    }
}

/// A verse with its relevance score and provenance tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseMatch {
    /// The matched verse.
    #[serde(flatten)]
    pub record: VerseRecord,
    /// Relevance in `[0, 1]`.
    pub score: f64,
    /// Methods that contributed to the score.
    pub methods: Vec<MatchMethod>,
}

/// Outcome of a corpus search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerseSearchResult {
    /// Highest-scoring verse.
    pub primary_match: Option<VerseMatch>,
    /// Remaining hits, best first.
    pub other_matches: Vec<VerseMatch>,
    /// Number of verses with a positive score.
    pub total_matches: usize,
}

impl VerseSearchResult {
    /// Builds a result from hits already sorted best first.
    #[must_use]
    pub fn from_ranked(mut hits: Vec<VerseMatch>) -> Self {
        let total_matches = hits.len();
        if hits.is_empty() {
            return Self::default();
        }
        let primary = hits.remove(0);
        Self {
            primary_match: Some(primary),
            other_matches: hits,
            total_matches,
        }
    }
}
