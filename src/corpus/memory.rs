//! In-memory verse scoring.

use super::VerseSearcher;
use crate::Result;
use crate::models::{MatchMethod, VerseMatch, VerseRecord, VerseSearchResult};
use crate::text::{normalize_urdu, sequence_ratio};

/// Score for a verse equal to the query.
const EXACT_SCORE: f64 = 1.0;
/// Score for a verse containing the query.
const CONTAINS_SCORE: f64 = 0.9;
/// Weight of the word-hit ratio.
const WORD_WEIGHT: f64 = 0.8;
/// Sequence ratio a verse must exceed to count as a fuzzy hit.
const FUZZY_FLOOR: f64 = 0.5;
/// Weight of the sequence ratio for fuzzy hits.
const FUZZY_WEIGHT: f64 = 0.7;

/// A verse corpus held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    verses: Vec<VerseRecord>,
}

impl InMemoryCorpus {
    /// Creates a corpus from verse records.
    #[must_use]
    pub const fn new(verses: Vec<VerseRecord>) -> Self {
        Self { verses }
    }

    /// Returns the number of verses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.verses.len()
    }

    /// Returns true if the corpus has no verses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Scores every verse and returns the hits, best first.
    #[must_use]
    pub fn rank(&self, query: &str) -> VerseSearchResult {
        let query = normalize_urdu(query);
        if query.is_empty() {
            return VerseSearchResult::default();
        }

        let mut hits: Vec<VerseMatch> = self
            .verses
            .iter()
            .filter_map(|verse| score_verse(&query, verse))
            .collect();
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));

        tracing::debug!(hits = hits.len(), verses = self.verses.len(), "Corpus ranked");
        VerseSearchResult::from_ranked(hits)
    }
}

/// Scores one verse against a normalized, non-empty query.
#[allow(clippy::cast_precision_loss)]
fn score_verse(query: &str, verse: &VerseRecord) -> Option<VerseMatch> {
    let lowered_query = query.to_lowercase();
    let lowered_verse = verse.verse.to_lowercase();

    let mut score = 0.0_f64;
    let mut methods = Vec::new();

    if lowered_query == lowered_verse {
        score = EXACT_SCORE;
        methods.push(MatchMethod::ExactMatch);
    } else if lowered_verse.contains(&lowered_query) {
        score = CONTAINS_SCORE;
        methods.push(MatchMethod::ContainsMatch);
    } else {
        let normalized_verse = normalize_urdu(&verse.verse);
        let words: Vec<&str> = query.split_whitespace().collect();
        let hits = words
            .iter()
            .filter(|word| normalized_verse.contains(**word))
            .count();
        if hits > 0 {
            score = score.max(hits as f64 / words.len() as f64 * WORD_WEIGHT);
            methods.push(MatchMethod::WordMatch);
        }

        let ratio = sequence_ratio(query, &normalized_verse);
        if ratio > FUZZY_FLOOR {
            score = score.max(ratio * FUZZY_WEIGHT);
            methods.push(MatchMethod::FuzzyMatch);
        }
    }

    (score > 0.0).then(|| VerseMatch {
        record: verse.clone(),
        score,
        methods,
    })
}

impl VerseSearcher for InMemoryCorpus {
    fn is_available(&self) -> bool {
        true
    }

    fn search(&self, query: &str) -> Result<VerseSearchResult> {
        Ok(self.rank(query))
    }
}
