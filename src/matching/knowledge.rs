//! Three-stage knowledge-base matcher.
//!
//! # Stages
//!
//! | Stage | Test | Accepts when |
//! |-------|------|--------------|
//! | 1. Near-duplicate | similarity to question, then to each phrasing | score > 0.8 (first hit) |
//! | 2. Keywords | `len(kw)^1.5 * 0.1` per keyword + 2 per category boost word | best ≥ 2 (≤ 3 tokens) or ≥ 3 |
//! | 3. Fuzzy | similarity to question | best > 0.5 |
//!
//! Stages run in order and the first success ends the search.

use crate::config::MatchThresholds;
use crate::models::{KnowledgeBase, QuestionRecord};
use crate::text::{Language, normalize_urdu, similarity};
use serde::Serialize;
use std::time::Instant;
use tracing::instrument;

use super::patterns::boost_keywords;

/// Which stage produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
    /// Near-duplicate of a question or alternative phrasing.
    NearDuplicate,
    /// Weighted keyword and category scoring.
    Keyword,
    /// Best fuzzy similarity.
    Fuzzy,
}

impl MatchStage {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NearDuplicate => "near_duplicate",
            Self::Keyword => "keyword",
            Self::Fuzzy => "fuzzy",
        }
    }
}

/// A record matched by one of the stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnowledgeMatch<'a> {
    /// The matched record.
    pub record: &'a QuestionRecord,
    /// Stage that accepted it.
    pub stage: MatchStage,
    /// Similarity (stages 1 and 3) or keyword score (stage 2).
    pub score: f64,
}

/// Matches queries against the records of a knowledge base.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnowledgeMatcher {
    thresholds: MatchThresholds,
}

impl KnowledgeMatcher {
    /// Creates a matcher with the given thresholds.
    #[must_use]
    pub const fn new(thresholds: MatchThresholds) -> Self {
        Self { thresholds }
    }

    /// Returns the thresholds in use.
    #[must_use]
    pub const fn thresholds(&self) -> &MatchThresholds {
        &self.thresholds
    }

    /// Finds the record answering `query`, if any.
    #[instrument(skip(self, kb, query), fields(query_length = query.len(), records = kb.len()))]
    #[allow(clippy::cast_precision_loss)]
    pub fn find<'a>(&self, query: &str, kb: &'a KnowledgeBase) -> Option<KnowledgeMatch<'a>> {
        let start = Instant::now();
        let processed = normalize_urdu(query);
        let language = Language::detect(&processed);

        let found = self
            .near_duplicate(&processed, language, kb)
            .or_else(|| self.keyword(query, &processed, kb))
            .or_else(|| self.fuzzy(&processed, language, kb));

        let duration_ms = start.elapsed().as_millis();
        metrics::histogram!("qa_match_duration_ms").record(duration_ms as f64);

        match &found {
            Some(hit) => {
                metrics::counter!("qa_match_stage_total", "stage" => hit.stage.as_str())
                    .increment(1);
                tracing::debug!(
                    record_id = %hit.record.id,
                    stage = hit.stage.as_str(),
                    score = hit.score,
                    duration_ms = %duration_ms,
                    "Knowledge base match"
                );
            },
            None => {
                metrics::counter!("qa_match_stage_total", "stage" => "miss").increment(1);
                tracing::debug!(duration_ms = %duration_ms, "No knowledge base match");
            },
        }

        found
    }

    /// Stage 1: first question or phrasing scoring above the near-duplicate threshold.
    fn near_duplicate<'a>(
        &self,
        processed: &str,
        language: Language,
        kb: &'a KnowledgeBase,
    ) -> Option<KnowledgeMatch<'a>> {
        let threshold = self.thresholds.near_duplicate;

        for record in kb.questions() {
            let candidates =
                std::iter::once(&record.question).chain(record.alternative_phrasings.iter());
            for candidate in candidates {
                let score = similarity(processed, candidate, language);
                if score > threshold {
                    return Some(KnowledgeMatch {
                        record,
                        stage: MatchStage::NearDuplicate,
                        score,
                    });
                }
            }
        }

        None
    }

    /// Stage 2: highest weighted keyword score, if it reaches the decision threshold.
    fn keyword<'a>(
        &self,
        raw: &str,
        processed: &str,
        kb: &'a KnowledgeBase,
    ) -> Option<KnowledgeMatch<'a>> {
        let lowered = processed.to_lowercase();
        let threshold = self
            .thresholds
            .keyword_threshold(raw.split_whitespace().count());

        let mut best: Option<(&QuestionRecord, f64)> = None;
        for record in kb.questions() {
            let score = self.keyword_score(record, &lowered);
            let best_score = best.map_or(0.0, |(_, s)| s);
            if score > best_score {
                best = Some((record, score));
            }
        }

        let (record, score) = best?;
        tracing::trace!(record_id = %record.id, score, threshold, "Best keyword score");
        (score >= threshold).then_some(KnowledgeMatch {
            record,
            stage: MatchStage::Keyword,
            score,
        })
    }

    /// Keyword score of one record against the lowercased, normalized query.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn keyword_score(&self, record: &QuestionRecord, lowered_query: &str) -> f64 {
        let mut score: f64 = record
            .keywords
            .iter()
            .filter(|keyword| lowered_query.contains(keyword.to_lowercase().as_str()))
            .map(|keyword| self.thresholds.keyword_score(keyword.chars().count()))
            .sum();

        if let Some(category) = record.category() {
            let boosts = boost_keywords(category)
                .iter()
                .filter(|keyword| lowered_query.contains(**keyword))
                .count();
            score += self.thresholds.category_boost * boosts as f64;
        }

        score
    }

    /// Stage 3: best similarity to any question, if above the fuzzy threshold.
    fn fuzzy<'a>(
        &self,
        processed: &str,
        language: Language,
        kb: &'a KnowledgeBase,
    ) -> Option<KnowledgeMatch<'a>> {
        let mut best: Option<(&QuestionRecord, f64)> = None;
        for record in kb.questions() {
            let score = similarity(processed, &record.question, language);
            let best_score = best.map_or(0.0, |(_, s)| s);
            if score > best_score {
                best = Some((record, score));
            }
        }

        let (record, score) = best?;
        (score > self.thresholds.fuzzy).then_some(KnowledgeMatch {
            record,
            stage: MatchStage::Fuzzy,
            score,
        })
    }
}
