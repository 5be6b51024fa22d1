//! Matching thresholds and weights.

use serde::Deserialize;

/// Tunable constants of the knowledge-base matcher.
///
/// The defaults are the production values; tests and experiments can
/// override them through the config file or environment.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MatchThresholds {
    /// Stage 1: a question or phrasing scoring above this is a near-duplicate.
    pub near_duplicate: f64,
    /// Stage 3: the best fuzzy score must exceed this.
    pub fuzzy: f64,
    /// Stage 2 decision threshold for short queries.
    pub short_query_threshold: f64,
    /// Stage 2 decision threshold for longer queries.
    pub long_query_threshold: f64,
    /// Queries with at most this many whitespace tokens are short.
    pub short_query_max_tokens: usize,
    /// Flat bonus per category boost keyword found in the query.
    pub category_boost: f64,
    /// Exponent applied to keyword length.
    pub keyword_exponent: f64,
    /// Multiplier applied to `len^exponent`.
    pub keyword_weight: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            near_duplicate: 0.8,
            fuzzy: 0.5,
            short_query_threshold: 2.0,
            long_query_threshold: 3.0,
            short_query_max_tokens: 3,
            category_boost: 2.0,
            keyword_exponent: 1.5,
            keyword_weight: 0.1,
        }
    }
}

impl MatchThresholds {
    /// Returns the Stage 2 decision threshold for a query with `tokens` words.
    #[must_use]
    pub const fn keyword_threshold(&self, tokens: usize) -> f64 {
        if tokens <= self.short_query_max_tokens {
            self.short_query_threshold
        } else {
            self.long_query_threshold
        }
    }

    /// Returns the Stage 2 contribution of a keyword with `chars` characters.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn keyword_score(&self, chars: usize) -> f64 {
        (chars as f64).powf(self.keyword_exponent) * self.keyword_weight
    }

    /// Builder method to set the near-duplicate threshold.
    #[must_use]
    pub const fn with_near_duplicate(mut self, threshold: f64) -> Self {
        self.near_duplicate = threshold;
        self
    }

    /// Builder method to set the fuzzy threshold.
    #[must_use]
    pub const fn with_fuzzy(mut self, threshold: f64) -> Self {
        self.fuzzy = threshold;
        self
    }
}
