//! Responder output types.

use super::{Intent, QuestionRecord};
use serde::{Deserialize, Serialize};

/// How the answer was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Specific pattern, knowledge-base match or conversational template.
    High,
    /// Secondary corpus match.
    Medium,
    /// Fallback response.
    None,
}

impl Confidence {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::None => "none",
        }
    }
}

/// Which component produced the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Hard-coded specific-pattern table.
    SpecificAnswers,
    /// Knowledge-base record.
    QaDatabase,
    /// Secondary verse corpus.
    SearchModel,
    /// Nothing matched.
    None,
}

impl Source {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SpecificAnswers => "specific_answers",
            Self::QaDatabase => "qa_database",
            Self::SearchModel => "search_model",
            Self::None => "none",
        }
    }
}

/// Per-request outcome of the question-matching branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// The matched record, when the knowledge base answered.
    pub matched_record: Option<&'a QuestionRecord>,
    /// Confidence of the outcome.
    pub confidence: Confidence,
    /// Component that produced the outcome.
    pub source: Source,
}

impl<'a> MatchResult<'a> {
    /// A knowledge-base hit.
    #[must_use]
    pub const fn record(record: &'a QuestionRecord) -> Self {
        Self {
            matched_record: Some(record),
            confidence: Confidence::High,
            source: Source::QaDatabase,
        }
    }

    /// A specific-pattern hit.
    #[must_use]
    pub const fn specific() -> Self {
        Self {
            matched_record: None,
            confidence: Confidence::High,
            source: Source::SpecificAnswers,
        }
    }

    /// A secondary corpus hit.
    #[must_use]
    pub const fn corpus() -> Self {
        Self {
            matched_record: None,
            confidence: Confidence::Medium,
            source: Source::SearchModel,
        }
    }

    /// No match at all.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            matched_record: None,
            confidence: Confidence::None,
            source: Source::None,
        }
    }
}

/// Structured answer handed to the route layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Answer text.
    pub answer: String,
    /// Confidence level.
    pub confidence: Confidence,
    /// Intent tag.
    pub intent: Intent,
    /// Suggested follow-up questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    /// An extra fact shown with not-found answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fact: Option<String>,
    /// Set when the user said goodbye.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farewell: Option<bool>,
    /// Provenance tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

impl Response {
    /// Creates a response with only the mandatory fields.
    #[must_use]
    pub fn new(answer: impl Into<String>, confidence: Confidence, intent: Intent) -> Self {
        Self {
            answer: answer.into(),
            confidence,
            intent,
            suggestions: None,
            fact: None,
            farewell: None,
            source: None,
        }
    }

    /// Sets the suggestions.
    #[must_use]
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = Some(suggestions);
        self
    }

    /// Sets the extra fact.
    #[must_use]
    pub fn with_fact(mut self, fact: impl Into<String>) -> Self {
        self.fact = Some(fact.into());
        self
    }

    /// Marks the response as a farewell.
    #[must_use]
    pub const fn with_farewell(mut self) -> Self {
        self.farewell = Some(true);
        self
    }

    /// Sets the provenance tag.
    #[must_use]
    pub const fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Returns the suggestions, or an empty slice.
    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        self.suggestions.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_are_omitted() {
        let response = Response::new("جواب", Confidence::High, Intent::Greeting);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["confidence"], "high");
        assert_eq!(json["intent"], "greeting");
        assert!(json.get("fact").is_none());
        assert!(json.get("farewell").is_none());
        assert!(json.get("source").is_none());
    }

    #[test]
    fn test_source_serialization() {
        let response = Response::new("a", Confidence::Medium, Intent::Question)
            .with_source(Source::SearchModel);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["source"], "search_model");
        assert_eq!(json["confidence"], "medium");
    }
}
