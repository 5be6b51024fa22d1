//! Knowledge-base records and snapshots.

use super::Category;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Fallback greeting when the pool is empty.
pub const DEFAULT_GREETING: &str = "وعلیکم السلام!";
/// Fallback thank-you response.
pub const DEFAULT_THANK_YOU: &str = "آپ کا شکریہ!";
/// Fallback farewell response.
pub const DEFAULT_FAREWELL: &str = "اللہ حافظ!";
/// Fallback not-found response.
pub const DEFAULT_NOT_FOUND: &str = "معاف کیجیے، میں اس سوال کا جواب نہیں جانتا۔";
/// Fallback fact.
pub const DEFAULT_FACT: &str = "قرآن میں 114 سورتیں ہیں۔";

/// A single question-answer entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Stable unique identifier.
    pub id: String,
    /// Canonical question text (Urdu).
    pub question: String,
    /// Answer text.
    pub answer: String,
    /// Paraphrases of the canonical question.
    #[serde(default)]
    pub alternative_phrasings: Vec<String>,
    /// Keywords scored against queries.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Raw category tag; see [`QuestionRecord::category`].
    #[serde(default, rename = "category", skip_serializing_if = "Option::is_none")]
    pub category_tag: Option<String>,
    /// Explicitly linked record ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_questions: Option<Vec<String>>,
}

impl QuestionRecord {
    /// Creates a record with no phrasings, keywords, category or links.
    #[must_use]
    pub fn new(id: impl Into<String>, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            alternative_phrasings: Vec::new(),
            keywords: Vec::new(),
            category_tag: None,
            related_questions: None,
        }
    }

    /// Sets the category tag.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category_tag = Some(category.as_str().to_string());
        self
    }

    /// Sets the keywords.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the alternative phrasings.
    #[must_use]
    pub fn with_phrasings<I, S>(mut self, phrasings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternative_phrasings = phrasings.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the related question ids.
    #[must_use]
    pub fn with_related<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_questions = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the recognized category, if any.
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.category_tag.as_deref().and_then(Category::parse)
    }

    /// Returns the explicit related ids (empty when absent).
    #[must_use]
    pub fn related_ids(&self) -> &[String] {
        self.related_questions.as_deref().unwrap_or_default()
    }
}

/// On-disk shape of the knowledge-base file.
///
/// Unknown top-level keys are kept in `extra` so that offline enrichment can
/// write the file back without dropping anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeData {
    /// Question records, in file order.
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
    /// Interesting facts shown alongside not-found answers.
    #[serde(default)]
    pub facts: Vec<String>,
    /// Greeting responses.
    #[serde(default)]
    pub greetings: Vec<String>,
    /// Thank-you responses.
    #[serde(default)]
    pub thank_you_responses: Vec<String>,
    /// Farewell responses.
    #[serde(default)]
    pub farewell_responses: Vec<String>,
    /// Not-found responses.
    #[serde(default)]
    pub not_found_responses: Vec<String>,
    /// Any other keys present in the file.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Response pools held by a knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    /// Greeting responses.
    Greetings,
    /// Thank-you responses.
    ThankYou,
    /// Farewell responses.
    Farewell,
    /// Not-found responses.
    NotFound,
    /// Facts.
    Facts,
}

impl Pool {
    /// Returns the single-element default used when the pool is empty.
    #[must_use]
    pub const fn default_entry(&self) -> &'static str {
        match self {
            Self::Greetings => DEFAULT_GREETING,
            Self::ThankYou => DEFAULT_THANK_YOU,
            Self::Farewell => DEFAULT_FAREWELL,
            Self::NotFound => DEFAULT_NOT_FOUND,
            Self::Facts => DEFAULT_FACT,
        }
    }
}

/// Immutable knowledge-base snapshot with its id index.
///
/// The index is built once when the snapshot is created. A reload builds a new
/// snapshot; nothing is ever mutated in place.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    data: KnowledgeData,
    index: HashMap<String, usize>,
}

impl KnowledgeBase {
    /// Builds a snapshot and its id index.
    ///
    /// If two records share an id, the first one wins lookups.
    #[must_use]
    pub fn new(data: KnowledgeData) -> Self {
        let mut index = HashMap::with_capacity(data.questions.len());
        for (position, record) in data.questions.iter().enumerate() {
            index.entry(record.id.clone()).or_insert(position);
        }
        Self { data, index }
    }

    /// Builds a snapshot holding only the given records.
    #[must_use]
    pub fn from_records(questions: Vec<QuestionRecord>) -> Self {
        Self::new(KnowledgeData {
            questions,
            ..KnowledgeData::default()
        })
    }

    /// Returns all records in file order.
    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.data.questions
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.questions.len()
    }

    /// Returns true if the snapshot has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.questions.is_empty()
    }

    /// Looks a record up by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&QuestionRecord> {
        self.index.get(id).and_then(|&i| self.data.questions.get(i))
    }

    /// Returns the records whose recognized category is `category`.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &QuestionRecord> {
        self.data
            .questions
            .iter()
            .filter(move |record| record.category() == Some(category))
    }

    /// Returns a response pool, substituting its default when empty.
    #[must_use]
    pub fn pool(&self, pool: Pool) -> Vec<&str> {
        let entries = match pool {
            Pool::Greetings => &self.data.greetings,
            Pool::ThankYou => &self.data.thank_you_responses,
            Pool::Farewell => &self.data.farewell_responses,
            Pool::NotFound => &self.data.not_found_responses,
            Pool::Facts => &self.data.facts,
        };
        if entries.is_empty() {
            vec![pool.default_entry()]
        } else {
            entries.iter().map(String::as_str).collect()
        }
    }

    /// Returns the underlying data.
    #[must_use]
    pub const fn data(&self) -> &KnowledgeData {
        &self.data
    }

    /// Consumes the snapshot, returning its data.
    #[must_use]
    pub fn into_data(self) -> KnowledgeData {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"id": "q1", "question": "سوال", "answer": "جواب"}"#;
        let record: QuestionRecord = serde_json::from_str(json).unwrap();
        assert!(record.alternative_phrasings.is_empty());
        assert!(record.keywords.is_empty());
        assert_eq!(record.category(), None);
        assert!(record.related_ids().is_empty());
    }

    #[test]
    fn test_unrecognized_category_is_absent() {
        let json = r#"{"id": "q1", "question": "a", "answer": "b", "category": "astronomy"}"#;
        let record: QuestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category_tag.as_deref(), Some("astronomy"));
        assert_eq!(record.category(), None);
    }

    #[test]
    fn test_index_lookup() {
        let kb = KnowledgeBase::from_records(vec![
            QuestionRecord::new("a", "q a", "ans a"),
            QuestionRecord::new("b", "q b", "ans b"),
        ]);
        assert_eq!(kb.get("b").map(|r| r.answer.as_str()), Some("ans b"));
        assert!(kb.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let kb = KnowledgeBase::from_records(vec![
            QuestionRecord::new("a", "first", "1"),
            QuestionRecord::new("a", "second", "2"),
        ]);
        assert_eq!(kb.get("a").map(|r| r.answer.as_str()), Some("1"));
    }

    #[test]
    fn test_empty_pools_fall_back_to_defaults() {
        let kb = KnowledgeBase::default();
        assert_eq!(kb.pool(Pool::Greetings), vec![DEFAULT_GREETING]);
        assert_eq!(kb.pool(Pool::NotFound), vec![DEFAULT_NOT_FOUND]);
        assert_eq!(kb.pool(Pool::Facts), vec![DEFAULT_FACT]);
    }

    #[test]
    fn test_unknown_keys_survive_roundtrip() {
        let json = r#"{"questions": [], "categories": {"x": 1}}"#;
        let data: KnowledgeData = serde_json::from_str(json).unwrap();
        assert!(data.extra.contains_key("categories"));
        let out = serde_json::to_string(&data).unwrap();
        assert!(out.contains("\"categories\""));
    }
}
