//! Offline knowledge-base enrichment.
//!
//! Rewrites the response pools with curated lists and adds keywords and
//! related-question links to records. Run from the CLI (`quranqa enrich`),
//! never while serving requests.

#![allow(clippy::expect_used)]

use crate::matching::patterns::enrichment_keywords;
use crate::models::KnowledgeData;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Words of a question (Unicode word characters).
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("static regex: question words"));

/// Question words must be longer than this many characters to become keywords.
const MIN_KEYWORD_CHARS: usize = 3;
/// Links added to a record without related questions.
const MAX_LINKS: usize = 3;

const GREETINGS: &[&str] = &[
    "وعلیکم السلام! آپ کیسے ہیں؟",
    "السلام علیکم! میں آپ کی کیا مدد کر سکتا ہوں؟",
    "ہیلو! قرآن کے بارے میں کیا جاننا چاہتے ہیں؟",
    "جی ہاں، میں حاضر ہوں۔ کیا پوچھنا چاہتے ہیں؟",
    "آداب! آج میں آپ کی کیا خدمت کر سکتا ہوں؟",
];

const THANK_YOU_RESPONSES: &[&str] = &[
    "آپ کا شکریہ!",
    "خوش آمدید!",
    "میری خدمت کا موقع دینے کا شکریہ۔",
    "آپ کا مسئلہ حل ہوگیا تو مجھے خوشی ہوئی۔",
    "قرآن کے بارے میں مزید معلومات کے لیے دوبارہ پوچھیں۔",
];

const FAREWELL_RESPONSES: &[&str] = &[
    "اللہ حافظ!",
    "خدا حافظ! دوبارہ تشریف لائیں۔",
    "الوداع! اللہ آپ کو اپنی امان میں رکھے۔",
    "فی امان اللہ!",
    "پھر ملیں گے، انشاء اللہ!",
];

const NOT_FOUND_RESPONSES: &[&str] = &[
    "معاف کیجیے، میں اس سوال کا جواب نہیں جانتا۔",
    "اس سوال کا جواب میرے پاس نہیں ہے۔ کوئی اور سوال پوچھیں۔",
    "مجھے افسوس ہے، میں آپ کے سوال کا جواب دینے سے قاصر ہوں۔",
    "میں اس سوال کا مکمل جواب نہیں دے سکتا۔ قرآن کے بارے میں کوئی اور سوال پوچھیں۔",
    "یہ سوال میرے علم سے باہر ہے۔ براہ کرم دوسرا سوال پوچھیں۔",
];

const FACTS: &[&str] = &[
    "قرآن میں 114 سورتیں ہیں۔",
    "قرآن کو مکمل نازل ہونے میں 23 سال لگے۔",
    "قرآن میں سب سے چھوٹی سورت الکوثر ہے۔",
    "قرآن میں سب سے طویل آیت آیت الدین (سورۃ البقرہ، آیت 282) ہے۔",
    "قرآن میں سب سے زیادہ ذکر حضرت موسیٰ علیہ السلام کا آیا ہے۔",
    "قرآن میں 30 پارے ہیں۔",
    "قرآن کی سب سے زیادہ فضیلت والی آیت آیت الکرسی ہے۔",
    "قرآن میں تقریباً 6,236 آیات ہیں۔",
    "قرآن میں 86 مکی اور 28 مدنی سورتیں ہیں۔",
    "قرآن میں تقریباً 77,430 الفاظ ہیں۔",
];

/// What an enrichment pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnrichmentReport {
    /// Records processed.
    pub questions: usize,
    /// Keywords added across all records.
    pub keywords_added: usize,
    /// Records that received related-question links.
    pub related_filled: usize,
}

/// Enriches knowledge-base data in place.
///
/// Steps, in order:
/// 1. Replace the greeting, thank-you, farewell, not-found and fact pools.
/// 2. Add question words longer than three characters as keywords.
/// 3. Link records without related questions to up to three others sharing
///    their category tag.
/// 4. Append the category's enrichment keywords.
///
/// Keywords are never duplicated, so running the pass twice adds nothing new.
pub fn enrich(data: &mut KnowledgeData) -> EnrichmentReport {
    replace_pools(data);

    let mut report = EnrichmentReport {
        questions: data.questions.len(),
        ..EnrichmentReport::default()
    };

    for record in &mut data.questions {
        let words: Vec<String> = WORD
            .find_iter(&record.question)
            .map(|m| m.as_str().to_string())
            .filter(|w| w.chars().count() > MIN_KEYWORD_CHARS)
            .collect();
        report.keywords_added += push_unique(&mut record.keywords, words);
    }

    let mut by_category: HashMap<String, Vec<String>> = HashMap::new();
    for record in &data.questions {
        if let Some(tag) = &record.category_tag {
            by_category
                .entry(tag.clone())
                .or_default()
                .push(record.id.clone());
        }
    }

    for record in &mut data.questions {
        if !record.related_ids().is_empty() {
            continue;
        }
        let links: Vec<String> = record
            .category_tag
            .as_ref()
            .and_then(|tag| by_category.get(tag))
            .map(|ids| {
                ids.iter()
                    .filter(|id| **id != record.id)
                    .take(MAX_LINKS)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        if !links.is_empty() {
            report.related_filled += 1;
        }
        record.related_questions = Some(links);
    }

    for record in &mut data.questions {
        if let Some(category) = record.category() {
            let extra = enrichment_keywords(category).iter().map(ToString::to_string);
            report.keywords_added += push_unique(&mut record.keywords, extra);
        }
    }

    tracing::info!(
        questions = report.questions,
        keywords_added = report.keywords_added,
        related_filled = report.related_filled,
        "Enriched knowledge base"
    );
    report
}

fn replace_pools(data: &mut KnowledgeData) {
    let owned = |pool: &[&str]| pool.iter().map(ToString::to_string).collect::<Vec<_>>();
    data.greetings = owned(GREETINGS);
    data.thank_you_responses = owned(THANK_YOU_RESPONSES);
    data.farewell_responses = owned(FAREWELL_RESPONSES);
    data.not_found_responses = owned(NOT_FOUND_RESPONSES);
    data.facts = owned(FACTS);
}

/// Appends values not already present; returns how many were added.
fn push_unique(target: &mut Vec<String>, values: impl IntoIterator<Item = String>) -> usize {
    let mut added = 0;
    for value in values {
        if !target.contains(&value) {
            target.push(value);
            added += 1;
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, QuestionRecord};

    fn data() -> KnowledgeData {
        KnowledgeData {
            questions: vec![
                QuestionRecord::new("a", "قرآن میں کتنی سورتیں ہیں", "114")
                    .with_category(Category::Structure)
                    .with_keywords(["سورتیں"]),
                QuestionRecord::new("b", "قرآن کتنے پاروں پر مشتمل ہے", "30")
                    .with_category(Category::Structure),
                QuestionRecord::new("c", "پہلی وحی", "غار حرا")
                    .with_category(Category::Revelation)
                    .with_related(["a"]),
                QuestionRecord::new("d", "بے زمرہ", "جواب"),
            ],
            greetings: vec!["پرانا".to_string()],
            ..KnowledgeData::default()
        }
    }

    #[test]
    fn test_pools_replaced() {
        let mut data = data();
        enrich(&mut data);
        assert_eq!(data.greetings.len(), GREETINGS.len());
        assert!(!data.greetings.contains(&"پرانا".to_string()));
        assert_eq!(data.facts.len(), 10);
        assert_eq!(data.not_found_responses.len(), 5);
    }

    #[test]
    fn test_question_words_and_category_keywords() {
        let mut data = data();
        enrich(&mut data);
        let a = &data.questions[0];
        // "قرآن", "کتنی", "سورتیں" qualify; "میں", "ہیں" are too short
        assert!(a.keywords.contains(&"قرآن".to_string()));
        assert!(a.keywords.contains(&"کتنی".to_string()));
        assert!(!a.keywords.contains(&"میں".to_string()));
        assert_eq!(a.keywords.iter().filter(|k| *k == "سورتیں").count(), 1);
        assert!(a.keywords.contains(&"ترتیب".to_string()));
    }

    #[test]
    fn test_related_links() {
        let mut data = data();
        let report = enrich(&mut data);
        assert_eq!(data.questions[0].related_ids(), ["b"]);
        assert_eq!(data.questions[1].related_ids(), ["a"]);
        // existing links are kept
        assert_eq!(data.questions[2].related_ids(), ["a"]);
        // no category: an empty list is written
        assert_eq!(data.questions[3].related_questions, Some(Vec::new()));
        assert_eq!(report.related_filled, 2);
    }

    #[test]
    fn test_second_pass_adds_no_keywords() {
        let mut data = data();
        enrich(&mut data);
        let report = enrich(&mut data);
        assert_eq!(report.keywords_added, 0);
    }
}
