//! Related-question selection.

use super::patterns::{INFERENCE_ORDER, MAX_RELATED, POPULAR_QUESTION_IDS, inference_keywords};
use crate::models::{Category, KnowledgeBase, QuestionRecord};

/// Infers a category from free text.
///
/// Categories are tried in a fixed order; the first one with any keyword
/// occurring in the text wins.
#[must_use]
pub fn infer_category(text: &str) -> Option<Category> {
    let lowered = text.to_lowercase();
    INFERENCE_ORDER.iter().copied().find(|category| {
        inference_keywords(*category)
            .iter()
            .any(|keyword| lowered.contains(keyword))
    })
}

/// Picks up to `max` follow-up questions (never more than [`MAX_RELATED`]).
///
/// 1. Explicit links of the matched record, in list order, skipping unknown ids.
/// 2. Records sharing the matched record's category, or a category inferred
///    from its question text.
/// 3. The popular-question list. Without a matched record this is always
///    the answer, whatever the user typed.
#[must_use]
pub fn related<'a>(
    matched: Option<&QuestionRecord>,
    kb: &'a KnowledgeBase,
    max: usize,
) -> Vec<&'a QuestionRecord> {
    let max = max.min(MAX_RELATED);
    let Some(record) = matched else {
        return popular(kb, max);
    };

    let links = record.related_ids();
    if !links.is_empty() {
        return links.iter().filter_map(|id| kb.get(id)).take(max).collect();
    }

    let category = record
        .category()
        .or_else(|| infer_category(&record.question));
    if let Some(category) = category {
        tracing::trace!(category = %category, "Selecting related questions by category");
        return kb.in_category(category).take(max).collect();
    }

    popular(kb, max)
}

/// Resolves the popular-question list, skipping missing ids.
#[must_use]
pub fn popular(kb: &KnowledgeBase, max: usize) -> Vec<&QuestionRecord> {
    POPULAR_QUESTION_IDS
        .iter()
        .filter_map(|id| kb.get(id))
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::from_records(vec![
            QuestionRecord::new("quran_paras", "قرآن کتنے پاروں پر مشتمل ہے", "30")
                .with_category(Category::Structure),
            QuestionRecord::new("quran_surahs", "قرآن میں کتنی سورتیں ہیں", "114")
                .with_category(Category::Structure)
                .with_related(["missing", "longest_surah", "quran_paras"]),
            QuestionRecord::new("longest_surah", "سب سے طویل سورۃ", "البقرہ")
                .with_category(Category::Structure),
            QuestionRecord::new("ayat_count", "کتنی آیات ہیں", "6236")
                .with_category(Category::Structure),
            QuestionRecord::new("first_revelation", "پہلی وحی کب", "غار حرا")
                .with_category(Category::Revelation),
            QuestionRecord::new("untagged", "بے زمرہ سوال", "جواب"),
        ])
    }

    fn ids(records: &[&QuestionRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_explicit_links_skip_unknown_ids() {
        let kb = kb();
        let matched = kb.get("quran_surahs");
        let result = related(matched, &kb, 3);
        assert_eq!(ids(&result), vec!["longest_surah", "quran_paras"]);
    }

    #[test]
    fn test_category_of_matched_record() {
        let kb = kb();
        let result = related(kb.get("first_revelation"), &kb, 3);
        assert_eq!(ids(&result), vec!["first_revelation"]);
    }

    #[test]
    fn test_category_cap() {
        let kb = kb();
        let result = related(kb.get("quran_paras"), &kb, 3);
        assert_eq!(result.len(), 3);
        assert_eq!(ids(&result), vec!["quran_paras", "quran_surahs", "longest_surah"]);
    }

    #[test]
    fn test_no_record_uses_popular() {
        let kb = kb();
        let result = related(None, &kb, 3);
        assert_eq!(ids(&result), vec!["quran_paras", "quran_surahs", "longest_surah"]);

        let empty = KnowledgeBase::default();
        assert!(related(None, &empty, 3).is_empty());
    }

    #[test]
    fn test_no_record_ignores_category_of_popular_ids() {
        // only one structure record besides the popular ones
        let kb = KnowledgeBase::from_records(vec![
            QuestionRecord::new("ruku_count", "قرآن میں کتنے رکوع ہیں", "540")
                .with_category(Category::Structure),
            QuestionRecord::new("quran_paras", "قرآن کتنے پاروں پر مشتمل ہے", "30"),
            QuestionRecord::new("quran_surahs", "قرآن میں کتنی سورتیں ہیں", "114"),
        ]);
        assert_eq!(ids(&related(None, &kb, 3)), vec!["quran_paras", "quran_surahs"]);
    }

    #[test]
    fn test_untagged_record_infers_from_question() {
        let kb = kb();
        // "بے زمرہ سوال" has no inference keyword
        let result = related(kb.get("untagged"), &kb, 2);
        assert_eq!(ids(&result), vec!["quran_paras", "quran_surahs"]);

        let kb = KnowledgeBase::from_records(vec![
            QuestionRecord::new("q", "وحی کا سوال", "جواب"),
            QuestionRecord::new("first_revelation", "پہلی وحی کب", "غار حرا")
                .with_category(Category::Revelation),
        ]);
        assert_eq!(ids(&related(kb.get("q"), &kb, 3)), vec!["first_revelation"]);
    }

    #[test]
    fn test_limit_never_exceeds_three() {
        let kb = kb();
        assert_eq!(related(kb.get("quran_paras"), &kb, 10).len(), MAX_RELATED);
    }

    #[test]
    fn test_infer_category_order() {
        // structure comes before mentions
        assert_eq!(infer_category("سورت کا ذکر"), Some(Category::Structure));
        assert_eq!(infer_category("نام کتنی بار"), Some(Category::Mentions));
        assert_eq!(infer_category("hello"), None);
    }
}
