//! Browsing helpers: popular questions, facts, categories and quick search.

use crate::matching::patterns::POPULAR_QUESTION_IDS;
use crate::models::{Category, KnowledgeBase, Pool};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// Questions listed per category.
pub const QUESTIONS_PER_CATEGORY: usize = 4;
/// Minimum query length (characters) for quick search.
pub const MIN_SEARCH_CHARS: usize = 2;
/// Maximum quick-search hits.
pub const MAX_SEARCH_HITS: usize = 5;
/// Characters of the answer shown in a preview.
const PREVIEW_CHARS: usize = 50;

/// A category with a sample of its questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    /// The category.
    pub category: Category,
    /// Display title.
    pub title: &'static str,
    /// Up to four question texts, in file order.
    pub questions: Vec<String>,
}

/// A quick-search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickSearchHit {
    /// Question text.
    pub question: String,
    /// Start of the answer.
    pub preview: String,
}

/// Returns the texts of the popular questions present in the base.
#[must_use]
pub fn popular_questions(kb: &KnowledgeBase) -> Vec<String> {
    POPULAR_QUESTION_IDS
        .iter()
        .filter_map(|id| kb.get(id))
        .map(|record| record.question.clone())
        .collect()
}

/// Returns a random fact.
pub fn daily_fact<R: Rng + ?Sized>(kb: &KnowledgeBase, rng: &mut R) -> String {
    kb.pool(Pool::Facts)
        .choose(rng)
        .map_or_else(|| Pool::Facts.default_entry().to_string(), |s| (*s).to_string())
}

/// Groups question texts by category, in order of first appearance.
///
/// Records without a recognized category are left out.
#[must_use]
pub fn categories(kb: &KnowledgeBase) -> Vec<CategorySummary> {
    let mut summaries: Vec<CategorySummary> = Vec::new();
    for record in kb.questions() {
        let Some(category) = record.category() else {
            continue;
        };
        let index = match summaries.iter().position(|s| s.category == category) {
            Some(index) => index,
            None => {
                summaries.push(CategorySummary {
                    category,
                    title: category.title(),
                    questions: Vec::new(),
                });
                summaries.len() - 1
            },
        };
        let summary = &mut summaries[index];
        if summary.questions.len() < QUESTIONS_PER_CATEGORY {
            summary.questions.push(record.question.clone());
        }
    }
    summaries
}

/// Case-insensitive substring search over questions and their phrasings.
#[must_use]
pub fn quick_search(kb: &KnowledgeBase, query: &str) -> Vec<QuickSearchHit> {
    if query.chars().count() < MIN_SEARCH_CHARS {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    kb.questions()
        .iter()
        .filter(|record| {
            record.question.to_lowercase().contains(&needle)
                || record
                    .alternative_phrasings
                    .iter()
                    .any(|alt| alt.to_lowercase().contains(&needle))
        })
        .take(MAX_SEARCH_HITS)
        .map(|record| QuickSearchHit {
            question: record.question.clone(),
            preview: preview(&record.answer),
        })
        .collect()
}

fn preview(answer: &str) -> String {
    if answer.chars().count() > PREVIEW_CHARS {
        let head: String = answer.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        answer.to_string()
    }
}
