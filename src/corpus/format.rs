//! Turns a corpus search result into answer text and suggestions.

use crate::models::{VerseMatch, VerseSearchResult};
use crate::text::is_arabic_script;

/// Header of the numbered block listing additional verses.
pub const ADDITIONAL_VERSES_HEADER: &str = "مزید متعلقہ آیات:";

/// Clause length bounds (characters, inclusive) for a suggestion.
const CLAUSE_MIN_CHARS: usize = 10;
const CLAUSE_MAX_CHARS: usize = 60;
/// Maximum clause-derived suggestions.
const MAX_CLAUSE_SUGGESTIONS: usize = 2;

/// Formats the answer text for a result with a primary match.
///
/// The primary verse comes first, followed by its reference. Other matches
/// follow as a numbered block, capped at `max_additional` when set.
/// Returns `None` when there is no primary match.
#[must_use]
pub fn format_answer(result: &VerseSearchResult, max_additional: Option<usize>) -> Option<String> {
    let primary = result.primary_match.as_ref()?;
    let mut answer = format!("{}\n\n📖 {}", primary.record.verse, primary.record.reference);

    let limit = max_additional.unwrap_or(usize::MAX);
    let others: Vec<&VerseMatch> = result.other_matches.iter().take(limit).collect();
    if !others.is_empty() {
        answer.push_str("\n\n");
        answer.push_str(ADDITIONAL_VERSES_HEADER);
        for (i, hit) in others.iter().enumerate() {
            answer.push_str(&format!(
                "\n\n{}. {}\n📖 {}",
                i + 1,
                hit.record.verse,
                hit.record.reference
            ));
        }
    }

    Some(answer)
}

/// Derives follow-up suggestions from the matched verses.
///
/// Up to two first clauses (10-60 characters) become questions, then a
/// generic "more about" suggestion for the query is always appended.
#[must_use]
pub fn suggestions(result: &VerseSearchResult, query: &str) -> Vec<String> {
    let mut out: Vec<String> = result
        .primary_match
        .iter()
        .chain(result.other_matches.iter())
        .filter_map(|hit| first_clause(&hit.record.verse))
        .map(|clause| format!("{clause}؟"))
        .take(MAX_CLAUSE_SUGGESTIONS)
        .collect();

    out.push(format!("{} کے بارے میں مزید", query.trim()));
    out
}

/// Returns the verse's first clause if its length is within bounds.
fn first_clause(verse: &str) -> Option<&str> {
    let delimiter = if verse.chars().any(is_arabic_script) {
        '،'
    } else {
        ','
    };
    let clause = verse.split(delimiter).next()?.trim();
    let chars = clause.chars().count();
    (CLAUSE_MIN_CHARS..=CLAUSE_MAX_CHARS)
        .contains(&chars)
        .then_some(clause)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchMethod, VerseRecord};

    fn hit(surah: u16, text: &str, score: f64) -> VerseMatch {
        VerseMatch {
            record: VerseRecord {
                surah,
                ayah: 1,
                verse: text.to_string(),
                reference: crate::corpus::reference(surah, 1),
            },
            score,
            methods: vec![MatchMethod::WordMatch],
        }
    }

    fn result() -> VerseSearchResult {
        VerseSearchResult::from_ranked(vec![
            hit(2, "اللہ، اس کے سوا کوئی معبود نہیں", 0.9),
            hit(3, "بیشک اللہ کے نزدیک دین اسلام ہے، اور", 0.5),
            hit(112, "کہو وہ اللہ ایک ہے", 0.4),
        ])
    }

    #[test]
    fn test_answer_layout() {
        let answer = format_answer(&result(), None).unwrap();
        assert!(answer.starts_with("اللہ، اس کے سوا کوئی معبود نہیں\n\n📖 البقرة ، آیت 1"));
        assert!(answer.contains(ADDITIONAL_VERSES_HEADER));
        assert!(answer.contains("\n\n1. بیشک"));
        assert!(answer.contains("\n\n2. کہو وہ اللہ ایک ہے\n📖 الإخلاص ، آیت 1"));
    }

    #[test]
    fn test_additional_cap() {
        let answer = format_answer(&result(), Some(1)).unwrap();
        assert!(answer.contains("1. "));
        assert!(!answer.contains("2. "));

        let bare = format_answer(&result(), Some(0)).unwrap();
        assert!(!bare.contains(ADDITIONAL_VERSES_HEADER));
    }

    #[test]
    fn test_no_primary() {
        assert!(format_answer(&VerseSearchResult::default(), None).is_none());
    }

    #[test]
    fn test_suggestions() {
        let suggestions = suggestions(&result(), " اللہ ");
        // the primary's first clause ("اللہ") is too short
        assert_eq!(
            suggestions,
            vec![
                "بیشک اللہ کے نزدیک دین اسلام ہے؟".to_string(),
                "کہو وہ اللہ ایک ہے؟".to_string(),
                "اللہ کے بارے میں مزید".to_string(),
            ]
        );
    }

    #[test]
    fn test_latin_delimiter() {
        assert_eq!(
            first_clause("In the name of God, the Merciful"),
            Some("In the name of God")
        );
        assert_eq!(first_clause("Short, clause"), None);
    }
}
