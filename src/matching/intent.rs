//! Keyword-based intent classification.
//!
//! Categories are checked in a fixed priority order and the first category
//! with any phrase hit wins, regardless of how many others would also match:
//!
//! | Priority | Intent | Examples |
//! |----------|--------|----------|
//! | 1 | `History` | "پہلا", "شہید", "خاتون" |
//! | 2 | `Greeting` | "السلام علیکم", "hello" |
//! | 3 | `Thanks` | "شکریہ", "thanks" |
//! | 4 | `Farewell` | "اللہ حافظ", "bye" |
//! | 5 | `Help` | "مدد", "help" |
//! | - | `Question` | everything else |

use super::patterns::{
    FAREWELL_PHRASES, GREETING_PHRASES, GREETING_WORDS, HELP_PHRASES, HISTORY_PHRASES,
    THANKS_PHRASES,
};
use crate::models::Intent;

/// Phrase tables in priority order: substring phrases, then whole-token words.
const PRIORITY: &[(Intent, &[&str], &[&str])] = &[
    (Intent::History, HISTORY_PHRASES, &[]),
    (Intent::Greeting, GREETING_PHRASES, GREETING_WORDS),
    (Intent::Thanks, THANKS_PHRASES, &[]),
    (Intent::Farewell, FAREWELL_PHRASES, &[]),
    (Intent::Help, HELP_PHRASES, &[]),
];

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation() || matches!(c, '،' | '؟' | '۔' | '؛')
}

/// Classifies an utterance.
///
/// Empty input is a `Question`. Never fails.
#[must_use]
pub fn classify_intent(text: &str) -> Intent {
    classify_with_trigger(text).0
}

/// Classifies an utterance and returns the phrase that triggered it.
#[must_use]
pub fn classify_with_trigger(text: &str) -> (Intent, Option<&'static str>) {
    if text.is_empty() {
        return (Intent::Question, None);
    }

    let lowered = text.to_lowercase();
    for (intent, phrases, words) in PRIORITY {
        let hit = phrases.iter().find(|p| lowered.contains(**p)).or_else(|| {
            words
                .iter()
                .find(|w| lowered.split(is_separator).any(|token| token == **w))
        });
        if let Some(phrase) = hit {
            tracing::debug!(intent = %intent, phrase = %phrase, "Intent phrase matched");
            return (*intent, Some(phrase));
        }
    }

    (Intent::Question, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("السلام علیکم", Intent::Greeting ; "urdu greeting")]
    #[test_case("سلام", Intent::Greeting ; "bare salam")]
    #[test_case("سلام، کیا حال ہے؟", Intent::Greeting ; "salam with punctuation")]
    #[test_case("Hello there", Intent::Greeting ; "english greeting")]
    #[test_case("شکریہ", Intent::Thanks ; "urdu thanks")]
    #[test_case("THANK YOU so much", Intent::Thanks ; "english thanks is case insensitive")]
    #[test_case("اللہ حافظ", Intent::Farewell ; "urdu farewell")]
    #[test_case("goodbye", Intent::Farewell ; "english farewell")]
    #[test_case("مجھے مدد چاہیے", Intent::Help ; "urdu help")]
    #[test_case("اسلام کا پہلا شہید کون تھا", Intent::History ; "history")]
    #[test_case("قرآن میں کتنی سورتیں ہیں", Intent::Question ; "plain question")]
    #[test_case("اسلام میں کتنے ارکان ہیں", Intent::Question ; "islam is not a greeting")]
    #[test_case("اسلام میں کتنے ارکان", Intent::Question ; "islam without verb is not a greeting")]
    #[test_case("", Intent::Question ; "empty input")]
    fn test_classify(text: &str, expected: Intent) {
        assert_eq!(classify_intent(text), expected);
    }

    #[test]
    fn test_greeting_beats_thanks() {
        assert_eq!(classify_intent("السلام علیکم، شکریہ"), Intent::Greeting);
    }

    #[test]
    fn test_history_beats_greeting() {
        assert_eq!(
            classify_intent("السلام علیکم، پہلی خاتون کون تھیں"),
            Intent::History
        );
    }

    #[test]
    fn test_thanks_beats_farewell_and_help() {
        assert_eq!(classify_intent("شکریہ اللہ حافظ"), Intent::Thanks);
        assert_eq!(classify_intent("bye, help"), Intent::Farewell);
    }

    #[test]
    fn test_trigger_reported() {
        let (intent, trigger) = classify_with_trigger("thanks a lot");
        assert_eq!(intent, Intent::Thanks);
        assert_eq!(trigger, Some("thanks"));
        assert_eq!(classify_with_trigger("قرآن").1, None);
        assert_eq!(classify_with_trigger("سلام"), (Intent::Greeting, Some("سلام")));
    }
}
