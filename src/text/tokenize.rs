//! Word tokenization.

use super::Language;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

/// English stop words dropped before stemming.
pub static ENGLISH_STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
        "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
        "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
        "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
        "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been",
        "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the",
        "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
        "with", "about", "against", "between", "into", "through", "during", "before", "after",
        "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
        "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
        "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
        "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
        "will", "just", "don", "don't", "should", "should've", "now", "d", "ll", "m", "o", "re",
        "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn",
        "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma",
        "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
        "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
        "wouldn't",
    ]
    .into_iter()
    .collect()
});

/// Splits already-normalized text into tokens.
///
/// Urdu splits on whitespace. English uses Unicode word boundaries, drops
/// stop words and stems the rest with the Snowball English stemmer.
#[must_use]
pub fn tokenize(normalized: &str, language: Language) -> Vec<String> {
    match language {
        Language::Urdu => tokenize_urdu(normalized),
        Language::English => tokenize_english(normalized),
    }
}

/// Whitespace tokenization for Urdu.
#[must_use]
pub fn tokenize_urdu(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn tokenize_english(text: &str) -> Vec<String> {
    let stemmer = Stemmer::create(Algorithm::English);
    text.unicode_words()
        .map(str::to_lowercase)
        .filter(|word| !ENGLISH_STOP_WORDS.contains(word.as_str()))
        .map(|word| stemmer.stem(&word).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urdu_whitespace_split() {
        assert_eq!(
            tokenize("قرآن میں  کتنی سورتیں", Language::Urdu),
            vec!["قرآن", "میں", "کتنی", "سورتیں"]
        );
    }

    #[test]
    fn test_urdu_empty() {
        assert!(tokenize("", Language::Urdu).is_empty());
        assert!(tokenize("   ", Language::Urdu).is_empty());
    }

    #[test]
    fn test_english_stopwords_removed_and_stemmed() {
        let tokens = tokenize("how many chapters are in the quran", Language::English);
        assert_eq!(tokens, vec!["mani", "chapter", "quran"]);
    }

    #[test]
    fn test_english_stemming_unifies_forms() {
        let a = tokenize("revealed", Language::English);
        let b = tokenize("revealing", Language::English);
        assert_eq!(a, b);
    }
}
