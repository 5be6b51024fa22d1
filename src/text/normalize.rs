//! Punctuation stripping and whitespace normalization.
// Allow expect() on static regex patterns - these are guaranteed to compile
#![allow(clippy::expect_used)]

use super::Language;
use regex::Regex;
use std::sync::LazyLock;

/// Urdu sentence and clause punctuation replaced by a space.
static URDU_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[۔،؟!؛:()]").expect("static regex: urdu punctuation"));

/// Runs of whitespace collapsed to a single space.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex: whitespace run"));

/// Normalizes text for matching.
///
/// - Urdu: each of `۔ ، ؟ ! ؛ : ( )` becomes a space; case is left alone.
/// - English: ASCII punctuation is removed and the text is lowercased.
///
/// Both modes collapse whitespace runs and trim the ends. Never fails; empty
/// input yields an empty string.
#[must_use]
pub fn normalize(text: &str, language: Language) -> String {
    if text.is_empty() {
        return String::new();
    }

    let stripped = match language {
        Language::Urdu => URDU_PUNCTUATION.replace_all(text, " ").into_owned(),
        Language::English => text
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect::<String>()
            .to_lowercase(),
    };

    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}

/// Normalizes Urdu text. Shorthand for `normalize(text, Language::Urdu)`.
#[must_use]
pub fn normalize_urdu(text: &str) -> String {
    normalize(text, Language::Urdu)
}
