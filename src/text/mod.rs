//! Text processing: normalization, tokenization and similarity scoring.
//!
//! # Architecture
//!
//! - [`normalize`]: punctuation stripping and whitespace collapsing
//! - [`tokenize`]: whitespace tokens (Urdu) or stemmed word tokens (English)
//! - [`sequence_ratio`]: character-level longest-matching-blocks ratio
//! - [`similarity`]: `0.6 * sequence + 0.4 * word overlap`
//!
//! All functions are pure and never fail.

mod normalize;
mod sequence;
mod similarity;
mod tokenize;

pub use normalize::{normalize, normalize_urdu};
pub use sequence::sequence_ratio;
pub use similarity::{similarity, similarity_urdu};
pub use tokenize::{ENGLISH_STOP_WORDS, tokenize, tokenize_urdu};

/// Language mode for normalization and tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Urdu (and other Arabic-script text).
    #[default]
    Urdu,
    /// English.
    English,
}

impl Language {
    /// Guesses the language of a query.
    ///
    /// Text with any Arabic-script letter is Urdu; otherwise text with an
    /// ASCII letter is English; anything else defaults to Urdu.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        if text.chars().any(is_arabic_script) {
            Self::Urdu
        } else if text.chars().any(|c| c.is_ascii_alphabetic()) {
            Self::English
        } else {
            Self::Urdu
        }
    }
}

/// Returns true for characters in the Arabic-script Unicode blocks.
#[must_use]
pub const fn is_arabic_script(c: char) -> bool {
    matches!(
        c,
        '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{08A0}'..='\u{08FF}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}'
    )
}
