//! Static phrase tables for intent detection and matching.
//!
//! Every table here is immutable data. The category keyword lists are kept as
//! three separate tables (Stage 2 boosting, related-question inference and
//! offline enrichment) because they are tuned independently.

use crate::models::Category;

// ============================================================================
// Intent phrases (checked as substrings of the lowercased utterance)
// ============================================================================

/// Firsts, the beginning of Islam, martyrs and women.
pub const HISTORY_PHRASES: &[&str] = &[
    "سب سے پہلے",
    "پہلا",
    "پہلی",
    "ابتدائے اسلام",
    "اسلام کی ابتدا",
    "اسلام کے آغاز",
    "شہید",
    "عورت",
    "خاتون",
];

/// Greeting phrases, matched as substrings.
pub const GREETING_PHRASES: &[&str] = &[
    "السلام علیکم",
    "اسلام علیکم",
    "سلام علیکم",
    "آداب",
    "ہیلو",
    "ہائے",
    "جی ",
    "hello",
    "hi ",
    "hey",
    "assalam",
    "salam",
];

/// Greetings matched only as whole tokens, since "سلام" sits inside "اسلام".
pub const GREETING_WORDS: &[&str] = &["سلام"];

/// Thank-you words.
pub const THANKS_PHRASES: &[&str] = &[
    "شکریہ",
    "مہربانی",
    "احسان",
    "ممنون",
    "تھینکس",
    "thanks",
    "thank you",
    "thanks a lot",
];

/// Farewell phrases.
pub const FAREWELL_PHRASES: &[&str] = &[
    "اللہ حافظ",
    "خدا حافظ",
    "فی امان اللہ",
    "الوداع",
    "بائے",
    "bye",
    "goodbye",
    "see you",
];

/// Help words.
pub const HELP_PHRASES: &[&str] = &["مدد", "help", "کیسے", "how to", "guide", "explain"];

// ============================================================================
// Category keyword tables
// ============================================================================

/// Stage 2 boost keywords: each hit adds a flat bonus to records of the category.
#[must_use]
pub const fn boost_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Structure => &["پارہ", "سورت", "آیت", "رکوع", "حروف", "الفاظ"],
        Category::Revelation => &["نزول", "وحی", "نازل", "مکہ", "مدینہ"],
        Category::Prophets => &["نبی", "پیغمبر", "رسول", "محمد", "عیسیٰ", "موسیٰ"],
        Category::SpecialVerses => &["خاص", "فضیلت", "مشہور", "بڑی", "چھوٹی"],
        Category::Mentions | Category::IslamicHistory => &[],
    }
}

/// Order in which categories are tried when inferring one from a question.
pub const INFERENCE_ORDER: &[Category] = &[
    Category::Structure,
    Category::Revelation,
    Category::Prophets,
    Category::SpecialVerses,
    Category::Mentions,
];

/// Keywords used to infer a category for related-question selection.
#[must_use]
pub const fn inference_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Structure => &["پارہ", "سورت", "آیت", "رکوع", "حروف", "الفاظ"],
        Category::Revelation => &["نزول", "وحی", "نازل", "مکہ", "مدینہ"],
        Category::Prophets => &["نبی", "پیغمبر", "رسول", "محمد", "عیسیٰ", "موسیٰ"],
        Category::SpecialVerses => &["خاص", "فضیلت", "مشہور", "بڑی", "چھوٹی"],
        Category::Mentions => &["ذکر", "کتنی بار", "نام", "کتنی دفعہ"],
        Category::IslamicHistory => &[],
    }
}

/// Keywords appended to records by the offline enrichment pass.
#[must_use]
pub const fn enrichment_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Structure => &["ڈھانچا", "ترتیب", "تشکیل", "بناوٹ"],
        Category::Revelation => &["وحی", "نازل", "نزول", "اتارا"],
        Category::Prophets => &["انبیاء", "رسل", "پیغمبر", "نبی"],
        Category::SpecialVerses => &["خاص", "مخصوص", "اہم", "خصوصی"],
        Category::Mentions => &["ذکر", "نام", "اسم", "تذکرہ"],
        Category::IslamicHistory => &["تاریخ", "واقعہ", "حادثہ", "داستان"],
    }
}

// ============================================================================
// Specific answers
// ============================================================================

/// A high-priority canned answer triggered by literal substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecificAnswer {
    /// Type key.
    pub key: &'static str,
    /// Literal patterns; any one occurring in the query triggers the answer.
    pub patterns: &'static [&'static str],
    /// The canned answer.
    pub answer: &'static str,
}

/// Specific answers in lookup order. The first entry with a hit wins.
pub const SPECIFIC_ANSWERS: &[SpecificAnswer] = &[
    SpecificAnswer {
        key: "most_mentioned_prophet",
        patterns: &[
            "کس نبی کا سب سے زیادہ ذکر",
            "کس پیغمبر کا سب سے زیادہ ذکر",
            "سب سے زیادہ ذکر کس نبی",
            "سب سے زیادہ ذکر کس پیغمبر",
            "most mentioned prophet",
        ],
        answer: "قرآن میں سب سے زیادہ ذکر حضرت موسیٰ علیہ السلام کا آیا ہے۔ ان کا نام قرآن مجید میں 136 مرتبہ آیا ہے۔",
    },
    SpecificAnswer {
        key: "musa_mentions",
        patterns: &[
            "موسیٰ کا ذکر کتنی",
            "موسیٰ کا نام کتنی",
            "موسی کا ذکر کتنی",
            "موسی کا نام کتنی",
        ],
        answer: "قرآن مجید میں حضرت موسیٰ علیہ السلام کا نام 136 مرتبہ آیا ہے۔",
    },
    SpecificAnswer {
        key: "ibrahim_mentions",
        patterns: &["ابراہیم کا ذکر کتنی", "ابراہیم کا نام کتنی"],
        answer: "قرآن مجید میں حضرت ابراہیم علیہ السلام کا نام 69 مرتبہ آیا ہے۔",
    },
    SpecificAnswer {
        key: "nuh_mentions",
        patterns: &["نوح کا ذکر کتنی", "نوح کا نام کتنی"],
        answer: "قرآن مجید میں حضرت نوح علیہ السلام کا نام 43 مرتبہ آیا ہے۔",
    },
    SpecificAnswer {
        key: "isa_mentions",
        patterns: &[
            "عیسیٰ کا ذکر کتنی",
            "عیسیٰ کا نام کتنی",
            "عیسی کا ذکر کتنی",
            "عیسی کا نام کتنی",
        ],
        answer: "قرآن مجید میں حضرت عیسیٰ علیہ السلام کا نام 25 مرتبہ آیا ہے۔",
    },
    SpecificAnswer {
        key: "yusuf_mentions",
        patterns: &["یوسف کا ذکر کتنی", "یوسف کا نام کتنی"],
        answer: "قرآن مجید میں حضرت یوسف علیہ السلام کا نام 27 مرتبہ آیا ہے۔",
    },
];

// ============================================================================
// Fixed responses and fallbacks
// ============================================================================

/// Answer for empty input.
pub const NO_QUESTION_ANSWER: &str = "کوئی سوال موصول نہیں ہوا۔ براہ کرم اپنا سوال لکھیں۔";

/// Multi-line help text.
pub const HELP_TEXT: &str = "آپ قرآن کے بارے میں کوئی بھی سوال پوچھ سکتے ہیں، جیسے:
- قرآن کتنے پاروں پر مشتمل ہے؟
- سب سے طویل سورۃ کون سی ہے؟
- قرآن میں کتنی سورتیں ہیں؟
- قرآن میں کس پیغمبر کا سب سے زیادہ ذکر ہے؟";

/// Suggestions offered after a thank-you.
pub const THANKS_SUGGESTIONS: &[&str] = &["مزید سوالات", "اللہ حافظ"];

/// Suggestion used when no prophets-category record exists.
pub const PROPHETS_FALLBACK_SUGGESTION: &str = "قرآن میں کتنے انبیاء کا ذکر ہے؟";

/// Upper bound on follow-up suggestions per answer.
pub const MAX_RELATED: usize = 3;

/// Record ids suggested when nothing better is known.
pub const POPULAR_QUESTION_IDS: &[&str] =
    &["quran_paras", "quran_surahs", "longest_surah", "shortest_surah"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_keys_unique() {
        let mut keys: Vec<&str> = SPECIFIC_ANSWERS.iter().map(|s| s.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), SPECIFIC_ANSWERS.len());
    }

    #[test]
    fn test_specific_patterns_have_no_punctuation() {
        // Patterns are compared against punctuation-stripped input.
        for entry in SPECIFIC_ANSWERS {
            for pattern in entry.patterns {
                assert_eq!(crate::text::normalize_urdu(pattern), *pattern);
            }
        }
    }

    #[test]
    fn test_boost_and_inference_tables_are_independent() {
        assert!(boost_keywords(Category::Mentions).is_empty());
        assert!(!inference_keywords(Category::Mentions).is_empty());
        assert!(!enrichment_keywords(Category::IslamicHistory).is_empty());
    }

    #[test]
    fn test_greetings_do_not_fire_on_islam() {
        assert!(!GREETING_PHRASES.iter().any(|p| "اسلام".contains(p)));
        assert!(!GREETING_WORDS.contains(&"اسلام"));
    }
}
