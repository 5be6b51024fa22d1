//! Question categories.

use serde::{Deserialize, Serialize};

/// Fixed set of knowledge-base categories.
///
/// Records store their category as free text; only these values take part in
/// category boosting, related-question selection and catalog grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Paras, surahs, verses, word and letter counts.
    Structure,
    /// Revelation of the Quran (wahy, Makkah, Madinah).
    Revelation,
    /// Prophets mentioned in the Quran.
    Prophets,
    /// Notable verses and their virtues.
    SpecialVerses,
    /// How often names and terms are mentioned.
    Mentions,
    /// Early Islamic history.
    IslamicHistory,
}

impl Category {
    /// Returns all categories in their fixed enumeration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Structure,
            Self::Revelation,
            Self::Prophets,
            Self::SpecialVerses,
            Self::Mentions,
            Self::IslamicHistory,
        ]
    }

    /// Returns the category as stored in the knowledge-base file.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Revelation => "revelation",
            Self::Prophets => "prophets",
            Self::SpecialVerses => "special_verses",
            Self::Mentions => "mentions",
            Self::IslamicHistory => "islamic_history",
        }
    }

    /// Returns the Urdu display title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Structure => "قرآن کا ڈھانچہ",
            Self::Revelation => "قرآن کا نزول",
            Self::Prophets => "انبیاء کرام",
            Self::SpecialVerses => "خاص آیات",
            Self::Mentions => "مختلف ذکر",
            Self::IslamicHistory => "اسلامی تاریخ",
        }
    }

    /// Parses a stored category string.
    ///
    /// Matching is exact: unrecognized values are treated as "no category".
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "structure" => Some(Self::Structure),
            "revelation" => Some(Self::Revelation),
            "prophets" => Some(Self::Prophets),
            "special_verses" => Some(Self::SpecialVerses),
            "mentions" => Some(Self::Mentions),
            "islamic_history" => Some(Self::IslamicHistory),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
