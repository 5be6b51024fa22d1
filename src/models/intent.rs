//! Conversational intent of an utterance.

use serde::{Deserialize, Serialize};

/// Coarse conversational category of an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Mentions firsts, the beginning of Islam, martyrs or women.
    History,
    /// "السلام علیکم", "hello", ...
    Greeting,
    /// "شکریہ", "thanks", ...
    Thanks,
    /// "اللہ حافظ", "bye", ...
    Farewell,
    /// "مدد", "help", ...
    Help,
    /// A knowledge question (default).
    #[default]
    Question,
    /// Assigned by the responder when nothing answered the question.
    Unknown,
}

impl Intent {
    /// Returns the string representation used in responses.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::History => "history",
            Self::Greeting => "greeting",
            Self::Thanks => "thanks",
            Self::Farewell => "farewell",
            Self::Help => "help",
            Self::Question => "question",
            Self::Unknown => "unknown",
        }
    }

    /// Returns true for intents answered from fixed templates.
    #[must_use]
    pub const fn is_conversational(&self) -> bool {
        matches!(
            self,
            Self::Greeting | Self::Thanks | Self::Farewell | Self::Help
        )
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
