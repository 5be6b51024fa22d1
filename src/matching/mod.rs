//! Query matching.
//!
//! Turns a raw utterance into an intent, a specific canned answer, or a
//! knowledge-base record, and picks follow-up suggestions.
//!
//! # Order of checks
//!
//! | Step | Component | Outcome |
//! |------|-----------|---------|
//! | 1 | [`find_specific_answer`] | canned answer, high confidence |
//! | 2 | [`classify_intent`] | conversational reply for greeting/thanks/farewell/help |
//! | 3 | [`KnowledgeMatcher`] | record via near-duplicate, keyword or fuzzy stage |
//! | 4 | [`related`] | up to `max_related` follow-up records |
//!
//! All phrase and keyword tables live in [`patterns`].

mod intent;
mod knowledge;
pub mod patterns;
mod related;
mod specific;

pub use intent::{classify_intent, classify_with_trigger};
pub use knowledge::{KnowledgeMatch, KnowledgeMatcher, MatchStage};
pub use related::{infer_category, popular, related};
pub use specific::find_specific_answer;
