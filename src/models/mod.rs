//! Data models for quranqa.
//!
//! This module contains the core data structures shared by the matcher, the
//! corpus searcher and the responder.

mod category;
mod intent;
mod question;
mod response;
mod verse;

pub use category::Category;
pub use intent::Intent;
pub use question::{
    DEFAULT_FACT, DEFAULT_FAREWELL, DEFAULT_GREETING, DEFAULT_NOT_FOUND, DEFAULT_THANK_YOU,
    KnowledgeBase, KnowledgeData, Pool, QuestionRecord,
};
pub use response::{Confidence, MatchResult, Response, Source};
pub use verse::{MatchMethod, VerseMatch, VerseRecord, VerseSearchResult};
