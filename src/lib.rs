//! # quranqa
//!
//! Question-answering responder for Urdu questions about the Quran.
//!
//! Given a free-text utterance, quranqa decides what the user is asking for and
//! returns the best canned answer from a fixed knowledge base. When the
//! knowledge base has nothing confident to offer, the responder can fall back
//! to a verse-level search over Quranic translations.
//!
//! ## Pipeline
//!
//! ```text
//! utterance
//!     │
//!     ├─► specific-pattern table ──► canned answer (short-circuit)
//!     ├─► intent classifier ──────► greeting / thanks / farewell / help
//!     ├─► knowledge-base matcher ─► near-duplicate → keywords → fuzzy
//!     ├─► verse corpus search ────► verse + reference (medium confidence)
//!     └─► not-found response + fact + suggestions
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use quranqa::{KnowledgeStore, Responder};
//!
//! let store = KnowledgeStore::open("qa_data.json");
//! let responder = Responder::default();
//! let response = responder.process("قرآن میں کتنی سورتیں ہیں؟", &store.snapshot(), &mut rand::thread_rng());
//! println!("{}", response.answer);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod config;
pub mod corpus;
pub mod matching;
pub mod models;
pub mod observability;
pub mod services;
pub mod text;

// Re-exports for convenience
pub use config::{MatchThresholds, QaConfig};
pub use corpus::{DisabledCorpus, FileCorpus, InMemoryCorpus, VerseSearcher};
pub use models::{
    Category, Confidence, Intent, KnowledgeBase, KnowledgeData, MatchResult, QuestionRecord,
    Response, Source, VerseMatch, VerseRecord, VerseSearchResult,
};
pub use services::{KnowledgeStore, Responder, load_knowledge_base};

/// Error type for quranqa operations.
///
/// The matching core never produces errors; these variants only surface at the
/// edges where files are read, written or parsed.
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Malformed configuration values, unknown CLI arguments |
/// | `OperationFailed` | I/O errors, JSON/TOML/CSV parse failures, logging init |
/// | `CorpusUnavailable` | Verse corpus missing or failed to load |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - The knowledge-base or corpus file cannot be read or written
    /// - JSON, TOML or CSV content cannot be parsed
    /// - Observability has already been initialized
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },

    /// The secondary verse corpus is not loaded.
    ///
    /// The responder treats this as "no secondary result" and moves on to the
    /// not-found branch.
    #[error("corpus unavailable: {0}")]
    CorpusUnavailable(String),
}

impl Error {
    /// Builds an `OperationFailed` error from an operation name and a cause.
    pub fn operation(operation: &str, cause: impl std::fmt::Display) -> Self {
        Self::OperationFailed {
            operation: operation.to_string(),
            cause: cause.to_string(),
        }
    }
}

/// Result type alias for quranqa operations.
pub type Result<T> = std::result::Result<T, Error>;
