//! Secondary verse corpus.
//!
//! Consulted only when the knowledge base has no answer. A searcher that is
//! unavailable, or whose search fails, simply yields no secondary result.
//!
//! # Available Implementations
//!
//! | Searcher | Use Case |
//! |----------|----------|
//! | [`InMemoryCorpus`] | Tests and embedding callers that already hold verses |
//! | [`FileCorpus`] | CSV or JSON file, read once on first search |
//! | [`DisabledCorpus`] | No corpus configured |
//!
//! # Scoring
//!
//! | Method | Score |
//! |--------|-------|
//! | `exact_match` | 1.0 |
//! | `contains_match` | 0.9 |
//! | `word_match` | hits / query words * 0.8 |
//! | `fuzzy_match` | sequence ratio * 0.7, when ratio > 0.5 |

mod file;
mod format;
mod memory;
mod surahs;

pub use file::{DisabledCorpus, FileCorpus, load_verses};
pub use format::{ADDITIONAL_VERSES_HEADER, format_answer, suggestions};
pub use memory::InMemoryCorpus;
pub use surahs::{SURAH_NAMES, reference, surah_name};

use crate::Result;
use crate::models::VerseSearchResult;

/// Trait for secondary verse searchers.
///
/// # Implementor Notes
///
/// - Methods use `&self` so a searcher can be shared via `Arc<dyn VerseSearcher>`
/// - One-time loading belongs behind interior mutability (e.g. `OnceLock`)
/// - "Not loaded yet" is not an error; `is_available` should report whether
///   a search can be attempted
pub trait VerseSearcher: Send + Sync {
    /// Returns true if a search can be attempted.
    fn is_available(&self) -> bool;

    /// Searches the corpus.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus cannot be loaded or searched.
    fn search(&self, query: &str) -> Result<VerseSearchResult>;
}
