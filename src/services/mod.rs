//! Services built on the matching core.
//!
//! - [`Responder`]: the "answer this utterance" operation
//! - [`KnowledgeStore`]: loading, saving and atomic reload of the knowledge base
//! - [`catalog`]: popular questions, facts, categories and quick search
//! - [`enrichment`]: offline keyword and pool enrichment

pub mod catalog;
pub mod enrichment;
mod knowledge_store;
mod responder;

pub use catalog::{
    CategorySummary, QuickSearchHit, categories, daily_fact, popular_questions, quick_search,
};
pub use enrichment::{EnrichmentReport, enrich};
pub use knowledge_store::{
    KnowledgeStore, load_knowledge_base, load_knowledge_data, save_knowledge_data,
};
pub use responder::Responder;
