//! Knowledge-base loading, saving and hot reload.

use crate::models::{KnowledgeBase, KnowledgeData};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::Instant;

/// Reads and parses a knowledge-base file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn load_knowledge_data(path: &Path) -> Result<KnowledgeData> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| Error::operation("read_knowledge_base", e))?;
    serde_json::from_str(&contents).map_err(|e| Error::operation("parse_knowledge_base", e))
}

/// Loads a knowledge base, degrading to an empty one on any failure.
///
/// The empty base still answers pool lookups with their single-element
/// defaults.
#[must_use]
pub fn load_knowledge_base(path: &Path) -> KnowledgeBase {
    let start = Instant::now();
    match load_knowledge_data(path) {
        Ok(data) => {
            let kb = KnowledgeBase::new(data);
            tracing::info!(
                path = %path.display(),
                questions = kb.len(),
                duration_ms = %start.elapsed().as_millis(),
                "Loaded knowledge base"
            );
            kb
        },
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Knowledge base unavailable, using empty defaults"
            );
            KnowledgeBase::default()
        },
    }
}

/// Writes a knowledge-base file as pretty-printed UTF-8 JSON.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_knowledge_data(path: &Path, data: &KnowledgeData) -> Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| Error::operation("serialize_knowledge_base", e))?;
    std::fs::write(path, json).map_err(|e| Error::operation("write_knowledge_base", e))?;
    tracing::info!(path = %path.display(), questions = data.questions.len(), "Saved knowledge base");
    Ok(())
}

/// Shared, reloadable knowledge base.
///
/// Requests take a [`snapshot`](Self::snapshot) and work on it for their
/// whole duration. [`reload`](Self::reload) builds a complete new snapshot
/// before swapping it in, so no request ever sees a half-loaded base.
#[derive(Debug)]
pub struct KnowledgeStore {
    path: Option<PathBuf>,
    current: RwLock<Arc<KnowledgeBase>>,
}

impl KnowledgeStore {
    /// Loads the file at `path`; failures yield an empty base.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let kb = load_knowledge_base(&path);
        Self {
            path: Some(path),
            current: RwLock::new(Arc::new(kb)),
        }
    }

    /// Wraps an in-memory base with no backing file.
    #[must_use]
    pub fn from_base(kb: KnowledgeBase) -> Self {
        Self {
            path: None,
            current: RwLock::new(Arc::new(kb)),
        }
    }

    /// Returns the backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<KnowledgeBase> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Replaces the snapshot.
    pub fn replace(&self, kb: KnowledgeBase) {
        let next = Arc::new(kb);
        match self.current.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }

    /// Re-reads the backing file and swaps in the result.
    ///
    /// The current snapshot is kept if the file cannot be read or parsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store has no backing file or loading fails.
    pub fn reload(&self) -> Result<Arc<KnowledgeBase>> {
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| Error::InvalidInput("knowledge store has no backing file".to_string()))?;
        let data = load_knowledge_data(path)?;
        self.replace(KnowledgeBase::new(data));
        tracing::info!(path = %path.display(), "Reloaded knowledge base");
        Ok(self.snapshot())
    }
}
