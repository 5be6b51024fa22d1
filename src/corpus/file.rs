//! File-backed corpora.
//!
//! A corpus file is either CSV with `Surah`, `Ayah` and `Translation`
//! columns (header names are case-insensitive, `verse`/`text` are accepted
//! for the translation) or a JSON array of objects with the same keys.
//! The file is read once, on the first search.

use super::{InMemoryCorpus, VerseSearcher, reference};
use crate::models::{VerseRecord, VerseSearchResult};
use crate::{Error, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Instant;

/// A corpus loaded lazily from disk.
#[derive(Debug)]
pub struct FileCorpus {
    path: PathBuf,
    loaded: OnceLock<std::result::Result<InMemoryCorpus, String>>,
}

impl FileCorpus {
    /// Creates a corpus for `path` without reading it.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            loaded: OnceLock::new(),
        }
    }

    /// Returns the corpus path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true once the file has been read successfully.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.loaded.get(), Some(Ok(_)))
    }

    fn corpus(&self) -> Result<&InMemoryCorpus> {
        self.loaded
            .get_or_init(|| {
                let start = Instant::now();
                let result = load_verses(&self.path).map(InMemoryCorpus::new);
                match &result {
                    Ok(corpus) => tracing::info!(
                        path = %self.path.display(),
                        verses = corpus.len(),
                        duration_ms = %start.elapsed().as_millis(),
                        "Loaded verse corpus"
                    ),
                    Err(e) => tracing::warn!(
                        path = %self.path.display(),
                        error = %e,
                        "Verse corpus unavailable"
                    ),
                }
                result.map_err(|e| e.to_string())
            })
            .as_ref()
            .map_err(|cause| Error::CorpusUnavailable(cause.clone()))
    }
}

impl VerseSearcher for FileCorpus {
    fn is_available(&self) -> bool {
        match self.loaded.get() {
            Some(loaded) => loaded.is_ok(),
            None => self.path.is_file(),
        }
    }

    fn search(&self, query: &str) -> Result<VerseSearchResult> {
        self.corpus().map(|corpus| corpus.rank(query))
    }
}

/// A searcher that is never available.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledCorpus;

impl VerseSearcher for DisabledCorpus {
    fn is_available(&self) -> bool {
        false
    }

    fn search(&self, _query: &str) -> Result<VerseSearchResult> {
        Err(Error::CorpusUnavailable("no corpus configured".to_string()))
    }
}

/// Reads verses from a CSV or JSON file, chosen by extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_verses(path: &Path) -> Result<Vec<VerseRecord>> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let file = std::fs::File::open(path).map_err(|e| Error::operation("open_corpus", e))?;
    if is_json {
        read_json(file)
    } else {
        read_csv(file)
    }
}

/// Row shape shared by both formats.
#[derive(Debug, Deserialize)]
struct VerseRow {
    #[serde(alias = "Surah", alias = "SURAH")]
    surah: u16,
    #[serde(alias = "Ayah", alias = "AYAH")]
    ayah: u16,
    #[serde(alias = "Translation", alias = "translation", alias = "text")]
    verse: String,
}

impl From<VerseRow> for VerseRecord {
    fn from(row: VerseRow) -> Self {
        Self {
            reference: reference(row.surah, row.ayah),
            surah: row.surah,
            ayah: row.ayah,
            verse: row.verse,
        }
    }
}

fn read_json<R: Read>(reader: R) -> Result<Vec<VerseRecord>> {
    let rows: Vec<VerseRow> =
        serde_json::from_reader(reader).map_err(|e| Error::operation("parse_corpus_json", e))?;
    Ok(rows.into_iter().map(VerseRecord::from).collect())
}

/// Column indices of the three required fields.
#[derive(Debug, Default)]
struct ColumnMap {
    surah: Option<usize>,
    ayah: Option<usize>,
    verse: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let mut map = Self::default();
        for (i, header) in headers.iter().enumerate() {
            match header.to_lowercase().as_str() {
                "surah" => map.surah = Some(i),
                "ayah" => map.ayah = Some(i),
                "translation" | "verse" | "text" => map.verse = Some(i),
                _ => {},
            }
        }

        if map.surah.is_none() || map.ayah.is_none() || map.verse.is_none() {
            return Err(Error::InvalidInput(
                "corpus CSV needs 'Surah', 'Ayah' and 'Translation' columns".to_string(),
            ));
        }
        Ok(map)
    }
}

fn read_csv<R: Read>(reader: R) -> Result<Vec<VerseRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::operation("read_corpus_headers", e))?
        .clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut verses = Vec::new();
    for (line, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| Error::operation("read_corpus_csv", e))?;
        let field = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or_default();

        let (Ok(surah), Ok(ayah)) = (field(columns.surah).parse(), field(columns.ayah).parse())
        else {
            tracing::debug!(line = line + 2, "Skipping corpus row with bad surah/ayah");
            continue;
        };
        verses.push(VerseRecord::from(VerseRow {
            surah,
            ayah,
            verse: field(columns.verse).to_string(),
        }));
    }

    Ok(verses)
}
