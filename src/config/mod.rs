//! Configuration management.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then `QURANQA_*` environment variables.
//!
//! # Environment Variables
//!
//! | Variable | Type | Default | Description |
//! |----------|------|---------|-------------|
//! | `QURANQA_DATA_FILE` | path | `qa_data.json` | Knowledge-base JSON file |
//! | `QURANQA_CORPUS_FILE` | path | unset | Verse corpus (CSV or JSON) |
//! | `QURANQA_MAX_RELATED` | usize | `3` | Suggestions per answer, capped at 3 |
//! | `QURANQA_MAX_ADDITIONAL_VERSES` | usize | unset (all) | Extra verses appended to corpus answers |
//! | `QURANQA_SEED` | u64 | unset | Seed for response-pool choices |
//! | `QURANQA_NEAR_DUPLICATE_THRESHOLD` | f64 | `0.8` | Stage 1 threshold |
//! | `QURANQA_FUZZY_THRESHOLD` | f64 | `0.5` | Stage 3 threshold |
//! | `QURANQA_LOG` | filter | `warn` | `tracing` env-filter directive |
//! | `QURANQA_LOG_FORMAT` | `pretty`/`json` | `pretty` | Log output format |
//! | `QURANQA_LOG_FILE` | path | unset | Append logs to this file |

mod thresholds;

pub use thresholds::MatchThresholds;

use crate::matching::patterns::MAX_RELATED;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration for quranqa.
#[derive(Debug, Clone)]
pub struct QaConfig {
    /// Path to the knowledge-base JSON file.
    pub data_file: PathBuf,
    /// Path to the optional verse corpus.
    pub corpus_file: Option<PathBuf>,
    /// Matcher thresholds and weights.
    pub matching: MatchThresholds,
    /// Maximum number of suggested follow-up questions, never above 3.
    pub max_related: usize,
    /// Cap on extra verses appended to a corpus answer (`None` = all).
    pub max_additional_verses: Option<usize>,
    /// Seed for response-pool choices (`None` = entropy).
    pub seed: Option<u64>,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Logging section of the configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    /// `pretty` or `json`.
    pub format: Option<String>,
    /// `tracing` env-filter directive.
    pub filter: Option<String>,
    /// Log file path.
    pub file: Option<String>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Knowledge-base path.
    pub data_file: Option<String>,
    /// Corpus path.
    pub corpus_file: Option<String>,
    /// Matcher section.
    pub matching: Option<MatchThresholds>,
    /// Suggestions per answer.
    pub max_related: Option<usize>,
    /// Extra verses cap.
    pub max_additional_verses: Option<usize>,
    /// RNG seed.
    pub seed: Option<u64>,
    /// Logging section.
    pub logging: Option<LoggingSettings>,
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("qa_data.json"),
            corpus_file: None,
            matching: MatchThresholds::default(),
            max_related: MAX_RELATED,
            max_additional_verses: None,
            seed: None,
            logging: LoggingSettings::default(),
        }
    }
}

/// Configured suggestion counts can lower the cap but not raise it.
fn clamp_related(requested: usize) -> usize {
    requested.min(MAX_RELATED)
}

impl QaConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::operation("read_config_file", e))?;

        let file: ConfigFile = toml::from_str(&contents)
            .map_err(|e| crate::Error::operation("parse_config_file", e))?;

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the platform config dir (`quranqa/config.toml`), then
    /// `~/.config/quranqa/config.toml`. Returns defaults if neither exists.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let candidates = [
            base_dirs.config_dir().join("quranqa").join("config.toml"),
            base_dirs
                .home_dir()
                .join(".config")
                .join("quranqa")
                .join("config.toml"),
        ];

        for candidate in candidates {
            if !candidate.exists() {
                continue;
            }
            match Self::load_from_file(&candidate) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %candidate.display(), error = %e, "Ignoring unreadable config file");
                },
            }
        }

        Self::default()
    }

    /// Applies `QURANQA_*` overrides from the process environment.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies `QURANQA_*` overrides from an arbitrary lookup.
    ///
    /// Unparseable values are ignored.
    #[must_use]
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("QURANQA_DATA_FILE") {
            self.data_file = PathBuf::from(v);
        }
        if let Some(v) = lookup("QURANQA_CORPUS_FILE") {
            self.corpus_file = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("QURANQA_MAX_RELATED").and_then(|v| v.parse().ok()) {
            self.max_related = clamp_related(v);
        }
        if let Some(v) = lookup("QURANQA_MAX_ADDITIONAL_VERSES").and_then(|v| v.parse().ok()) {
            self.max_additional_verses = Some(v);
        }
        if let Some(v) = lookup("QURANQA_SEED").and_then(|v| v.parse().ok()) {
            self.seed = Some(v);
        }
        if let Some(v) = lookup("QURANQA_NEAR_DUPLICATE_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.matching.near_duplicate = v;
        }
        if let Some(v) = lookup("QURANQA_FUZZY_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.matching.fuzzy = v;
        }
        if let Some(v) = lookup("QURANQA_LOG") {
            self.logging.filter = Some(v);
        }
        if let Some(v) = lookup("QURANQA_LOG_FORMAT") {
            self.logging.format = Some(v);
        }
        if let Some(v) = lookup("QURANQA_LOG_FILE") {
            self.logging.file = Some(v);
        }
        self
    }

    /// Converts a `ConfigFile` to `QaConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(data_file) = file.data_file {
            config.data_file = PathBuf::from(data_file);
        }
        if let Some(corpus_file) = file.corpus_file {
            config.corpus_file = Some(PathBuf::from(corpus_file));
        }
        if let Some(matching) = file.matching {
            config.matching = matching;
        }
        if let Some(max_related) = file.max_related {
            config.max_related = clamp_related(max_related);
        }
        config.max_additional_verses = file.max_additional_verses;
        config.seed = file.seed;
        if let Some(logging) = file.logging {
            config.logging = logging;
        }

        config
    }

    /// Sets the knowledge-base path.
    #[must_use]
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// Sets the corpus path.
    #[must_use]
    pub fn with_corpus_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.corpus_file = Some(path.into());
        self
    }

    /// Sets the RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults_match_matcher_constants() {
        let config = QaConfig::default();
        assert_eq!(config.max_related, 3);
        assert!(config.corpus_file.is_none());
        assert!(config.max_additional_verses.is_none());
        assert!((config.matching.near_duplicate - 0.8).abs() < f64::EPSILON);
        assert!((config.matching.fuzzy - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
data_file = "data/qa.json"
corpus_file = "data/verses.csv"
max_related = 2
seed = 7

[matching]
fuzzy = 0.6

[logging]
format = "json"
"#
        )
        .unwrap();

        let config = QaConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.data_file, PathBuf::from("data/qa.json"));
        assert_eq!(config.corpus_file, Some(PathBuf::from("data/verses.csv")));
        assert_eq!(config.max_related, 2);
        assert_eq!(config.seed, Some(7));
        assert!((config.matching.fuzzy - 0.6).abs() < f64::EPSILON);
        // unspecified matching keys keep their defaults
        assert!((config.matching.near_duplicate - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.logging.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let result = QaConfig::load_from_file(Path::new("/nonexistent/quranqa.toml"));
        assert!(matches!(
            result,
            Err(crate::Error::OperationFailed { ref operation, .. }) if operation == "read_config_file"
        ));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("QURANQA_DATA_FILE", "kb.json"),
            ("QURANQA_SEED", "42"),
            ("QURANQA_MAX_RELATED", "not-a-number"),
            ("QURANQA_FUZZY_THRESHOLD", "0.55"),
        ]
        .into_iter()
        .collect();

        let config = QaConfig::default()
            .with_overrides_from(|key| env.get(key).map(ToString::to_string));

        assert_eq!(config.data_file, PathBuf::from("kb.json"));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_related, 3);
        assert!((config.matching.fuzzy - 0.55).abs() < f64::EPSILON);
    }

    #[test]
    fn test_max_related_lowers_but_never_raises_cap() {
        let config = QaConfig::default()
            .with_overrides_from(|key| (key == "QURANQA_MAX_RELATED").then(|| "10".to_string()));
        assert_eq!(config.max_related, 3);

        let config = QaConfig::default()
            .with_overrides_from(|key| (key == "QURANQA_MAX_RELATED").then(|| "1".to_string()));
        assert_eq!(config.max_related, 1);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_related = 10").unwrap();
        let config = QaConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.max_related, 3);
    }
}
