//! Structured logging configuration.

use crate::config::LoggingSettings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Default filter when nothing else is configured.
const DEFAULT_FILTER: &str = "warn";
/// Filter used by `--verbose`.
const VERBOSE_FILTER: &str = "quranqa=debug,info";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parses a format name; anything but `json` is pretty.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// Event filter.
    pub filter: EnvFilter,
    /// Log file; `None` writes to stderr.
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Builds logging configuration from config settings.
    ///
    /// The filter is taken from the settings, then `RUST_LOG`, then the
    /// verbose flag, then defaults to `warn`. An unparseable directive falls
    /// back to the default.
    #[must_use]
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Self {
        Self::resolve(settings, verbose, std::env::var("RUST_LOG").ok())
    }

    fn resolve(settings: Option<&LoggingSettings>, verbose: bool, rust_log: Option<String>) -> Self {
        let format = settings
            .and_then(|s| s.format.as_deref())
            .map(LogFormat::parse)
            .unwrap_or_default();

        let directive = settings
            .and_then(|s| s.filter.clone())
            .or(rust_log)
            .unwrap_or_else(|| {
                if verbose {
                    VERBOSE_FILTER.to_string()
                } else {
                    DEFAULT_FILTER.to_string()
                }
            });
        let filter =
            EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let file = settings
            .and_then(|s| s.file.as_deref())
            .filter(|f| !f.trim().is_empty())
            .map(PathBuf::from);

        Self {
            format,
            filter,
            file,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::resolve(None, false, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("other"), LogFormat::Pretty);
    }

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.file.is_none());
        assert_eq!(config.filter.to_string(), "warn");
    }

    #[test]
    fn test_settings_take_precedence() {
        let settings = LoggingSettings {
            format: Some("json".to_string()),
            filter: Some("quranqa=trace".to_string()),
            file: Some("/tmp/quranqa.log".to_string()),
        };
        let config = LoggingConfig::resolve(Some(&settings), true, Some("error".to_string()));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.filter.to_string(), "quranqa=trace");
        assert_eq!(config.file, Some(PathBuf::from("/tmp/quranqa.log")));
    }

    #[test]
    fn test_verbose_and_rust_log() {
        let verbose = LoggingConfig::resolve(None, true, None);
        assert!(verbose.filter.to_string().contains("quranqa=debug"));

        let env = LoggingConfig::resolve(None, true, Some("error".to_string()));
        assert_eq!(env.filter.to_string(), "error");
    }
}
