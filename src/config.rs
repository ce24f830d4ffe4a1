use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::queries::QuerySettings;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default matching the French presidential speech corpus, and
/// CLI flags override what is read here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw speeches, as downloaded (SPEECHSCOPE_SOURCE_DIR)
    pub source_dir: PathBuf,
    /// Normalized speeches the analysis reads (SPEECHSCOPE_CORPUS_DIR)
    pub corpus_dir: PathBuf,
    /// One stop word per line, used by `prepare --strip-stop-words`
    /// (SPEECHSCOPE_STOP_WORDS). Falls back to the built-in French list.
    pub stop_words_path: Option<PathBuf>,
    pub queries: QuerySettings,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let defaults = QuerySettings::default();

        let keywords = match env::var("SPEECHSCOPE_KEYWORDS") {
            Ok(raw) => parse_keywords(&raw),
            Err(_) => defaults.keywords,
        };
        if keywords.is_empty() {
            anyhow::bail!("SPEECHSCOPE_KEYWORDS is set but contains no keywords");
        }

        Ok(Self {
            source_dir: env::var("SPEECHSCOPE_SOURCE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("speeches")),
            corpus_dir: env::var("SPEECHSCOPE_CORPUS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("cleaned")),
            stop_words_path: env::var("SPEECHSCOPE_STOP_WORDS").ok().map(PathBuf::from),
            queries: QuerySettings {
                name_marker: env::var("SPEECHSCOPE_NAME_MARKER").unwrap_or(defaults.name_marker),
                focus_author: env::var("SPEECHSCOPE_FOCUS_AUTHOR").unwrap_or(defaults.focus_author),
                target_term: env::var("SPEECHSCOPE_TARGET_TERM").unwrap_or(defaults.target_term),
                keywords,
            },
        })
    }
}

/// Split a comma-separated keyword list, dropping blanks.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
