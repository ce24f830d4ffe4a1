// Corpus preparation: turns raw speeches into the normalized directory the
// analysis reads.
//
// Each file is copied under the same name into the output directory after
// lowercasing, punctuation blanking and (optionally) stop-word removal. The
// analysis core never calls into this module; it only sees the result.

pub mod normalize;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use stop_words::{get, LANGUAGE};
use tracing::{info, warn};

use crate::corpus::naming::author_id;
use normalize::{normalize_text, strip_stop_words};

/// Errors raised while preparing the normalized corpus.
#[derive(thiserror::Error, Debug)]
pub enum PrepareError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stop-word file was configured but is not there.
    #[error("stop-word file {} not found", path.display())]
    MissingStopWords { path: PathBuf },
}

impl PrepareError {
    fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PrepareError::Io {
            path: path.into(),
            source,
        }
    }
}

/// How to prepare the corpus.
#[derive(Debug, Clone)]
pub struct PrepareOptions {
    /// Marker preceding the author in file names.
    pub name_marker: String,
    /// Remove stop words from the normalized text.
    pub strip_stop_words: bool,
    /// Stop-word file (one word per line). `None` uses the built-in French list.
    pub stop_words_path: Option<PathBuf>,
}

/// What a preparation run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrepareReport {
    pub documents: usize,
    /// Distinct author identifiers, in file-name order of first appearance.
    pub authors: Vec<String>,
}

/// Load the stop-word set from `path`, or the built-in French list.
pub fn load_stop_words(path: Option<&Path>) -> Result<HashSet<String>, PrepareError> {
    let words: Vec<String> = match path {
        Some(path) => {
            if !path.is_file() {
                return Err(PrepareError::MissingStopWords {
                    path: path.to_path_buf(),
                });
            }
            fs::read_to_string(path)
                .map_err(|e| PrepareError::io(path, e))?
                .lines()
                .map(str::to_string)
                .collect()
        }
        None => get(LANGUAGE::French),
    };

    Ok(words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect())
}

/// Normalize every regular file in `source` into `out`.
pub fn run(source: &Path, out: &Path, options: &PrepareOptions) -> Result<PrepareReport, PrepareError> {
    let stop_words = if options.strip_stop_words {
        Some(load_stop_words(options.stop_words_path.as_deref())?)
    } else {
        None
    };

    fs::create_dir_all(out).map_err(|e| PrepareError::io(out, e))?;

    let mut files: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(source).map_err(|e| PrepareError::io(source, e))? {
        let entry = entry.map_err(|e| PrepareError::io(source, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push((entry.file_name().to_string_lossy().into_owned(), path));
        }
    }
    files.sort();

    if files.is_empty() {
        warn!(source = %source.display(), "No speeches to prepare");
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Cleaning [{bar:30}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut authors: Vec<String> = Vec::new();
    for (name, path) in &files {
        match author_id(name, &options.name_marker) {
            Some(author) => {
                if !authors.contains(&author) {
                    authors.push(author);
                }
            }
            None => warn!(file = %name, marker = %options.name_marker, "File name has no author identifier"),
        }

        let raw = fs::read_to_string(path).map_err(|e| PrepareError::io(path, e))?;
        let mut text = normalize_text(&raw);
        if let Some(stop_words) = &stop_words {
            text = strip_stop_words(&text, stop_words);
        }

        let target = out.join(name);
        fs::write(&target, text).map_err(|e| PrepareError::io(&target, e))?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        documents = files.len(),
        authors = authors.len(),
        out = %out.display(),
        "Prepared corpus"
    );

    Ok(PrepareReport {
        documents: files.len(),
        authors,
    })
}
