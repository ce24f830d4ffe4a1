// Term statistics: per-document counts (TF) and corpus document frequency (DF).

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::debug;

use super::tokenizer::tokenize;
use crate::corpus::Corpus;
use crate::error::{CorpusError, CorpusResult};

/// Occurrence count of every term in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStats {
    counts: HashMap<String, usize>,
}

/// Tokenize `text` and count each term. Empty text gives empty stats.
pub fn count_occurrences(text: &str) -> DocumentStats {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokenize(text) {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    DocumentStats { counts }
}

impl DocumentStats {
    /// Count for `term`, 0 when absent.
    pub fn count(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Total number of tokens (sum of all counts).
    pub fn total_tokens(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Highest count of any term, `None` for an empty document.
    pub fn max_count(&self) -> Option<usize> {
        self.counts.values().copied().max()
    }

    /// Every term tied for the highest count, sorted.
    pub fn most_frequent(&self) -> Vec<String> {
        let Some(max) = self.max_count() else {
            return Vec::new();
        };
        let mut terms: Vec<String> = self
            .counts
            .iter()
            .filter(|(_, count)| **count == max)
            .map(|(term, _)| term.clone())
            .collect();
        terms.sort();
        terms
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(term, &count)| (term.as_str(), count))
    }
}

/// Number of distinct documents containing each term, plus the corpus size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFrequency {
    counts: HashMap<String, usize>,
    documents: usize,
}

impl DocumentFrequency {
    /// Load `dir` and compute document frequencies over it.
    pub fn from_dir(dir: impl AsRef<Path>) -> CorpusResult<Self> {
        let corpus = Corpus::load(dir)?;
        Self::from_corpus(&corpus)
    }

    /// Compute document frequencies over an already loaded corpus.
    ///
    /// Each document contributes its set of distinct terms, so a term repeated
    /// a hundred times in one speech still counts once.
    pub fn from_corpus(corpus: &Corpus) -> CorpusResult<Self> {
        if corpus.is_empty() {
            return Err(CorpusError::EmptyCorpus {
                path: corpus.root().to_path_buf(),
            });
        }

        let mut counts: HashMap<String, usize> = HashMap::new();
        for doc in corpus.documents() {
            let distinct: HashSet<&str> = tokenize(&doc.text).collect();
            for term in distinct {
                *counts.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        debug!(
            documents = corpus.len(),
            terms = counts.len(),
            "Computed document frequencies"
        );

        Ok(Self {
            counts,
            documents: corpus.len(),
        })
    }

    /// Number of documents containing `term`, 0 when absent.
    pub fn frequency(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of documents in the corpus.
    pub fn document_count(&self) -> usize {
        self.documents
    }

    /// `log10(N / df)` for terms present in the corpus, `None` otherwise.
    pub fn idf(&self, term: &str) -> Option<f64> {
        let df = *self.counts.get(term)?;
        if df == 0 {
            return None;
        }
        Some((self.documents as f64 / df as f64).log10())
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(term, &df)| (term.as_str(), df))
    }
}
