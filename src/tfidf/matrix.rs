// Dense TF-IDF matrix: one row per term, one column per document.
//
// Rows follow the lexicographic order of the vocabulary and columns follow
// corpus order, so rebuilding from the same directory gives the same indices
// and the same values. The matrix is derived data: it is built in one pass
// and never mutated afterwards.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use tracing::debug;

use super::stats::{count_occurrences, DocumentFrequency, DocumentStats};
use crate::corpus::Corpus;
use crate::error::CorpusResult;

#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfMatrix {
    /// Term → row index.
    term_index: HashMap<String, usize>,
    /// Row order, sorted.
    terms: Vec<String>,
    /// `rows[term][document]` = TF × IDF.
    rows: Vec<Vec<f64>>,
    /// Column order (file names).
    documents: Vec<String>,
}

impl TfIdfMatrix {
    /// Load `dir` and build its matrix.
    pub fn build(dir: impl AsRef<Path>) -> CorpusResult<Self> {
        let corpus = Corpus::load(dir)?;
        Self::from_corpus(&corpus)
    }

    /// Build the matrix for an already loaded corpus.
    pub fn from_corpus(corpus: &Corpus) -> CorpusResult<Self> {
        let df = DocumentFrequency::from_corpus(corpus)?;
        let stats: Vec<DocumentStats> = corpus
            .documents()
            .iter()
            .map(|doc| count_occurrences(&doc.text))
            .collect();
        Ok(Self::from_stats(corpus.names(), &stats, &df))
    }

    /// Combine per-document counts and document frequencies.
    ///
    /// `documents` and `stats` are parallel: `stats[i]` holds the counts of
    /// column `i`. Terms with no IDF (absent from `df`) are skipped.
    pub fn from_stats(documents: Vec<String>, stats: &[DocumentStats], df: &DocumentFrequency) -> Self {
        let vocabulary: BTreeSet<&str> = stats.iter().flat_map(|s| s.terms()).collect();
        let terms: Vec<String> = vocabulary.into_iter().map(str::to_string).collect();
        let term_index: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(row, term)| (term.clone(), row))
            .collect();

        let mut rows = vec![vec![0.0; documents.len()]; terms.len()];
        for (col, doc_stats) in stats.iter().enumerate() {
            for (term, count) in doc_stats.iter() {
                if count == 0 {
                    continue;
                }
                let Some(idf) = df.idf(term) else {
                    continue;
                };
                if let Some(&row) = term_index.get(term) {
                    rows[row][col] = count as f64 * idf;
                }
            }
        }

        debug!(
            terms = terms.len(),
            documents = documents.len(),
            "Built TF-IDF matrix"
        );

        Self {
            term_index,
            terms,
            rows,
            documents,
        }
    }

    /// Sorted vocabulary (row order).
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// File names (column order).
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn term_index(&self) -> &HashMap<String, usize> {
        &self.term_index
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Row of scores for `term` across all documents.
    pub fn row(&self, term: &str) -> Option<&[f64]> {
        self.term_index.get(term).map(|&i| self.rows[i].as_slice())
    }

    /// Column index of the document named `name`.
    pub fn column_of(&self, name: &str) -> Option<usize> {
        self.documents.iter().position(|d| d == name)
    }

    /// Score of `term` in column `column`. Unknown terms or columns score 0.
    pub fn score(&self, term: &str, column: usize) -> f64 {
        self.row(term)
            .and_then(|row| row.get(column).copied())
            .unwrap_or(0.0)
    }

    /// `(term, row)` pairs in term order.
    pub fn iter_rows(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.terms
            .iter()
            .zip(&self.rows)
            .map(|(term, row)| (term.as_str(), row.as_slice()))
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}
