// Analytical queries over a loaded corpus and its TF-IDF matrix.
//
// Each query is a pure function. `Analysis` bundles one corpus snapshot with
// its matrix so that several queries can share a single build; callers create
// a fresh one per invocation.

pub mod authors;
pub mod common;
pub mod importance;

use std::path::Path;

use serde::Serialize;

use crate::corpus::Corpus;
use crate::error::CorpusResult;
use crate::tfidf::TfIdfMatrix;

pub use authors::{first_to_mention, mentions_of, most_repeated_by, AuthorCount, Mentions};
pub use common::common_words;
pub use importance::{highest_tfidf_words, least_important_words};

/// Fixed parameters of the author-oriented queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySettings {
    /// Substring that precedes the author in every file name.
    pub name_marker: String,
    /// File-name substring selecting the author for `most_repeated`.
    pub focus_author: String,
    /// Term counted by `mentions`.
    pub target_term: String,
    /// Substrings looked for by `first_mention`.
    pub keywords: Vec<String>,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            name_marker: "Nomination_".to_string(),
            focus_author: "Chirac".to_string(),
            target_term: "nation".to_string(),
            keywords: vec!["climat".to_string(), "ecologie".to_string()],
        }
    }
}

/// Every query answer for one corpus, ready for display or JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub documents: usize,
    pub terms: usize,
    pub least_important: Vec<String>,
    pub highest_tfidf: Vec<String>,
    pub focus_author: String,
    pub most_repeated: Vec<String>,
    pub mentions: Mentions,
    pub keywords: Vec<String>,
    pub first_mention: Option<String>,
    pub common: Vec<String>,
}

/// A corpus snapshot and the matrix built from it.
#[derive(Debug, Clone)]
pub struct Analysis {
    corpus: Corpus,
    matrix: TfIdfMatrix,
}

impl Analysis {
    /// Load `dir` and build its matrix.
    pub fn load(dir: impl AsRef<Path>) -> CorpusResult<Self> {
        Self::from_corpus(Corpus::load(dir)?)
    }

    pub fn from_corpus(corpus: Corpus) -> CorpusResult<Self> {
        let matrix = TfIdfMatrix::from_corpus(&corpus)?;
        Ok(Self { corpus, matrix })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn matrix(&self) -> &TfIdfMatrix {
        &self.matrix
    }

    pub fn least_important(&self) -> Vec<String> {
        least_important_words(&self.matrix)
    }

    pub fn highest_tfidf(&self) -> Vec<String> {
        highest_tfidf_words(&self.matrix)
    }

    pub fn most_repeated(&self, author: &str) -> Vec<String> {
        most_repeated_by(&self.corpus, author)
    }

    pub fn mentions(&self, term: &str, marker: &str) -> Mentions {
        mentions_of(&self.corpus, term, marker)
    }

    pub fn first_mention<S: AsRef<str>>(&self, keywords: &[S], marker: &str) -> Option<String> {
        first_to_mention(&self.corpus, keywords, marker)
    }

    pub fn common(&self) -> Vec<String> {
        common_words(&self.corpus, &self.matrix)
    }

    /// Run all six queries against this snapshot.
    pub fn report(&self, settings: &QuerySettings) -> Report {
        Report {
            documents: self.matrix.document_count(),
            terms: self.matrix.term_count(),
            least_important: self.least_important(),
            highest_tfidf: self.highest_tfidf(),
            focus_author: settings.focus_author.clone(),
            most_repeated: self.most_repeated(&settings.focus_author),
            mentions: self.mentions(&settings.target_term, &settings.name_marker),
            keywords: settings.keywords.clone(),
            first_mention: self.first_mention(settings.keywords.as_slice(), &settings.name_marker),
            common: self.common(),
        }
    }
}
