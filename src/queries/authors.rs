// Author-oriented queries: who repeats what, who mentions what, who was first.
//
// All of these read the raw documents rather than the matrix. Author
// identifiers always come from `Document::author`, never from ad hoc splits.

use serde::Serialize;

use crate::corpus::Corpus;
use crate::tfidf::count_occurrences;

/// Most repeated terms in the first document whose file name contains
/// `author`. Empty when no file matches or the matching file is empty.
pub fn most_repeated_by(corpus: &Corpus, author: &str) -> Vec<String> {
    corpus
        .documents()
        .iter()
        .find(|doc| doc.name.contains(author))
        .map(|doc| count_occurrences(&doc.text).most_frequent())
        .unwrap_or_default()
}

/// Mention count of one term for one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorCount {
    pub author: String,
    pub count: usize,
}

/// Who mentions a term, and who mentions it most.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Mentions {
    pub term: String,
    /// Authors with at least one mention, in order of first appearance.
    /// Counts are summed over all of an author's documents.
    pub authors: Vec<AuthorCount>,
    /// Authors of the document(s) with the highest single-document count,
    /// deduplicated. Empty when nobody mentions it.
    pub most: Vec<String>,
}

impl Mentions {
    pub fn author_names(&self) -> Vec<&str> {
        self.authors.iter().map(|a| a.author.as_str()).collect()
    }
}

/// Count mentions of `term` (as a whole token) per author.
///
/// The most-mentioning author is decided document by document: a single
/// speech using the term three times outranks three speeches using it once.
pub fn mentions_of(corpus: &Corpus, term: &str, marker: &str) -> Mentions {
    let mut authors: Vec<AuthorCount> = Vec::new();
    let mut per_document: Vec<(String, usize)> = Vec::new();

    for doc in corpus.documents() {
        let count = count_occurrences(&doc.text).count(term);
        if count == 0 {
            continue;
        }
        let author = doc.author(marker);
        match authors.iter_mut().find(|a| a.author == author) {
            Some(existing) => existing.count += count,
            None => authors.push(AuthorCount {
                author: author.clone(),
                count,
            }),
        }
        per_document.push((author, count));
    }

    // No mentions means a maximum of 0, which no mentioning document can have.
    let max = per_document.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let mut most: Vec<String> = Vec::new();
    for (author, count) in per_document {
        if max > 0 && count == max && !most.contains(&author) {
            most.push(author);
        }
    }

    Mentions {
        term: term.to_string(),
        authors,
        most,
    }
}

/// Author of the first document, in file-name order, whose raw text contains
/// any keyword as a plain substring (so `climat` also matches `climatique`).
/// `None` when no document matches.
pub fn first_to_mention<S: AsRef<str>>(corpus: &Corpus, keywords: &[S], marker: &str) -> Option<String> {
    let mut documents: Vec<_> = corpus.documents().iter().collect();
    documents.sort_by(|a, b| a.name.cmp(&b.name));

    documents
        .into_iter()
        .find(|doc| keywords.iter().any(|kw| doc.text.contains(kw.as_ref())))
        .map(|doc| doc.author(marker))
}
