// Words every speaker used.

use crate::corpus::Corpus;
use crate::tfidf::TfIdfMatrix;

/// Vocabulary terms found as `" term "` in the raw text of every document.
///
/// The padding requires whitespace on both sides, so `nation` does not match
/// inside `nationale`. It also means a term sitting at the very start or end
/// of a file, with no surrounding blank, is not seen there. That boundary miss
/// is kept as-is.
pub fn common_words(corpus: &Corpus, matrix: &TfIdfMatrix) -> Vec<String> {
    matrix
        .terms()
        .iter()
        .filter(|term| {
            let padded = format!(" {term} ");
            corpus.documents().iter().all(|doc| doc.text.contains(&padded))
        })
        .cloned()
        .collect()
}
