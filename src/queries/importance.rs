// Matrix-wide importance queries.

use crate::tfidf::TfIdfMatrix;

/// Terms whose score is zero in every document.
///
/// A row vanishes when the term occurs in every document (IDF = 0); absent
/// cells are zero by construction. Returned in term order.
pub fn least_important_words(matrix: &TfIdfMatrix) -> Vec<String> {
    matrix
        .iter_rows()
        .filter(|(_, row)| row.iter().all(|&score| score == 0.0))
        .map(|(term, _)| term.to_string())
        .collect()
}

/// Terms whose best score in any document equals the best score overall.
///
/// Rows are scanned in term order. A strictly higher row maximum resets the
/// result, an equal one is appended, so ties come back in term order.
pub fn highest_tfidf_words(matrix: &TfIdfMatrix) -> Vec<String> {
    let mut max_value = -1.0_f64;
    let mut max_words = Vec::new();

    for (term, row) in matrix.iter_rows() {
        let row_max = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if row_max > max_value {
            max_value = row_max;
            max_words = vec![term.to_string()];
        } else if row_max == max_value {
            max_words.push(term.to_string());
        }
    }

    max_words
}
