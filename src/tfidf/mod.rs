// TF-IDF pipeline: tokenize, count, weight.
//
// tokenizer -> stats (TF per document, DF across the corpus) -> matrix.

pub mod matrix;
pub mod stats;
pub mod tokenizer;

pub use matrix::TfIdfMatrix;
pub use stats::{count_occurrences, DocumentFrequency, DocumentStats};
pub use tokenizer::tokenize;
