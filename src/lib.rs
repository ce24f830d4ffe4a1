// speechscope: TF-IDF analysis of speech transcripts
//
// This is the library root. `corpus`, `tfidf` and `queries` form the analysis
// core; `prepare`, `config` and `output` are the glue the CLI puts around it.

pub mod config;
pub mod corpus;
pub mod error;
pub mod output;
pub mod prepare;
pub mod queries;
pub mod tfidf;

pub use error::{CorpusError, CorpusResult};
