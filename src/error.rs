// Error taxonomy for the analysis core.
//
// Only two things can go wrong while building the matrix: a file or directory
// can't be read, or there is nothing to read. "Nothing found" answers from the
// queries are values, not errors, so they never show up here.

use std::path::PathBuf;

/// Errors raised while loading a corpus or building statistics over it.
#[derive(thiserror::Error, Debug)]
pub enum CorpusError {
    /// The directory or one of its files could not be read (including files
    /// that are not valid UTF-8).
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory holds no documents, so IDF is undefined.
    #[error("no documents found in {}", path.display())]
    EmptyCorpus { path: PathBuf },
}

impl CorpusError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CorpusError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type CorpusResult<T> = Result<T, CorpusError>;
