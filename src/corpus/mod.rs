// Corpus loading: reads a directory of normalized speeches into memory.
//
// Every file is read to completion up front, so the statistics and queries
// work on one consistent snapshot and never touch the filesystem themselves.

pub mod naming;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{CorpusError, CorpusResult};

/// One normalized document: its file name and full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Author identifier for this document, falling back to the file name
    /// when it doesn't follow the naming convention.
    pub fn author(&self, marker: &str) -> String {
        naming::author_id(&self.name, marker).unwrap_or_else(|| {
            warn!(file = %self.name, marker, "File name has no author identifier");
            self.name.clone()
        })
    }
}

/// An immutable, ordered set of documents.
///
/// Documents are sorted by file name, which fixes the column order of the
/// TF-IDF matrix and the scan order of the queries.
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
    documents: Vec<Document>,
}

impl Corpus {
    /// Read every regular file in `dir`.
    ///
    /// Fails with `CorpusError::Io` if the directory or any file can't be read
    /// as UTF-8, and with `CorpusError::EmptyCorpus` if there are no files.
    pub fn load(dir: impl AsRef<Path>) -> CorpusResult<Self> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|e| CorpusError::io(dir, e))?;

        let mut documents = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CorpusError::io(dir, e))?;
            let path = entry.path();
            if !path.is_file() {
                debug!(path = %path.display(), "Skipping non-file entry");
                continue;
            }
            let text = fs::read_to_string(&path).map_err(|e| CorpusError::io(&path, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            documents.push(Document { name, text });
        }

        let corpus = Self::from_documents(dir, documents)?;
        debug!(
            dir = %dir.display(),
            documents = corpus.len(),
            "Loaded corpus"
        );
        Ok(corpus)
    }

    /// Build a corpus from documents already in memory.
    pub fn from_documents(root: impl Into<PathBuf>, mut documents: Vec<Document>) -> CorpusResult<Self> {
        let root = root.into();
        if documents.is_empty() {
            return Err(CorpusError::EmptyCorpus { path: root });
        }
        documents.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self { root, documents })
    }

    /// Convenience constructor from `(file name, text)` pairs.
    pub fn from_texts<N, T>(texts: impl IntoIterator<Item = (N, T)>) -> CorpusResult<Self>
    where
        N: Into<String>,
        T: Into<String>,
    {
        let documents = texts
            .into_iter()
            .map(|(name, text)| Document::new(name, text))
            .collect();
        Self::from_documents(PathBuf::new(), documents)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// File names in corpus order.
    pub fn names(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.name.clone()).collect()
    }
}
