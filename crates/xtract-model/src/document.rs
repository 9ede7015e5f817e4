//! Input documents handed to the report assembler.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Raw content of one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentContent {
    Loaded(String),
    /// The file could not be read; every column of its row fails.
    Unreadable { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Basename of `path`, written to the File Name column.
    pub identifier: String,
    pub path: PathBuf,
    pub content: DocumentContent,
}

impl SourceDocument {
    pub fn loaded(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        let identifier = identifier.into();
        Self {
            path: PathBuf::from(&identifier),
            identifier,
            content: DocumentContent::Loaded(text.into()),
        }
    }
}

/// A non-empty, ordered set of input documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSet {
    documents: Vec<SourceDocument>,
}

impl DocumentSet {
    /// Returns `None` for an empty input; a run has nothing to report then.
    pub fn new(documents: Vec<SourceDocument>) -> Option<Self> {
        if documents.is_empty() {
            None
        } else {
            Some(Self { documents })
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SourceDocument> {
        self.documents.iter()
    }
}

impl<'a> IntoIterator for &'a DocumentSet {
    type Item = &'a SourceDocument;
    type IntoIter = std::slice::Iter<'a, SourceDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
