//! Document loading.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use xtract_model::{DocumentContent, DocumentSet, SourceDocument};

use crate::discovery::{file_identifier, list_xml_files};
use crate::error::{IngestError, Result};

/// Discover and load every XML file in `dir`.
///
/// # Errors
///
/// Fails when the folder cannot be listed or holds no XML files.
pub fn load_folder(dir: &Path) -> Result<DocumentSet> {
    let files = list_xml_files(dir)?;
    info!(folder = %dir.display(), file_count = files.len(), "input discovered");
    load_documents(&files).ok_or_else(|| IngestError::NoDocuments {
        path: dir.to_path_buf(),
    })
}

/// Read each file fully into memory, keeping input order.
///
/// A file that cannot be read is kept as [`DocumentContent::Unreadable`] so
/// its row still appears in the report. Returns `None` for an empty list.
pub fn load_documents(files: &[PathBuf]) -> Option<DocumentSet> {
    let documents = files
        .iter()
        .map(|path| {
            let content = match std::fs::read_to_string(path) {
                Ok(text) => {
                    debug!(path = %path.display(), bytes = text.len(), "document loaded");
                    DocumentContent::Loaded(text)
                }
                Err(error) => {
                    warn!(path = %path.display(), error = %error, "document unreadable");
                    DocumentContent::Unreadable {
                        reason: error.to_string(),
                    }
                }
            };
            SourceDocument {
                identifier: file_identifier(path),
                path: path.clone(),
                content,
            }
        })
        .collect();
    DocumentSet::new(documents)
}
