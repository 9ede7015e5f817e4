use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("input folder not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to read input folder {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("there are no XML files in the folder {path}")]
    NoDocuments { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, IngestError>;
