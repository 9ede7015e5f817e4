//! Input file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists all XML files directly inside a directory.
///
/// Returns files sorted by filename. Subdirectories are not searched.
pub fn list_xml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        // Check for .xml extension (case-insensitive)
        let is_xml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));

        if is_xml {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Identifier written to the File Name column: the path's basename.
pub fn file_identifier(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
