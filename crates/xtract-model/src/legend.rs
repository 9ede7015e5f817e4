//! Legend: the ordered output columns of a run.

use serde::{Deserialize, Serialize};

use crate::segment::{PathSegment, format_path};

/// Header of the implicit first column holding each document's identifier.
pub const FILE_NAME_HEADER: &str = "File Name";

/// One output column and the path resolving its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub header: String,
    pub path: Vec<PathSegment>,
}

impl Column {
    /// Path rendered from the raw legend tokens, for diagnostics.
    pub fn path_display(&self) -> String {
        format_path(&self.path)
    }
}

/// Columns in legend-file order.
///
/// Does not contain the implicit File Name column; see [`Legend::headers`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    pub columns: Vec<Column>,
}

impl Legend {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Output headers with File Name first.
    pub fn headers(&self) -> Vec<String> {
        std::iter::once(FILE_NAME_HEADER.to_string())
            .chain(self.columns.iter().map(|column| column.header.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
