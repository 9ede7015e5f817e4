use serde::{Deserialize, Serialize};

/// Cell value written when a column cannot be resolved for a document.
pub const ERROR_SENTINEL: &str = "Error!";

/// One output line: the file identifier followed by one value per column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub values: Vec<String>,
    /// Legend column indexes (File Name excluded) that fell back to
    /// [`ERROR_SENTINEL`].
    pub failed_columns: Vec<usize>,
}

impl Row {
    pub fn identifier(&self) -> &str {
        self.values.first().map(String::as_str).unwrap_or_default()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed_columns.is_empty()
    }
}

/// Headers plus one row per input document, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Report {
    pub fn failed_cell_count(&self) -> usize {
        self.rows.iter().map(|row| row.failed_columns.len()).sum()
    }

    pub fn has_failures(&self) -> bool {
        self.rows.iter().any(Row::has_failures)
    }
}
