//! Per-document row building with per-column failure isolation.

use roxmltree::Document;
use tracing::{trace, warn};
use xtract_model::{ERROR_SENTINEL, Legend, Row};

use crate::resolve::resolve;

/// Resolve every legend column against one document.
///
/// The first value is `file_identifier`. A column that fails to resolve
/// gets [`ERROR_SENTINEL`] and a warning; the remaining columns are still
/// resolved.
pub fn build_row(
    document: &Document<'_>,
    legend: &Legend,
    file_identifier: &str,
    namespace: &str,
) -> Row {
    let root = document.root_element();
    let mut values = Vec::with_capacity(legend.len() + 1);
    let mut failed_columns = Vec::new();
    values.push(file_identifier.to_string());

    for (idx, column) in legend.columns.iter().enumerate() {
        match resolve(root, &column.path, namespace) {
            Ok(value) => {
                trace!(file = %file_identifier, column = %column.header, "column resolved");
                values.push(value);
            }
            Err(error) => {
                warn!(
                    file = %file_identifier,
                    column = %column.header,
                    path = %column.path_display(),
                    error = %error,
                    "failed to retrieve column"
                );
                values.push(ERROR_SENTINEL.to_string());
                failed_columns.push(idx);
            }
        }
    }

    Row {
        values,
        failed_columns,
    }
}

/// Row for a document that could not be loaded: every column fails.
pub fn failed_row(legend: &Legend, file_identifier: &str) -> Row {
    let mut values = Vec::with_capacity(legend.len() + 1);
    values.push(file_identifier.to_string());
    values.extend(std::iter::repeat_n(ERROR_SENTINEL.to_string(), legend.len()));
    Row {
        values,
        failed_columns: (0..legend.len()).collect(),
    }
}
