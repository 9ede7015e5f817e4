//! Legend file loading.

use std::path::Path;

use tracing::{debug, warn};
use xtract_model::{Column, Legend, LegendError};

use crate::token::parse_token;

/// Read and parse a legend file.
///
/// # Errors
///
/// Returns [`LegendError::Read`] when the file cannot be read, or the first
/// token error annotated with its line number.
pub fn load_legend_file(path: &Path) -> Result<Legend, LegendError> {
    let text = std::fs::read_to_string(path).map_err(|e| LegendError::read(path, e))?;
    let legend = parse_legend(&text)?;
    debug!(
        legend = %path.display(),
        columns = legend.len(),
        "legend loaded"
    );
    Ok(legend)
}

pub fn parse_legend(text: &str) -> Result<Legend, LegendError> {
    load_legend(text.lines())
}

/// Build a legend from its lines.
///
/// Each line is `<Header> <token> <token> ...`, split on single spaces.
/// A blank or whitespace-only line yields a column with an empty header.
/// A column without tokens has an empty path, which fails to resolve for
/// every document.
pub fn load_legend<I, S>(lines: I) -> Result<Legend, LegendError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut columns = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            warn!(line = idx + 1, "blank legend line has no header or path");
            columns.push(Column {
                header: String::new(),
                path: Vec::new(),
            });
            continue;
        }
        let mut tokens = line.split(' ');
        let header = tokens.next().unwrap_or_default().to_string();
        let path = tokens
            .map(parse_token)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.at_line(idx + 1))?;
        if path.is_empty() {
            warn!(line = idx + 1, column = %header, "legend column has no path");
        }
        columns.push(Column { header, path });
    }
    Ok(Legend::new(columns))
}
