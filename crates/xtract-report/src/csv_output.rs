//! CSV serialization of a report.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};
use tempfile::NamedTempFile;
use tracing::info;
use xtract_model::Report;

/// How cell values are quoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteMode {
    /// Quote values containing delimiters, quotes or line breaks.
    #[default]
    Necessary,
    /// Plain comma join. Values containing commas or newlines break the
    /// column layout.
    Never,
}

impl QuoteMode {
    fn style(self) -> QuoteStyle {
        match self {
            Self::Necessary => QuoteStyle::Necessary,
            Self::Never => QuoteStyle::Never,
        }
    }
}

/// Write headers and rows to `writer`.
pub fn write_report<W: Write>(report: &Report, writer: W, quote: QuoteMode) -> Result<()> {
    let mut csv = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(quote.style())
        .from_writer(writer);
    csv.write_record(&report.headers).context("write header line")?;
    for row in &report.rows {
        csv.write_record(&row.values)
            .with_context(|| format!("write row for {}", row.identifier()))?;
    }
    csv.flush().context("flush csv output")?;
    Ok(())
}

/// Write the report to `path`, replacing any existing file.
///
/// Rows are staged in a temporary file next to `path` and renamed into
/// place once complete, so a failed write never leaves a partial report.
pub fn write_report_file(report: &Report, path: &Path, quote: QuoteMode) -> Result<()> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("create temporary output in {}", dir.display()))?;
    write_report(report, staged.as_file(), quote)
        .with_context(|| format!("write {}", path.display()))?;
    staged
        .persist(path)
        .with_context(|| format!("move report into {}", path.display()))?;
    info!(
        path = %path.display(),
        rows = report.rows.len(),
        "report written"
    );
    Ok(())
}
