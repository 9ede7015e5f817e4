//! Extraction run: discover documents, load the legend, assemble and write.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};
use xtract_core::{DEFAULT_NAMESPACE, assemble, load_legend_file};
use xtract_ingest::load_folder;
use xtract_model::Report;
use xtract_report::{QuoteMode, output_file_name, write_report_file};

/// Environment variable overriding the default document namespace.
pub const NAMESPACE_ENV_VAR: &str = "XTRACT_NAMESPACE";

/// Inputs of one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractRequest {
    /// Folder whose `*.xml` files are processed.
    pub folder: PathBuf,
    pub legend: PathBuf,
    /// Output file name; normalized by [`output_file_name`].
    pub output_name: Option<String>,
    /// Directory receiving the CSV file (default: `folder`).
    pub output_dir: Option<PathBuf>,
    pub namespace: String,
    pub quote: QuoteMode,
}

#[derive(Debug)]
pub struct ExtractResult {
    pub output_path: PathBuf,
    pub report: Report,
}

/// Pick the document namespace: explicit value, then environment, then
/// [`DEFAULT_NAMESPACE`]. Blank values at any level are ignored.
pub fn resolve_namespace(explicit: Option<&str>) -> String {
    choose_namespace(explicit, std::env::var(NAMESPACE_ENV_VAR).ok().as_deref())
}

fn choose_namespace(explicit: Option<&str>, from_env: Option<&str>) -> String {
    let non_blank = |ns: &&str| !ns.trim().is_empty();
    explicit
        .filter(non_blank)
        .or_else(|| from_env.filter(non_blank))
        .unwrap_or(DEFAULT_NAMESPACE)
        .to_string()
}

/// Where the report for `request` is written.
pub fn output_path(request: &ExtractRequest) -> PathBuf {
    let dir: &Path = request.output_dir.as_deref().unwrap_or(&request.folder);
    dir.join(output_file_name(request.output_name.as_deref()))
}

/// Run one extraction.
///
/// Missing input documents and legend errors abort before anything is
/// written. Column resolution failures never abort; they show up as
/// sentinel cells in the report.
pub fn run_extract(request: &ExtractRequest) -> Result<ExtractResult> {
    let span = info_span!("extract", folder = %request.folder.display());
    let _guard = span.enter();
    let start = Instant::now();

    let documents = load_folder(&request.folder)
        .with_context(|| format!("load documents from {}", request.folder.display()))?;

    let legend = load_legend_file(&request.legend).context("load legend")?;
    info!(
        legend = %request.legend.display(),
        columns = legend.len(),
        "legend loaded"
    );

    let report = assemble(&documents, &legend, &request.namespace);

    let output_path = output_path(request);
    write_report_file(&report, &output_path, request.quote)?;
    info!(
        documents = documents.len(),
        failed_cells = report.failed_cell_count(),
        duration_ms = start.elapsed().as_millis(),
        "extraction complete"
    );

    Ok(ExtractResult {
        output_path,
        report,
    })
}
