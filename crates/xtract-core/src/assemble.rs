//! Report assembly across all input documents.

use roxmltree::Document;
use tracing::{debug, debug_span, error, info};
use xtract_model::{DocumentContent, DocumentSet, Legend, Report, Row, SourceDocument};

use crate::row::{build_row, failed_row};

/// Build one row per document, in input order, under the legend headers.
///
/// Documents are parsed and resolved one at a time. A document that cannot
/// be read or parsed yields a row of sentinels instead of aborting.
pub fn assemble(documents: &DocumentSet, legend: &Legend, namespace: &str) -> Report {
    let rows = documents
        .iter()
        .map(|document| {
            let span = debug_span!("document", file = %document.identifier);
            span.in_scope(|| assemble_one(document, legend, namespace))
        })
        .collect::<Vec<_>>();

    let report = Report {
        headers: legend.headers(),
        rows,
    };
    info!(
        documents = report.rows.len(),
        columns = legend.len(),
        failed_cells = report.failed_cell_count(),
        "report assembled"
    );
    report
}

fn assemble_one(document: &SourceDocument, legend: &Legend, namespace: &str) -> Row {
    let text = match &document.content {
        DocumentContent::Loaded(text) => text,
        DocumentContent::Unreadable { reason } => {
            error!(
                file = %document.identifier,
                path = %document.path.display(),
                reason = %reason,
                "document could not be read"
            );
            return failed_row(legend, &document.identifier);
        }
    };

    match Document::parse(text) {
        Ok(tree) => {
            debug!(nodes = tree.descendants().count(), "document parsed");
            build_row(&tree, legend, &document.identifier, namespace)
        }
        Err(err) => {
            error!(
                file = %document.identifier,
                path = %document.path.display(),
                error = %err,
                "document is not well-formed XML"
            );
            failed_row(legend, &document.identifier)
        }
    }
}
