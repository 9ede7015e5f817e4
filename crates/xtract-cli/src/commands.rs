use anyhow::{Context, Result};
use comfy_table::Table;
use xtract_cli::pipeline::{ExtractRequest, ExtractResult, resolve_namespace, run_extract};
use xtract_core::load_legend_file;
use xtract_report::QuoteMode;

use crate::cli::{ExtractArgs, LegendArgs, QuoteArg};
use crate::summary::apply_table_style;

pub fn run_extract_command(args: &ExtractArgs) -> Result<ExtractResult> {
    let request = ExtractRequest {
        folder: args.folder.clone(),
        legend: args.legend.clone(),
        output_name: args.output.clone(),
        output_dir: args.output_dir.clone(),
        namespace: resolve_namespace(args.namespace.as_deref()),
        quote: match args.quote {
            QuoteArg::Necessary => QuoteMode::Necessary,
            QuoteArg::Never => QuoteMode::Never,
        },
    };
    run_extract(&request)
}

pub fn run_legend(args: &LegendArgs) -> Result<()> {
    let legend = load_legend_file(&args.legend)
        .with_context(|| format!("load legend {}", args.legend.display()))?;
    let mut table = Table::new();
    table.set_header(vec!["#", "Column", "Segment", "Namespace", "Occurrence"]);
    apply_table_style(&mut table);
    for (idx, column) in legend.columns.iter().enumerate() {
        if column.path.is_empty() {
            table.add_row(vec![
                (idx + 1).to_string(),
                column.header.clone(),
                "(no path)".to_string(),
                String::new(),
                String::new(),
            ]);
            continue;
        }
        for (position, segment) in column.path.iter().enumerate() {
            let (number, header) = if position == 0 {
                ((idx + 1).to_string(), column.header.clone())
            } else {
                (String::new(), String::new())
            };
            let occurrence = if position == 0 {
                "first match".to_string()
            } else {
                (segment.occurrence_index + 1).to_string()
            };
            table.add_row(vec![
                number,
                header,
                segment.name.clone(),
                (if segment.has_namespace { "yes" } else { "no" }).to_string(),
                occurrence,
            ]);
        }
    }
    println!("{table}");
    println!("{} column(s) plus File Name", legend.len());
    Ok(())
}
