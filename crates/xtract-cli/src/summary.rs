use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use xtract_cli::pipeline::ExtractResult;

pub fn print_summary(result: &ExtractResult) {
    let report = &result.report;
    println!("Output created here:\t{}", result.output_path.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Documents"),
        header_cell("Columns"),
        header_cell("Failed cells"),
    ]);
    apply_table_style(&mut table);
    let failed = report.failed_cell_count();
    table.add_row(vec![
        Cell::new(report.rows.len()).set_alignment(CellAlignment::Right),
        Cell::new(report.headers.len().saturating_sub(1)).set_alignment(CellAlignment::Right),
        count_cell(failed),
    ]);
    println!("{table}");
    print_failure_table(result);
}

fn print_failure_table(result: &ExtractResult) {
    let report = &result.report;
    if !report.has_failures() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("File"), header_cell("Failed columns")]);
    apply_table_style(&mut table);
    for row in report.rows.iter().filter(|row| row.has_failures()) {
        let columns = row
            .failed_columns
            .iter()
            .filter_map(|idx| report.headers.get(idx + 1))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![Cell::new(row.identifier()), Cell::new(columns)]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    let cell = Cell::new(count).set_alignment(CellAlignment::Right);
    if count == 0 {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Red).add_attribute(Attribute::Bold)
    }
}
