//! Tests for legend loading.

use std::io::Write;

use xtract_core::{load_legend, load_legend_file, parse_legend};
use xtract_model::LegendError;

#[test]
fn each_line_becomes_a_column() {
    let legend = parse_legend("Age :Person<1> Birth<2>\nName :Person :Name\n").expect("legend");
    assert_eq!(legend.len(), 2);

    let age = &legend.columns[0];
    assert_eq!(age.header, "Age");
    assert_eq!(age.path.len(), 2);
    assert_eq!(age.path[0].name, "Person");
    assert!(age.path[0].has_namespace);
    assert_eq!(age.path[1].name, "Birth");
    assert_eq!(age.path[1].occurrence_index, 1);

    assert_eq!(legend.headers(), vec!["File Name", "Age", "Name"]);
}

#[test]
fn accepts_line_iterators() {
    let lines = vec!["City Address City".to_string()];
    let legend = load_legend(lines).expect("legend");
    assert_eq!(legend.columns[0].path_display(), "Address City");
}

#[test]
fn blank_lines_become_empty_columns() {
    let legend = parse_legend("Age Age\n\nCity City\n").expect("legend");
    assert_eq!(legend.len(), 3);
    assert_eq!(legend.headers(), vec!["File Name", "Age", "", "City"]);
    assert!(legend.columns[1].path.is_empty());
}

#[test]
fn whitespace_only_line_is_an_empty_column() {
    let legend = parse_legend("Age Age\n   \nCity City\r\n").expect("legend");
    assert_eq!(legend.headers(), vec!["File Name", "Age", "", "City"]);
    assert!(legend.columns[1].path.is_empty());
    assert_eq!(legend.columns[2].path_display(), "City");
}

#[test]
fn header_only_line_has_empty_path() {
    let legend = parse_legend("Notes\n").expect("legend");
    assert_eq!(legend.len(), 1);
    assert!(legend.columns[0].path.is_empty());
}

#[test]
fn bad_token_aborts_with_line_number() {
    let error = parse_legend("Age Age\nCity :Address<0> City\n").expect_err("bad index");
    match error {
        LegendError::Line { line, source } => {
            assert_eq!(line, 2);
            assert!(matches!(*source, LegendError::ZeroIndex { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn reads_legend_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "Age :Person Age").expect("write legend");
    let legend = load_legend_file(file.path()).expect("legend");
    assert_eq!(legend.columns[0].header, "Age");
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let error = load_legend_file(&dir.path().join("missing.txt")).expect_err("missing file");
    assert!(matches!(error, LegendError::Read { .. }));
}
