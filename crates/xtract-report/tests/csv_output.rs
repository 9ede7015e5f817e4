//! Tests for CSV report output.

use xtract_model::{Report, Row};
use xtract_report::{QuoteMode, write_report, write_report_file};

fn sample_report() -> Report {
    Report {
        headers: vec!["File Name".to_string(), "Name".to_string(), "City".to_string()],
        rows: vec![
            Row {
                values: vec!["a.xml".to_string(), "Ann".to_string(), "Oslo, Norway".to_string()],
                failed_columns: vec![],
            },
            Row {
                values: vec!["b.xml".to_string(), "Error!".to_string(), "Bergen".to_string()],
                failed_columns: vec![0],
            },
        ],
    }
}

fn render(report: &Report, quote: QuoteMode) -> String {
    let mut out = Vec::new();
    write_report(report, &mut out, quote).expect("write report");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn quotes_values_containing_commas() {
    let csv = render(&sample_report(), QuoteMode::Necessary);
    insta::assert_snapshot!(csv, @r#"
    File Name,Name,City
    a.xml,Ann,"Oslo, Norway"
    b.xml,Error!,Bergen
    "#);
}

#[test]
fn never_mode_joins_values_verbatim() {
    let csv = render(&sample_report(), QuoteMode::Never);
    assert_eq!(
        csv,
        "File Name,Name,City\na.xml,Ann,Oslo, Norway\nb.xml,Error!,Bergen\n"
    );
}

#[test]
fn writes_report_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("output.csv");
    write_report_file(&sample_report(), &path, QuoteMode::default()).expect("write file");
    let text = std::fs::read_to_string(&path).expect("read back");
    assert!(text.starts_with("File Name,Name,City\n"));
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn written_file_replaces_existing_and_leaves_no_staging_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("output.csv");
    std::fs::write(&path, "stale contents that are longer than nothing\n").expect("seed");

    write_report_file(&sample_report(), &path, QuoteMode::Never).expect("write file");

    let text = std::fs::read_to_string(&path).expect("read back");
    assert!(text.starts_with("File Name,Name,City\n"));
    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .expect("list dir")
        .map(|entry| entry.expect("entry").file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("output.csv")]);
}

#[test]
fn failed_write_creates_no_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing").join("output.csv");

    assert!(write_report_file(&sample_report(), &path, QuoteMode::default()).is_err());
    assert!(!path.exists());
    assert!(!dir.path().join("missing").exists());
}
