//! Tests for xtract-model types.

use xtract_model::{Column, DocumentSet, Legend, PathSegment, ResolveError, SourceDocument};

#[test]
fn legend_headers_start_with_file_name() {
    let legend = Legend::new(vec![
        Column {
            header: "Age".to_string(),
            path: vec![PathSegment::plain("Age")],
        },
        Column {
            header: "City".to_string(),
            path: vec![PathSegment::plain("Address"), PathSegment::plain("City")],
        },
    ]);
    assert_eq!(legend.headers(), vec!["File Name", "Age", "City"]);
    assert_eq!(legend.len(), 2);
}

#[test]
fn column_path_display_uses_raw_tokens() {
    let column = Column {
        header: "Age".to_string(),
        path: vec![
            PathSegment {
                name: "Person".to_string(),
                has_namespace: true,
                occurrence_index: 0,
                raw_token: ":Person<1>".to_string(),
            },
            PathSegment {
                name: "Birth".to_string(),
                has_namespace: false,
                occurrence_index: 1,
                raw_token: "Birth<2>".to_string(),
            },
        ],
    };
    assert_eq!(column.path_display(), ":Person<1> Birth<2>");
}

#[test]
fn empty_document_set_is_rejected() {
    assert!(DocumentSet::new(Vec::new()).is_none());
    let set = DocumentSet::new(vec![SourceDocument::loaded("a.xml", "<a/>")]).expect("non-empty");
    assert_eq!(set.len(), 1);
    assert_eq!(set.iter().next().map(|d| d.identifier.as_str()), Some("a.xml"));
}

#[test]
fn index_out_of_range_message_is_one_based() {
    let error = ResolveError::IndexOutOfRange {
        name: "Birth".to_string(),
        index: 2,
        available: 1,
    };
    assert_eq!(
        error.to_string(),
        "element Birth occurrence 3 requested but only 1 found"
    );
}
