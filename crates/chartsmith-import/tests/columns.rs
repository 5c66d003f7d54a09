// File: crates/chartsmith-import/tests/columns.rs
// Purpose: Validate column type inference and import rejection paths.

use chartsmith_import::{parse_columns, ColumnData, ColumnKind, ImportError};
use chrono::NaiveDate;

#[test]
fn boolean_and_numeric_columns() {
    let cols = parse_columns("a,b\ntrue,1\nfalse,0\n").expect("parse");
    assert_eq!(cols.len(), 2);
    assert_eq!(cols[0].name, "a");
    assert_eq!(cols[0].data, ColumnData::Boolean(vec![true, false]));
    // "1"/"0" satisfy both rungs; numeric wins by priority.
    assert_eq!(cols[1].data, ColumnData::Numeric(vec![1.0, 0.0]));
}

#[test]
fn date_column_with_mixed_layouts() {
    let cols = parse_columns("when\n2024-01-31\n02/15/2024\n").expect("parse");
    assert_eq!(cols[0].kind(), ColumnKind::Date);
    assert_eq!(
        cols[0].data,
        ColumnData::Date(vec![
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
        ])
    );
}

#[test]
fn mixed_content_falls_back_to_text() {
    let cols = parse_columns("x\n12\nhello\n").expect("parse");
    assert_eq!(
        cols[0].data,
        ColumnData::Text(vec!["12".to_string(), "hello".to_string()])
    );
}

#[test]
fn quoted_cells_are_stripped() {
    let cols = parse_columns("name,score\n\"alice\",\"10\"\n\"bob\",\"20\"\n").expect("parse");
    assert_eq!(
        cols[0].data,
        ColumnData::Text(vec!["alice".to_string(), "bob".to_string()])
    );
    assert_eq!(cols[1].data, ColumnData::Numeric(vec![10.0, 20.0]));
}

#[test]
fn header_only_is_rejected() {
    match parse_columns("a,b\n") {
        Err(ImportError::TooFewRows { got }) => assert_eq!(got, 1),
        other => panic!("expected TooFewRows, got {other:?}"),
    }
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(
        parse_columns(""),
        Err(ImportError::TooFewRows { got: 0 })
    ));
}

#[test]
fn ragged_row_is_rejected() {
    match parse_columns("a,b\n1,2\n3\n") {
        Err(ImportError::RaggedRow { row, got, expected }) => {
            assert_eq!((row, got, expected), (2, 1, 2));
        }
        other => panic!("expected RaggedRow, got {other:?}"),
    }
}

#[test]
fn non_finite_literals_are_not_numeric() {
    // "inf" parses as f64 but is not a finite measurement; the column
    // degrades to text instead.
    let cols = parse_columns("x\n1\ninf\n").expect("parse");
    assert_eq!(cols[0].kind(), ColumnKind::Text);
}
