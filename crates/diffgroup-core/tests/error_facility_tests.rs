use diffgroup_core::errors::{DiffGroupError, ExError, ExErrorKind, KindMismatch};
use diffgroup_core::table::{Shape, TableSide};
use diffgroup_core::ColumnKind;
use diffgroup_core_types::RequestId;

#[test]
fn test_shape_mismatch_conversion() {
    let err = DiffGroupError::ShapeMismatch {
        left: Shape { rows: 1, cols: 1 },
        right: Shape { rows: 2, cols: 1 },
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::ShapeMismatch);
    assert_eq!(ex_err.code(), "ERR_SHAPE_MISMATCH");
    assert_eq!(ex_err.op(), Some("validate"));
    assert!(ex_err.message().contains("(1, 1) vs (2, 1)"));
}

#[test]
fn test_duplicate_columns_carries_names() {
    let err = DiffGroupError::DuplicateColumns {
        side: TableSide::Right,
        columns: vec!["A".to_string()],
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::DuplicateColumns);
    assert_eq!(ex_err.columns(), Some(&["A".to_string()][..]));
    assert!(ex_err.message().starts_with("right table"));
}

#[test]
fn test_column_set_mismatch_collects_both_sides() {
    let err = DiffGroupError::ColumnSetMismatch {
        left_only: vec!["B".to_string()],
        right_only: vec!["C".to_string(), "D".to_string()],
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.code(), "ERR_COLUMN_SET_MISMATCH");
    assert_eq!(
        ex_err.columns(),
        Some(&["B".to_string(), "C".to_string(), "D".to_string()][..])
    );
}

#[test]
fn test_type_mismatch_conversion() {
    let err = DiffGroupError::TypeMismatch {
        mismatches: vec![KindMismatch {
            column: "A".to_string(),
            left: ColumnKind::Text,
            right: ColumnKind::Integer,
        }],
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::TypeMismatch);
    assert_eq!(ex_err.columns(), Some(&["A".to_string()][..]));
    assert!(ex_err.message().contains("A (text vs integer)"));
}

#[test]
fn test_ragged_table_names_column() {
    let err = DiffGroupError::RaggedTable {
        column: "B".to_string(),
        expected: 3,
        actual: 2,
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::RaggedTable);
    assert_eq!(ex_err.column(), Some("B"));
    assert_eq!(ex_err.op(), Some("build_table"));
}

#[test]
fn test_serde_json_error_maps_to_serialization() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: DiffGroupError = json_err.into();
    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
    assert_eq!(ex_err.code(), "ERR_SERIALIZATION");
}

#[test]
fn test_io_error_maps_to_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
    let ex_err: ExError = DiffGroupError::from(io_err).into();

    assert_eq!(ex_err.kind(), ExErrorKind::Io);
    assert!(ex_err.message().contains("missing.json"));
}

#[test]
fn test_request_id_shown_in_display() {
    let request_id = RequestId::from_string("run-42".to_string());
    let ex_err = ExError::new(ExErrorKind::InvalidInput)
        .with_message("bad cell")
        .with_request_id(request_id.clone());

    assert_eq!(ex_err.request_id(), Some(&request_id));
    assert_eq!(
        ex_err.to_string(),
        "[ERR_INVALID_INPUT]: bad cell (request_id: run-42)"
    );
}

#[test]
fn test_error_kind_codes_are_unique() {
    let kinds = [
        ExErrorKind::ShapeMismatch,
        ExErrorKind::DuplicateColumns,
        ExErrorKind::ColumnSetMismatch,
        ExErrorKind::TypeMismatch,
        ExErrorKind::RaggedTable,
        ExErrorKind::InvalidInput,
        ExErrorKind::Io,
        ExErrorKind::Serialization,
    ];
    let codes: std::collections::HashSet<&str> = kinds.iter().map(|k| k.code()).collect();
    assert_eq!(codes.len(), kinds.len());
}
