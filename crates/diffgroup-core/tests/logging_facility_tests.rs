#![allow(clippy::unwrap_used, clippy::expect_used)]

use diffgroup_core::errors::DiffGroupError;
use diffgroup_core::logging_facility::test_capture::init_test_capture;
use diffgroup_core::{groupcount_differences_between_rows, Column, Table};
use diffgroup_core::{log_op_end, log_op_error, log_op_start};
use diffgroup_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ERR_CODE};

const ENGINE_OP: &str = "groupcount_differences_between_rows";

fn constant_table(name: &str, rows: usize, value: i64) -> Table {
    Table::new(vec![Column::new(name, vec![value; rows])]).unwrap()
}

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end_events: Vec<_> = events.iter().filter(|e| e.is(op_name, EVENT_END)).collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = DiffGroupError::InvalidInput {
        reason: "bad".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.is(op_name, EVENT_END_ERROR))
        .expect("Should have error event");

    assert_eq!(error_event.field(FIELD_ERR_CODE), Some("ERR_INVALID_INPUT"));
}

#[test]
fn test_successful_comparison_logs_start_and_end() {
    let capture = init_test_capture();
    // Row count unique to this test so parallel tests don't interfere
    let rows = 17;
    let left = constant_table("A", rows, 1);
    let right = constant_table("A", rows, 2);

    let result = groupcount_differences_between_rows(&left, &right).unwrap();
    assert_eq!(result.len(), 1);

    let for_this_test = |event: &str| {
        capture.count_events(|e| e.is(ENGINE_OP, event) && e.field("rows") == Some("17"))
    };
    assert_eq!(for_this_test(EVENT_START), 1);
    assert_eq!(for_this_test(EVENT_END), 1);
    assert_eq!(for_this_test(EVENT_END_ERROR), 0);

    let events = capture.events();
    let end = events
        .iter()
        .find(|e| e.is(ENGINE_OP, EVENT_END) && e.field("rows") == Some("17"))
        .unwrap();
    assert_eq!(end.field("groups"), Some("1"));
}

#[test]
fn test_failed_comparison_logs_error_code() {
    let capture = init_test_capture();
    let left = constant_table("A", 23, 1);
    let right = constant_table("B", 23, 1);

    let err = groupcount_differences_between_rows(&left, &right).unwrap_err();
    assert!(matches!(err, DiffGroupError::ColumnSetMismatch { .. }));

    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.is(ENGINE_OP, EVENT_END_ERROR) && e.field("rows") == Some("23"))
        .expect("Should have error event");
    assert_eq!(
        error_event.field(FIELD_ERR_CODE),
        Some("ERR_COLUMN_SET_MISMATCH")
    );
    assert_eq!(
        capture.count_events(|e| e.is(ENGINE_OP, EVENT_END) && e.field("rows") == Some("23")),
        0
    );
}
