//! Grouped row diff entry point.
//!
//! [`groupcount_differences_between_rows`] runs the whole pipeline:
//! validation, per-row diff, grouping.

use crate::diff::grouper::DiffGrouper;
use crate::diff::model::GroupCountTable;
use crate::diff::row_diff::diff_row;
use crate::diff::validate::validate;
use crate::errors::Result;
use crate::logging_facility::elapsed_ms;
use crate::table::Table;
use crate::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

const OP: &str = "groupcount_differences_between_rows";

/// Group row pairs by the set of columns that differ and count each group.
///
/// Example:
///
/// ```text
/// left:        right:
/// A  B  C      A   B   C
/// 1  1  1      1   1   1
/// 1  1  1      1   99  1
/// 1  1  1      1   99  1
/// 1  1  1      1   1   99
/// 1  1  1      99  99  1
///
/// group   count  indices
/// [A, B]      1  [4]
/// [B]         2  [1, 2]
/// [C]         1  [3]
/// ```
///
/// The right table is compared in the left table's column order. Rows that
/// are equal in every column belong to no group.
///
/// # Errors
///
/// Fails before any row is compared when the tables cannot be aligned; see
/// [`validate`](crate::diff::validate::validate).
pub fn groupcount_differences_between_rows(
    left: &Table,
    right: &Table,
) -> Result<GroupCountTable> {
    let started = Instant::now();
    let shape = left.shape();
    log_op_start!(OP, rows = shape.rows, columns = shape.cols);

    match run(left, right) {
        Ok(result) => {
            log_op_end!(
                OP,
                duration_ms = elapsed_ms(started),
                rows = shape.rows,
                groups = result.len()
            );
            Ok(result)
        }
        Err(err) => {
            log_op_error!(
                OP,
                err.clone(),
                duration_ms = elapsed_ms(started),
                rows = shape.rows
            );
            Err(err)
        }
    }
}

fn run(left: &Table, right: &Table) -> Result<GroupCountTable> {
    let (left, right) = validate(left, right)?;
    let mut grouper = DiffGrouper::new();
    for (l, r) in left.rows().zip(right.rows()) {
        grouper.record(l.index(), diff_row(l, r));
    }
    Ok(grouper.finish())
}
