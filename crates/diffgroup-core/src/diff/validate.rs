//! Pre-comparison checks and column alignment.

use crate::errors::{DiffGroupError, KindMismatch, Result};
use crate::table::{Table, TableSide};
use std::borrow::Cow;
use std::collections::HashSet;

/// Check that two tables can be compared row by row.
///
/// Checks run in a fixed order and the first failure is returned. On
/// success the right table is returned with its columns in the left table's
/// order; it is only copied when the order actually differs.
///
/// # Errors
///
/// - `ShapeMismatch`: row or column counts differ
/// - `DuplicateColumns`: either table repeats a column name
/// - `ColumnSetMismatch`: the column name sets differ
/// - `TypeMismatch`: a same-named column has an incompatible kind
pub fn validate<'a, 'b>(left: &'a Table, right: &'b Table) -> Result<(&'a Table, Cow<'b, Table>)> {
    if left.shape() != right.shape() {
        return Err(DiffGroupError::ShapeMismatch {
            left: left.shape(),
            right: right.shape(),
        });
    }

    for (side, table) in [(TableSide::Left, left), (TableSide::Right, right)] {
        let repeated = repeated_names(table);
        if !repeated.is_empty() {
            return Err(DiffGroupError::DuplicateColumns {
                side,
                columns: repeated,
            });
        }
    }

    let left_names = left.column_names();
    let right_names = right.column_names();
    let left_set: HashSet<&str> = left_names.iter().copied().collect();
    let right_set: HashSet<&str> = right_names.iter().copied().collect();
    if left_set != right_set {
        return Err(DiffGroupError::ColumnSetMismatch {
            left_only: only_in(&left_names, &right_set),
            right_only: only_in(&right_names, &left_set),
        });
    }

    let right = if left_names == right_names {
        Cow::Borrowed(right)
    } else {
        tracing::debug!(
            component = module_path!(),
            op = "validate",
            from = ?right_names,
            to = ?left_names,
            "reordering right table columns"
        );
        Cow::Owned(reorder(right, &left_names))
    };

    let mismatches: Vec<KindMismatch> = left
        .columns()
        .iter()
        .zip(right.columns())
        .filter(|(l, r)| !l.kind().is_compatible_with(r.kind()))
        .map(|(l, r)| KindMismatch {
            column: l.name().to_string(),
            left: l.kind(),
            right: r.kind(),
        })
        .collect();
    if !mismatches.is_empty() {
        return Err(DiffGroupError::TypeMismatch { mismatches });
    }

    Ok((left, right))
}

/// Names that appear more than once, in order of their second appearance.
fn repeated_names(table: &Table) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut repeated: Vec<String> = Vec::new();
    for name in table.column_names() {
        if !seen.insert(name) && !repeated.iter().any(|r| r == name) {
            repeated.push(name.to_string());
        }
    }
    repeated
}

fn only_in(names: &[&str], other: &HashSet<&str>) -> Vec<String> {
    names
        .iter()
        .filter(|n| !other.contains(*n))
        .map(|n| n.to_string())
        .collect()
}

/// Copy of `table` with columns permuted into `order`.
///
/// Callers guarantee `order` is a permutation of the table's unique names.
fn reorder(table: &Table, order: &[&str]) -> Table {
    let columns = order
        .iter()
        .filter_map(|name| table.column(name).cloned())
        .collect();
    Table::from_aligned(columns, table.n_rows())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, ColumnKind, Shape, Value};

    fn table(columns: Vec<Column>) -> Table {
        Table::new(columns).unwrap()
    }

    #[test]
    fn test_same_order_is_borrowed() {
        let left = table(vec![Column::new("A", [1]), Column::new("B", [1])]);
        let right = table(vec![Column::new("A", [2]), Column::new("B", [2])]);
        let (_, aligned) = validate(&left, &right).unwrap();
        assert!(matches!(aligned, Cow::Borrowed(_)));
    }

    #[test]
    fn test_right_is_reordered_to_left_order() {
        let left = table(vec![Column::new("A", [1, 1]), Column::new("B", [1, 1])]);
        let right = table(vec![Column::new("B", [1, 1]), Column::new("A", [2, 1])]);
        let (l, aligned) = validate(&left, &right).unwrap();
        assert_eq!(l.column_names(), vec!["A", "B"]);
        assert_eq!(aligned.column_names(), vec!["A", "B"]);
        assert_eq!(aligned.column("A").unwrap().values(), right.column("A").unwrap().values());
        assert!(matches!(aligned, Cow::Owned(_)));
    }

    #[test]
    fn test_shape_checked_first() {
        let left = table(vec![Column::new("A", [1])]);
        let right = table(vec![Column::new("A", [1, 1])]);
        assert_eq!(
            validate(&left, &right).unwrap_err(),
            DiffGroupError::ShapeMismatch {
                left: Shape { rows: 1, cols: 1 },
                right: Shape { rows: 2, cols: 1 },
            }
        );
    }

    #[test]
    fn test_duplicates_reported_per_side() {
        let left = table(vec![Column::new("A", [1]), Column::new("B", [1])]);
        let right = table(vec![Column::new("A", [1]), Column::new("A", [1])]);
        assert_eq!(
            validate(&left, &right).unwrap_err(),
            DiffGroupError::DuplicateColumns {
                side: TableSide::Right,
                columns: vec!["A".into()],
            }
        );
    }

    #[test]
    fn test_column_set_mismatch_lists_both_sides() {
        let left = table(vec![Column::new("A", [1]), Column::new("B", [1])]);
        let right = table(vec![Column::new("C", [1]), Column::new("A", [1])]);
        assert_eq!(
            validate(&left, &right).unwrap_err(),
            DiffGroupError::ColumnSetMismatch {
                left_only: vec!["B".into()],
                right_only: vec!["C".into()],
            }
        );
    }

    #[test]
    fn test_type_mismatch_checked_after_reorder() {
        let left = table(vec![Column::new("A", ["x"]), Column::new("B", [1])]);
        let right = table(vec![Column::new("B", [1]), Column::new("A", [1])]);
        assert_eq!(
            validate(&left, &right).unwrap_err(),
            DiffGroupError::TypeMismatch {
                mismatches: vec![KindMismatch {
                    column: "A".into(),
                    left: ColumnKind::Text,
                    right: ColumnKind::Integer,
                }],
            }
        );
    }

    #[test]
    fn test_text_and_object_columns_validate() {
        let left = table(vec![Column::new("A", ["x", "y"])]);
        let right = table(vec![Column::new("A", [Value::from("x"), Value::list([1])])]);
        assert_eq!(left.column("A").unwrap().kind(), ColumnKind::Text);
        assert_eq!(right.column("A").unwrap().kind(), ColumnKind::Object);
        assert!(validate(&left, &right).is_ok());
    }

    #[test]
    fn test_empty_tables_validate() {
        let left = Table::empty();
        let right = Table::empty();
        let (l, r) = validate(&left, &right).unwrap();
        assert_eq!(l.shape(), r.shape());
    }
}
