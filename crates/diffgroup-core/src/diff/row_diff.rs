//! Per-row comparison.

use crate::table::Row;

/// Names of the columns whose values differ between two aligned rows.
///
/// Both rows must come from tables with the same column order (see
/// [`validate`](crate::diff::validate::validate)). Names are returned in
/// that order; the result is empty when the rows are equal.
pub fn diff_row(left: Row<'_>, right: Row<'_>) -> Vec<String> {
    left.fields()
        .zip(right.fields())
        .filter(|((_, l), (_, r))| l != r)
        .map(|((name, _), _)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, Table, Value};

    #[test]
    fn test_equal_rows_give_empty_diff() {
        let t = Table::new(vec![Column::new("A", [1]), Column::new("B", ["x"])]).unwrap();
        assert!(diff_row(t.row(0).unwrap(), t.row(0).unwrap()).is_empty());
    }

    #[test]
    fn test_diff_keeps_left_column_order() {
        let left = Table::new(vec![
            Column::new("C", [1]),
            Column::new("A", [1]),
            Column::new("B", [1]),
        ])
        .unwrap();
        let right = Table::new(vec![
            Column::new("C", [2]),
            Column::new("A", [1]),
            Column::new("B", [2]),
        ])
        .unwrap();
        assert_eq!(
            diff_row(left.row(0).unwrap(), right.row(0).unwrap()),
            vec!["C".to_string(), "B".to_string()]
        );
    }

    #[test]
    fn test_compound_values_compared_structurally() {
        let left = Table::new(vec![Column::new(
            "A",
            vec![Value::list([1, 1]), Value::tuple([1, 1])],
        )])
        .unwrap();
        let right = Table::new(vec![Column::new(
            "A",
            vec![Value::list([1, 1]), Value::tuple([1, 2])],
        )])
        .unwrap();
        assert!(diff_row(left.row(0).unwrap(), right.row(0).unwrap()).is_empty());
        assert_eq!(
            diff_row(left.row(1).unwrap(), right.row(1).unwrap()),
            vec!["A".to_string()]
        );
    }
}
