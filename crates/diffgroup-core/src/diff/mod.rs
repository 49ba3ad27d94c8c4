//! Grouped row diff.
//!
//! Compares two equally shaped tables row by row and groups the row pairs by
//! the exact tuple of column names that differ.
//!
//! ## Entry point
//!
//! ```
//! use diffgroup_core::diff::groupcount_differences_between_rows;
//! use diffgroup_core::table::{Column, Table};
//!
//! let left = Table::new(vec![Column::new("A", [1, 1]), Column::new("B", [1, 1])]).unwrap();
//! let right = Table::new(vec![Column::new("A", [1, 2]), Column::new("B", [1, 1])]).unwrap();
//! let result = groupcount_differences_between_rows(&left, &right).unwrap();
//! assert_eq!(result.find(&["A"]).unwrap().indices, vec![1]);
//! ```
//!
//! ## Pipeline
//!
//! 1. [`validate`](validate::validate) checks shape, column names and kinds,
//!    and aligns the right table's column order to the left.
//! 2. [`diff_row`](row_diff::diff_row) lists the differing columns of one row pair.
//! 3. [`DiffGrouper`](grouper::DiffGrouper) buckets rows by that list.

pub mod engine;
pub mod grouper;
pub mod human_summary;
pub mod model;
pub mod row_diff;
pub mod validate;

pub use engine::groupcount_differences_between_rows;
pub use grouper::DiffGrouper;
pub use human_summary::render_summary;
pub use model::{DiffGroup, GroupCountTable, GroupKey};
