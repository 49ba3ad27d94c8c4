//! diffgroup Core - grouped row diff of two tables
//!
//! This crate compares two equally shaped tables row by row and groups the
//! row pairs by the set of column names that differ, including:
//! - Column-oriented tables with structurally compared cell values
//! - Validation and column alignment of the two tables
//! - Per-row diff and grouping into a `group / count / indices` result table
//! - JSON loading of tables and a human-readable summary of results
//! - Structured error and logging facilities

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod table;

// Re-export commonly used types
pub use diff::{groupcount_differences_between_rows, DiffGroup, GroupCountTable, GroupKey};
pub use errors::{DiffGroupError, ExError, ExErrorKind, Result};
pub use table::{Column, ColumnKind, Table, Value};
