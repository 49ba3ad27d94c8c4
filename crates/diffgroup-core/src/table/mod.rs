//! Column-oriented tables.
//!
//! A [`Table`] is an ordered sequence of named [`Column`]s of equal length.
//! Column names are not required to be unique here; uniqueness is checked
//! when two tables are validated against each other so that it can be
//! reported as a comparison error.

pub mod json;
pub mod value;

pub use value::{ColumnKind, Value};

use crate::errors::{DiffGroupError, Result};
use serde::{Deserialize, Serialize};

/// A named, typed sequence of values
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    kind: ColumnKind,
    values: Vec<Value>,
}

impl Column {
    /// Create a column, inferring its kind from the values
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        Self {
            name: name.into(),
            kind: ColumnKind::infer(&values),
            values,
        }
    }

    /// Create a column with a declared kind
    ///
    /// # Errors
    ///
    /// `InvalidInput` if any value does not fit the declared kind.
    pub fn with_kind<I, V>(name: impl Into<String>, kind: ColumnKind, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let name = name.into();
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if let Some(pos) = values.iter().position(|v| !kind.admits(v)) {
            return Err(DiffGroupError::InvalidInput {
                reason: format!(
                    "value at row {} of column {} does not fit kind {}",
                    pos, name, kind
                ),
            });
        }
        Ok(Self { name, kind, values })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Row and column count of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

/// Which of the two compared tables an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSide {
    Left,
    Right,
}

impl std::fmt::Display for TableSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableSide::Left => f.write_str("left"),
            TableSide::Right => f.write_str("right"),
        }
    }
}

/// Ordered collection of equal-length columns
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Build a table from columns.
    ///
    /// # Errors
    ///
    /// `RaggedTable` if the columns do not all have the same length.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let n_rows = columns.first().map(Column::len).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.len() != n_rows) {
            return Err(DiffGroupError::RaggedTable {
                column: bad.name.clone(),
                expected: n_rows,
                actual: bad.len(),
            });
        }
        Ok(Self { columns, n_rows })
    }

    /// A table with no columns and no rows
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from columns already known to share `n_rows`.
    pub(crate) fn from_aligned(columns: Vec<Column>, n_rows: usize) -> Self {
        debug_assert!(columns.iter().all(|c| c.len() == n_rows));
        Self { columns, n_rows }
    }

    pub fn shape(&self) -> Shape {
        Shape {
            rows: self.n_rows,
            cols: self.columns.len(),
        }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// First column with the given name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        (index < self.n_rows).then_some(Row { table: self, index })
    }

    /// Rows in ascending index order
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        (0..self.n_rows).map(move |index| Row { table: self, index })
    }
}

/// Borrowed view of one row of a table
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    index: usize,
}

impl<'a> Row<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// `(column name, value)` pairs in column order
    pub fn fields(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        let (table, index) = (self.table, self.index);
        table
            .columns
            .iter()
            .map(move |c| (c.name.as_str(), &c.values[index]))
    }

    pub fn get(&self, name: &str) -> Option<&'a Value> {
        let table = self.table;
        table.column(name).map(|c| &c.values[self.index])
    }
}
