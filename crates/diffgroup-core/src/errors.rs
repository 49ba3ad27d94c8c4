use crate::table::{ColumnKind, Shape, TableSide};
use diffgroup_core_types::RequestId;
use thiserror::Error;

/// Result type alias using DiffGroupError
pub type Result<T> = std::result::Result<T, DiffGroupError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    ShapeMismatch,
    DuplicateColumns,
    ColumnSetMismatch,
    TypeMismatch,

    // Table construction / loading
    RaggedTable,
    InvalidInput,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::ShapeMismatch => "ERR_SHAPE_MISMATCH",
            ExErrorKind::DuplicateColumns => "ERR_DUPLICATE_COLUMNS",
            ExErrorKind::ColumnSetMismatch => "ERR_COLUMN_SET_MISMATCH",
            ExErrorKind::TypeMismatch => "ERR_TYPE_MISMATCH",
            ExErrorKind::RaggedTable => "ERR_RAGGED_TABLE",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the context
/// (operation, offending columns, run id) needed to report it.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    column: Option<String>,
    columns: Option<Vec<String>>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            column: None,
            columns: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add a single offending column
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Add the full list of offending columns
    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    pub fn columns(&self) -> Option<&[String]> {
        self.columns.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(column) = &self.column {
            write!(f, " (column: {})", column)?;
        }
        if let Some(columns) = &self.columns {
            write!(f, " (columns: {})", columns.join(", "))?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// A same-named column whose kind differs between the two tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindMismatch {
    pub column: String,
    pub left: ColumnKind,
    pub right: ColumnKind,
}

impl std::fmt::Display for KindMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} vs {})", self.column, self.left, self.right)
    }
}

fn join_mismatches(mismatches: &[KindMismatch]) -> String {
    mismatches
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised while building or comparing tables
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiffGroupError {
    // ===== Validation Errors =====
    /// Row count or column count differs between the tables
    #[error("Tables do not have the same shape: {left}, {right}")]
    ShapeMismatch { left: Shape, right: Shape },

    /// A table repeats one or more column names
    #[error("Tables are not allowed to have non-unique columns: {side} table repeats {columns:?}")]
    DuplicateColumns {
        side: TableSide,
        columns: Vec<String>,
    },

    /// The two tables do not carry the same set of column names
    #[error("Tables do not have the same set of columns: only in left {left_only:?}, only in right {right_only:?}")]
    ColumnSetMismatch {
        left_only: Vec<String>,
        right_only: Vec<String>,
    },

    /// Same-named columns hold different kinds of values
    #[error("Datatypes of same named columns do not match: {}", join_mismatches(.mismatches))]
    TypeMismatch { mismatches: Vec<KindMismatch> },

    // ===== Construction Errors =====
    /// Columns of one table have different lengths
    #[error("Column {column} has {actual} values, expected {expected}")]
    RaggedTable {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Input could not be turned into a table
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    // ===== Generic Errors =====
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },
}

impl From<DiffGroupError> for ExError {
    fn from(err: DiffGroupError) -> Self {
        match err {
            DiffGroupError::ShapeMismatch { left, right } => {
                ExError::new(ExErrorKind::ShapeMismatch)
                    .with_op("validate")
                    .with_message(format!("Shapes differ: {} vs {}", left, right))
            }

            DiffGroupError::DuplicateColumns { side, columns } => {
                ExError::new(ExErrorKind::DuplicateColumns)
                    .with_op("validate")
                    .with_message(format!("{} table has non-unique columns", side))
                    .with_columns(columns)
            }

            DiffGroupError::ColumnSetMismatch {
                left_only,
                right_only,
            } => {
                let mut columns = left_only.clone();
                columns.extend(right_only.iter().cloned());
                ExError::new(ExErrorKind::ColumnSetMismatch)
                    .with_op("validate")
                    .with_message(format!(
                        "Only in left: {:?}, only in right: {:?}",
                        left_only, right_only
                    ))
                    .with_columns(columns)
            }

            DiffGroupError::TypeMismatch { mismatches } => {
                let message = format!(
                    "Datatypes of same named columns do not match: {}",
                    join_mismatches(&mismatches)
                );
                ExError::new(ExErrorKind::TypeMismatch)
                    .with_op("validate")
                    .with_message(message)
                    .with_columns(mismatches.into_iter().map(|m| m.column).collect())
            }

            DiffGroupError::RaggedTable {
                column,
                expected,
                actual,
            } => ExError::new(ExErrorKind::RaggedTable)
                .with_op("build_table")
                .with_column(column)
                .with_message(format!("Has {} values, expected {}", actual, expected)),

            DiffGroupError::InvalidInput { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }

            DiffGroupError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            DiffGroupError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),
        }
    }
}

/// Conversion from serde_json::Error to DiffGroupError
impl From<serde_json::Error> for DiffGroupError {
    fn from(err: serde_json::Error) -> Self {
        DiffGroupError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for DiffGroupError {
    fn from(err: std::io::Error) -> Self {
        DiffGroupError::Io {
            message: err.to_string(),
        }
    }
}
