//! Cell values and column kinds.

use serde::{Deserialize, Serialize};

/// A single cell value.
///
/// Equality is structural: lists and tuples compare element-wise, a list
/// never equals a tuple, and integers compare numerically with floats.
/// Booleans count as the numbers 0 and 1 (`true == 1`, `[true] == [1.0]`).
/// Floats use IEEE equality, so a `NaN` cell never equals anything.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
}

impl Value {
    /// Build a tuple value from anything convertible to values
    pub fn tuple<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Build a list value from anything convertible to values
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }
}

/// Exact comparison between an integer and a float.
///
/// The float must be integral and inside the i64 range; casting alone would
/// saturate and report false equality at the boundaries.
fn int_eq_float(i: i64, f: f64) -> bool {
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
    f.fract() == 0.0 && (-TWO_POW_63..TWO_POW_63).contains(&f) && f as i64 == i
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => {
                int_eq_float(*i, *f)
            }
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Bool(b), Value::Int(i)) | (Value::Int(i), Value::Bool(b)) => {
                i64::from(*b) == *i
            }
            (Value::Bool(b), Value::Float(f)) | (Value::Float(f), Value::Bool(b)) => {
                int_eq_float(i64::from(*b), *f)
            }
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(v: Vec<V>) -> Self {
        Value::list(v)
    }
}

/// Semantic value-type of a column.
///
/// Two same-named columns can only be compared when their kinds are
/// compatible; see [`ColumnKind::is_compatible_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Integer,
    Float,
    Boolean,
    Text,
    /// Compound values, mixed kinds, or a column with no values
    Object,
}

impl ColumnKind {
    /// Infer the kind of a column from its values.
    pub fn infer(values: &[Value]) -> Self {
        if values.is_empty() {
            return ColumnKind::Object;
        }
        if values.iter().all(|v| matches!(v, Value::Int(_))) {
            ColumnKind::Integer
        } else if values.iter().all(Value::is_numeric) {
            ColumnKind::Float
        } else if values.iter().all(|v| matches!(v, Value::Bool(_))) {
            ColumnKind::Boolean
        } else if values.iter().all(|v| matches!(v, Value::Text(_))) {
            ColumnKind::Text
        } else {
            ColumnKind::Object
        }
    }

    /// Whether a value may be stored in a column of this kind.
    pub fn admits(&self, value: &Value) -> bool {
        match self {
            ColumnKind::Integer => matches!(value, Value::Int(_)),
            ColumnKind::Float => value.is_numeric(),
            ColumnKind::Boolean => matches!(value, Value::Bool(_)),
            ColumnKind::Text => matches!(value, Value::Text(_)),
            ColumnKind::Object => true,
        }
    }

    /// Whether columns of these two kinds can be compared cell by cell.
    ///
    /// Numeric and boolean kinds must match exactly. `Text` and `Object`
    /// share generic storage, so a text column compares against a mixed or
    /// compound one.
    pub fn is_compatible_with(&self, other: ColumnKind) -> bool {
        self.storage_class() == other.storage_class()
    }

    fn storage_class(&self) -> ColumnKind {
        match self {
            ColumnKind::Text | ColumnKind::Object => ColumnKind::Object,
            other => *other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Integer => "integer",
            ColumnKind::Float => "float",
            ColumnKind::Boolean => "boolean",
            ColumnKind::Text => "text",
            ColumnKind::Object => "object",
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
