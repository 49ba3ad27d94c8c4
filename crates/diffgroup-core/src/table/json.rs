//! Loading tables from JSON documents.
//!
//! Document layout:
//!
//! ```json
//! {"columns": [
//!     {"name": "A", "values": [1, 2.5, "s", [1, 1], {"tuple": [1, 2]}]},
//!     {"name": "B", "kind": "integer", "values": [1, 2, 3, 4, 5]}
//! ]}
//! ```
//!
//! Integral numbers load as `Int` (rejected above the `i64` range), other
//! numbers as `Float`, arrays as `List`, and a single-key
//! `{"tuple": [...]}` object as `Tuple`. The optional `kind` pins the column
//! kind instead of inferring it.

use crate::errors::{DiffGroupError, Result};
use crate::table::{Column, ColumnKind, Table, Value};
use serde::Deserialize;
use serde_json::Value as JsonValue;

const TUPLE_KEY: &str = "tuple";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableDocument {
    columns: Vec<ColumnDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColumnDocument {
    name: String,
    #[serde(default)]
    kind: Option<ColumnKind>,
    values: Vec<JsonValue>,
}

impl Table {
    /// Parse a table from JSON text.
    ///
    /// # Errors
    ///
    /// - `Serialization`: text is not JSON or does not follow the layout
    /// - `InvalidInput`: a cell cannot be represented or does not fit its kind
    /// - `RaggedTable`: columns have different lengths
    pub fn from_json_str(text: &str) -> Result<Table> {
        let doc: TableDocument = serde_json::from_str(text)?;
        build_table(doc)
    }

    /// Build a table from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`Table::from_json_str`].
    pub fn from_json_value(value: JsonValue) -> Result<Table> {
        let doc: TableDocument = serde_json::from_value(value)?;
        build_table(doc)
    }
}

fn build_table(doc: TableDocument) -> Result<Table> {
    let columns = doc
        .columns
        .into_iter()
        .map(build_column)
        .collect::<Result<Vec<_>>>()?;
    Table::new(columns)
}

fn build_column(doc: ColumnDocument) -> Result<Column> {
    let values = doc
        .values
        .iter()
        .enumerate()
        .map(|(row, v)| {
            value_from_json(v).map_err(|reason| DiffGroupError::InvalidInput {
                reason: format!("column {} row {}: {}", doc.name, row, reason),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    match doc.kind {
        Some(kind) => Column::with_kind(doc.name, kind, values),
        None => Ok(Column::new(doc.name, values)),
    }
}

fn value_from_json(v: &JsonValue) -> std::result::Result<Value, String> {
    match v {
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if n.is_u64() {
                Err(format!("integer {} out of range", n))
            } else {
                n.as_f64()
                    .map(Value::Float)
                    .ok_or_else(|| format!("number {} is not representable", n))
            }
        }
        JsonValue::String(s) => Ok(Value::Text(s.clone())),
        JsonValue::Array(items) => items
            .iter()
            .map(value_from_json)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(Value::List),
        JsonValue::Object(map) => match (map.len(), map.get(TUPLE_KEY)) {
            (1, Some(JsonValue::Array(items))) => items
                .iter()
                .map(value_from_json)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(Value::Tuple),
            _ => Err(format!(
                "objects are only allowed as {{\"{}\": [...]}}",
                TUPLE_KEY
            )),
        },
        JsonValue::Null => Err("null values are not supported".to_string()),
    }
}
