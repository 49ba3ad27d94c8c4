use diffgroup_core::{Column, Table, Value};

/// Build a table from `(name, values)` pairs, kinds inferred
#[allow(dead_code)]
pub fn table(columns: Vec<(&str, Vec<Value>)>) -> Table {
    Table::new(
        columns
            .into_iter()
            .map(|(name, values)| Column::new(name, values))
            .collect(),
    )
    .unwrap()
}

/// Integer column values
#[allow(dead_code)]
pub fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Int).collect()
}
