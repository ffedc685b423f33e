//! Table construction from a JSON payload.

use serde_json::Value;

use crate::error::PipelineError;

/// Row/column structure derived from one array field of a payload.
///
/// Columns are ordered by first occurrence across the array's objects.
/// Cells are untyped JSON values; a key missing from a given object is
/// `Value::Null` in that row, so mixed-type and ragged records never fail.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Column names, in table order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows, one cell per column, in input order.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Extract the array under `data_key` and flatten it into a [`Table`].
///
/// The row count always equals the array length. Non-object elements
/// contribute no columns and become all-null rows.
pub fn tabulate(payload: &Value, data_key: &str) -> Result<Table, PipelineError> {
    let value = payload.get(data_key).ok_or_else(|| PipelineError::MissingKey {
        key: data_key.to_string(),
    })?;
    let records = value.as_array().ok_or_else(|| PipelineError::NotAnArray {
        key: data_key.to_string(),
    })?;

    let mut columns: Vec<String> = Vec::new();
    for record in records {
        if let Value::Object(map) = record {
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }

    let rows = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|col| record.get(col).cloned().unwrap_or(Value::Null))
                .collect()
        })
        .collect();

    Ok(Table { columns, rows })
}
