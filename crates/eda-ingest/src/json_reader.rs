use std::fs;
use std::path::Path;

use serde_json::Value;

use eda_model::{EdaError, Result};

use crate::infer::{RawTable, normalize_cell, normalize_header};

fn parse_error(
    path: &Path,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> EdaError {
    EdaError::Parse {
        format: "json".to_string(),
        path: path.to_path_buf(),
        source: source.into(),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        // Nested structures are carried as their JSON rendering.
        other => other.to_string(),
    }
}

/// Reads a JSON dataset: either an array of record objects or an object
/// of equally long column arrays. Record keys keep source order; keys
/// absent from a record become missing cells.
pub fn read_json(path: &Path) -> Result<RawTable> {
    let text = fs::read_to_string(path)?;
    let value: Value =
        serde_json::from_str(&text).map_err(|error| parse_error(path, error))?;
    match value {
        Value::Array(records) => read_records(path, &records),
        Value::Object(columns) => read_columnar(path, &columns),
        _ => Err(parse_error(
            path,
            "expected an array of records or an object of column arrays".to_string(),
        )),
    }
}

fn read_records(path: &Path, records: &[Value]) -> Result<RawTable> {
    let mut headers: Vec<String> = Vec::new();
    for record in records {
        let Value::Object(fields) = record else {
            return Err(parse_error(
                path,
                "record array must contain only objects".to_string(),
            ));
        };
        for key in fields.keys() {
            let header = normalize_header(key);
            if !headers.contains(&header) {
                headers.push(header);
            }
        }
    }
    let rows = records
        .iter()
        .map(|record| {
            let Value::Object(fields) = record else {
                unreachable!("validated above");
            };
            let normalized: Vec<(String, &Value)> = fields
                .iter()
                .map(|(key, value)| (normalize_header(key), value))
                .collect();
            headers
                .iter()
                .map(|header| {
                    normalized
                        .iter()
                        .find(|(key, _)| key == header)
                        .map(|(_, value)| normalize_cell(&value_to_cell(value)))
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();
    Ok(RawTable { headers, rows })
}

fn read_columnar(path: &Path, columns: &serde_json::Map<String, Value>) -> Result<RawTable> {
    let mut headers = Vec::with_capacity(columns.len());
    let mut column_cells: Vec<Vec<String>> = Vec::with_capacity(columns.len());
    let mut length: Option<usize> = None;
    for (key, value) in columns {
        let Value::Array(values) = value else {
            return Err(parse_error(
                path,
                format!("column '{key}' must be an array"),
            ));
        };
        match length {
            None => length = Some(values.len()),
            Some(expected) if expected != values.len() => {
                return Err(parse_error(
                    path,
                    format!(
                        "column '{key}' has {} values, expected {expected}",
                        values.len()
                    ),
                ));
            }
            Some(_) => {}
        }
        headers.push(normalize_header(key));
        column_cells.push(
            values
                .iter()
                .map(|value| normalize_cell(&value_to_cell(value)))
                .collect(),
        );
    }
    let row_count = length.unwrap_or(0);
    let rows = (0..row_count)
        .map(|row| {
            column_cells
                .iter()
                .map(|cells| cells[row].clone())
                .collect()
        })
        .collect();
    Ok(RawTable { headers, rows })
}
