use std::path::Path;

use csv::ReaderBuilder;

use eda_model::{EdaError, Result};

use crate::infer::{RawTable, normalize_cell, normalize_header};

fn parse_error(path: &Path, source: csv::Error) -> EdaError {
    EdaError::Parse {
        format: "csv".to_string(),
        path: path.to_path_buf(),
        source: Box::new(source),
    }
}

/// Reads a delimited text file. The first non-empty row is the header;
/// fully empty rows are skipped; cells are trimmed and BOM-stripped.
pub fn read_csv(path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| parse_error(path, error))?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| parse_error(path, error))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(RawTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }
    let headers: Vec<String> = raw_rows[0]
        .iter()
        .map(|cell| normalize_header(cell))
        .collect();
    let rows = raw_rows.split_off(1);
    Ok(RawTable { headers, rows })
}
