use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};

use eda_model::{EdaError, Result, format_numeric};

use crate::infer::{RawTable, normalize_cell, normalize_header};

fn parse_error(
    path: &Path,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> EdaError {
    EdaError::Parse {
        format: "xlsx".to_string(),
        path: path.to_path_buf(),
        source: source.into(),
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(value) => value.clone(),
        Data::Float(value) => format_numeric(*value),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(value) => value
            .as_datetime()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default(),
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.clone(),
    }
}

/// Reads the first worksheet of an XLSX workbook. The first row is the
/// header; fully empty rows are skipped.
pub fn read_xlsx(path: &Path) -> Result<RawTable> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|error| parse_error(path, error))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| parse_error(path, "workbook contains no sheets".to_string()))?
        .map_err(|error| parse_error(path, error))?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for row in range.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| normalize_cell(&cell_to_string(cell)))
            .collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push(cells);
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
