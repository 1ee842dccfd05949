//! Column type inference over raw string cells.
//!
//! Every loader produces a [`RawTable`] of trimmed string cells; this
//! module decides each column's type by trying candidate parses over the
//! present cells (boolean, then numeric, then datetime, else text) and
//! materializes the typed [`Table`].

use chrono::{NaiveDate, NaiveDateTime};

use eda_model::{Column, Result, Table};

/// Header row plus data rows, all as strings. The intermediate shape
/// shared by the CSV, XLSX, and JSON readers.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Markers treated as missing values, compared case-insensitively after
/// trimming.
fn is_missing_marker(cell: &str) -> bool {
    cell.is_empty()
        || matches!(
            cell.to_ascii_lowercase().as_str(),
            "na" | "n/a" | "nan" | "null" | "none"
        )
}

fn parse_bool(cell: &str) -> Option<bool> {
    match cell.to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

fn parse_datetime(cell: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(value) = NaiveDateTime::parse_from_str(cell, format) {
            return Some(value);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(value) = NaiveDate::parse_from_str(cell, format) {
            return value.and_hms_opt(0, 0, 0);
        }
    }
    None
}

fn infer_column(cells: &[String]) -> Column {
    let present: Vec<&str> = cells
        .iter()
        .map(String::as_str)
        .filter(|cell| !is_missing_marker(cell))
        .collect();

    if !present.is_empty() && present.iter().all(|cell| parse_bool(cell).is_some()) {
        return Column::Boolean(
            cells
                .iter()
                .map(|cell| {
                    if is_missing_marker(cell) {
                        None
                    } else {
                        parse_bool(cell)
                    }
                })
                .collect(),
        );
    }
    if !present.is_empty()
        && present
            .iter()
            .all(|cell| cell.parse::<f64>().is_ok_and(f64::is_finite))
    {
        return Column::Numeric(
            cells
                .iter()
                .map(|cell| {
                    if is_missing_marker(cell) {
                        None
                    } else {
                        cell.parse::<f64>().ok()
                    }
                })
                .collect(),
        );
    }
    if !present.is_empty() && present.iter().all(|cell| parse_datetime(cell).is_some()) {
        return Column::Datetime(
            cells
                .iter()
                .map(|cell| {
                    if is_missing_marker(cell) {
                        None
                    } else {
                        parse_datetime(cell)
                    }
                })
                .collect(),
        );
    }
    Column::Text(
        cells
            .iter()
            .map(|cell| {
                if is_missing_marker(cell) {
                    None
                } else {
                    Some(cell.clone())
                }
            })
            .collect(),
    )
}

/// Materializes a typed table from raw cells. Rows shorter than the
/// header are padded with missing; longer rows are truncated.
pub fn build_table(raw: &RawTable) -> Result<Table> {
    let mut columns = Vec::with_capacity(raw.headers.len());
    for (index, header) in raw.headers.iter().enumerate() {
        let cells: Vec<String> = raw
            .rows
            .iter()
            .map(|row| row.get(index).cloned().unwrap_or_default())
            .collect();
        columns.push((header.clone(), infer_column(&cells)));
    }
    Table::new(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eda_model::DataType;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| (*cell).to_string()).collect()
    }

    #[test]
    fn missing_markers_recognized() {
        for marker in ["", "NA", "n/a", "NaN", "null", "None"] {
            assert!(is_missing_marker(marker), "{marker:?} should be missing");
        }
        assert!(!is_missing_marker("0"));
        assert!(!is_missing_marker("nap"));
    }

    #[test]
    fn numeric_column_inferred() {
        let column = infer_column(&strings(&["1", "2.5", "NA", "-3e2"]));
        assert_eq!(column.data_type(), DataType::Numeric);
        assert_eq!(column.missing_count(), 1);
    }

    #[test]
    fn boolean_column_inferred() {
        let column = infer_column(&strings(&["true", "FALSE", ""]));
        assert_eq!(column.data_type(), DataType::Boolean);
        assert_eq!(column.missing_count(), 1);
    }

    #[test]
    fn datetime_column_inferred() {
        let column = infer_column(&strings(&["2024-01-15", "2024-02-01 08:30:00"]));
        assert_eq!(column.data_type(), DataType::Datetime);
    }

    #[test]
    fn mixed_column_falls_back_to_text() {
        let column = infer_column(&strings(&["1", "two", "3"]));
        assert_eq!(column.data_type(), DataType::Text);
    }

    #[test]
    fn all_missing_column_is_text() {
        let column = infer_column(&strings(&["", "NA"]));
        assert_eq!(column.data_type(), DataType::Text);
        assert_eq!(column.missing_count(), 2);
    }

    #[test]
    fn short_rows_pad_with_missing() {
        let raw = RawTable {
            headers: vec!["a".to_string(), "b".to_string()],
            rows: vec![strings(&["1", "2"]), strings(&["3"])],
        };
        let table = build_table(&raw).expect("build");
        assert_eq!(table.row_count(), 2);
        let b = table.column("b").expect("column b");
        assert_eq!(b.missing_count(), 1);
    }

    #[test]
    fn header_normalization_collapses_whitespace() {
        assert_eq!(normalize_header("  Site   name \u{feff}"), "Site name");
    }
}
