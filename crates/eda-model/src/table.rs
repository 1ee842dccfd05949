use std::collections::BTreeSet;
use std::fmt::Write as _;

use chrono::NaiveDateTime;

use crate::error::{EdaError, Result};

/// Inferred type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DataType {
    Numeric,
    Boolean,
    Datetime,
    Text,
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric => write!(f, "numeric"),
            Self::Boolean => write!(f, "boolean"),
            Self::Datetime => write!(f, "datetime"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// A single column of values, all of one inferred type. `None` marks a
/// missing value; numeric NaN is treated as missing as well so that both
/// spellings behave identically downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<Option<f64>>),
    Boolean(Vec<Option<bool>>),
    Datetime(Vec<Option<NaiveDateTime>>),
    Text(Vec<Option<String>>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(values) => values.len(),
            Self::Boolean(values) => values.len(),
            Self::Datetime(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Self::Numeric(_) => DataType::Numeric,
            Self::Boolean(_) => DataType::Boolean,
            Self::Datetime(_) => DataType::Datetime,
            Self::Text(_) => DataType::Text,
        }
    }

    pub fn is_missing(&self, row: usize) -> bool {
        match self {
            Self::Numeric(values) => match values.get(row) {
                Some(Some(value)) => value.is_nan(),
                _ => true,
            },
            Self::Boolean(values) => !matches!(values.get(row), Some(Some(_))),
            Self::Datetime(values) => !matches!(values.get(row), Some(Some(_))),
            Self::Text(values) => !matches!(values.get(row), Some(Some(_))),
        }
    }

    pub fn missing_count(&self) -> usize {
        (0..self.len()).filter(|&row| self.is_missing(row)).count()
    }

    /// Present (non-missing) numeric values with their row indices.
    /// Empty for non-numeric columns.
    pub fn present_numeric(&self) -> Vec<(usize, f64)> {
        match self {
            Self::Numeric(values) => values
                .iter()
                .enumerate()
                .filter_map(|(row, value)| value.filter(|v| !v.is_nan()).map(|v| (row, v)))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Renders the value at `row` for display; missing values render empty.
    pub fn display_value(&self, row: usize) -> String {
        if self.is_missing(row) {
            return String::new();
        }
        match self {
            Self::Numeric(values) => format_numeric(values[row].unwrap_or_default()),
            Self::Boolean(values) => values[row].unwrap_or_default().to_string(),
            Self::Datetime(values) => values[row]
                .map(|value| value.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            Self::Text(values) => values[row].clone().unwrap_or_default(),
        }
    }

    fn append_key(&self, row: usize, key: &mut String) {
        if self.is_missing(row) {
            key.push_str("\u{0}NULL");
            return;
        }
        match self {
            // Bit pattern avoids float formatting ambiguity.
            Self::Numeric(values) => {
                let _ = write!(key, "{}", values[row].unwrap_or_default().to_bits());
            }
            Self::Boolean(values) => key.push(if values[row] == Some(true) { 'T' } else { 'F' }),
            Self::Datetime(values) => {
                if let Some(value) = values[row] {
                    let _ = write!(key, "{}", value.and_utc().timestamp_micros());
                }
            }
            Self::Text(values) => {
                if let Some(value) = &values[row] {
                    key.push_str(value);
                }
            }
        }
    }

    fn filtered(&self, keep: &[bool]) -> Self {
        fn retain<T: Clone>(values: &[Option<T>], keep: &[bool]) -> Vec<Option<T>> {
            values
                .iter()
                .zip(keep)
                .filter_map(|(value, &flag)| flag.then(|| value.clone()))
                .collect()
        }
        match self {
            Self::Numeric(values) => Self::Numeric(retain(values, keep)),
            Self::Boolean(values) => Self::Boolean(retain(values, keep)),
            Self::Datetime(values) => Self::Datetime(retain(values, keep)),
            Self::Text(values) => Self::Text(retain(values, keep)),
        }
    }
}

/// Formats a floating-point number without trailing zeros.
pub fn format_numeric(value: f64) -> String {
    let rendered = format!("{value}");
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

/// An in-memory, column-oriented table. Columns are uniquely named and
/// order-preserving; every column holds the same number of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl Table {
    /// Builds a table, validating that columns share one length and that
    /// no name repeats.
    pub fn new(columns: Vec<(String, Column)>) -> Result<Self> {
        let expected = columns.first().map_or(0, |(_, column)| column.len());
        let mut seen = BTreeSet::new();
        for (name, column) in &columns {
            if !seen.insert(name.clone()) {
                return Err(EdaError::DuplicateColumn(name.clone()));
            }
            if column.len() != expected {
                return Err(EdaError::ShapeMismatch {
                    column: name.clone(),
                    expected,
                    actual: column.len(),
                });
            }
        }
        let (names, columns) = columns.into_iter().unzip();
        Ok(Self { names, columns })
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.names
            .iter()
            .position(|candidate| candidate == name)
            .map(|index| &self.columns[index])
    }

    pub fn dtypes(&self) -> Vec<(String, DataType)> {
        self.columns()
            .map(|(name, column)| (name.to_string(), column.data_type()))
            .collect()
    }

    /// True when any cell in `row` is missing.
    pub fn row_has_missing(&self, row: usize) -> bool {
        self.columns.iter().any(|column| column.is_missing(row))
    }

    /// Equality key for duplicate detection: all cells joined with a unit
    /// separator, missing cells marked out-of-band.
    pub fn row_key(&self, row: usize) -> String {
        let mut key = String::new();
        for (index, column) in self.columns.iter().enumerate() {
            if index > 0 {
                key.push('\u{1F}');
            }
            column.append_key(row, &mut key);
        }
        key
    }

    /// New table keeping only the rows where `keep` is true.
    /// `keep` must have one entry per row.
    pub fn filter_rows(&self, keep: &[bool]) -> Self {
        debug_assert_eq!(keep.len(), self.row_count());
        Self {
            names: self.names.clone(),
            columns: self
                .columns
                .iter()
                .map(|column| column.filtered(keep))
                .collect(),
        }
    }
}
