//! Missing-value accounting and remediation.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use eda_model::{Column, Result, Table, format_numeric};

use crate::report::{FillNote, FillStrategy};

/// Missing-value count per column, in column order.
pub fn missing_counts(table: &Table) -> Vec<(String, usize)> {
    table
        .columns()
        .map(|(name, column)| (name.to_string(), column.missing_count()))
        .collect()
}

/// New table without any row that has a missing value in any column.
pub fn drop_missing(table: &Table) -> Table {
    let keep: Vec<bool> = (0..table.row_count())
        .map(|row| !table.row_has_missing(row))
        .collect();
    table.filter_rows(&keep)
}

/// Most frequent value; ties resolve to the value seen first.
fn mode<T: Clone + Eq + std::hash::Hash>(values: impl Iterator<Item = T>) -> Option<T> {
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (position, value) in values.enumerate() {
        let entry = counts.entry(value).or_insert((0, position));
        entry.0 += 1;
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1.0.cmp(&b.1.0).then(b.1.1.cmp(&a.1.1)))
        .map(|(value, _)| value)
}

fn fill_numeric(values: &[Option<f64>]) -> (Vec<Option<f64>>, Option<FillStrategy>, String, usize) {
    let present: Vec<f64> = values
        .iter()
        .filter_map(|value| value.filter(|v| !v.is_nan()))
        .collect();
    let Some(median) = eda_stats::median(&present) else {
        return (values.to_vec(), Some(FillStrategy::Skipped), String::new(), 0);
    };
    let mut filled = 0;
    let out = values
        .iter()
        .map(|value| match value {
            Some(v) if !v.is_nan() => Some(*v),
            _ => {
                filled += 1;
                Some(median)
            }
        })
        .collect();
    (out, Some(FillStrategy::Median), format_numeric(median), filled)
}

fn fill_text(values: &[Option<String>]) -> (Vec<Option<String>>, Option<FillStrategy>, String, usize) {
    let Some(fill) = mode(values.iter().flatten().cloned()) else {
        return (values.to_vec(), Some(FillStrategy::Skipped), String::new(), 0);
    };
    let mut filled = 0;
    let out = values
        .iter()
        .map(|value| {
            value.clone().or_else(|| {
                filled += 1;
                Some(fill.clone())
            })
        })
        .collect();
    (out, Some(FillStrategy::Mode), fill, filled)
}

fn fill_boolean(values: &[Option<bool>]) -> (Vec<Option<bool>>, Option<FillStrategy>, String, usize) {
    let Some(fill) = mode(values.iter().flatten().copied()) else {
        return (values.to_vec(), Some(FillStrategy::Skipped), String::new(), 0);
    };
    let trues = values.iter().flatten().filter(|&&v| v).count();
    let falses = values.iter().flatten().filter(|&&v| !v).count();
    let fill = if trues == falses { fill } else { trues > falses };
    let mut filled = 0;
    let out = values
        .iter()
        .map(|value| {
            value.or_else(|| {
                filled += 1;
                Some(fill)
            })
        })
        .collect();
    (out, Some(FillStrategy::Majority), fill.to_string(), filled)
}

fn fill_datetime(
    values: &[Option<NaiveDateTime>],
) -> (Vec<Option<NaiveDateTime>>, Option<FillStrategy>, String, usize) {
    if values.iter().all(Option::is_none) {
        return (values.to_vec(), Some(FillStrategy::Skipped), String::new(), 0);
    }
    let mut out = values.to_vec();
    let mut last = None;
    for slot in &mut out {
        match slot {
            Some(value) => last = Some(*value),
            None => *slot = last,
        }
    }
    let mut next = None;
    for slot in out.iter_mut().rev() {
        match slot {
            Some(value) => next = Some(*value),
            None => *slot = next,
        }
    }
    let filled = values.iter().filter(|value| value.is_none()).count();
    (out, Some(FillStrategy::ForwardFill), String::new(), filled)
}

/// Imputes missing values with a column-type-appropriate fill:
/// numeric → median, text → mode, boolean → majority value, datetime →
/// forward then backward fill. A column with no present values is left
/// untouched and noted as skipped.
pub fn fill_missing(table: &Table) -> Result<(Table, Vec<FillNote>)> {
    let mut columns = Vec::with_capacity(table.column_count());
    let mut notes = Vec::new();
    for (name, column) in table.columns() {
        if column.missing_count() == 0 {
            columns.push((name.to_string(), column.clone()));
            continue;
        }
        let (column, strategy, value, filled) = match column {
            Column::Numeric(values) => {
                let (out, strategy, value, filled) = fill_numeric(values);
                (Column::Numeric(out), strategy, value, filled)
            }
            Column::Text(values) => {
                let (out, strategy, value, filled) = fill_text(values);
                (Column::Text(out), strategy, value, filled)
            }
            Column::Boolean(values) => {
                let (out, strategy, value, filled) = fill_boolean(values);
                (Column::Boolean(out), strategy, value, filled)
            }
            Column::Datetime(values) => {
                let (out, strategy, value, filled) = fill_datetime(values);
                (Column::Datetime(out), strategy, value, filled)
            }
        };
        if let Some(strategy) = strategy {
            notes.push(FillNote {
                column: name.to_string(),
                strategy,
                value,
                filled,
            });
        }
        columns.push((name.to_string(), column));
    }
    let table = Table::new(columns)?;
    Ok((table, notes))
}
