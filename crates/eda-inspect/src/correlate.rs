//! Pearson correlation over a caller-selected column subset.

use tracing::warn;

use eda_model::{Column, Table};

/// Square correlation matrix. `values[i][j]` is the Pearson coefficient
/// of `columns[i]` against `columns[j]`, or NaN when undefined (zero
/// variance or fewer than two complete pairs).
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

fn numeric_cells<'a>(table: &'a Table, name: &str) -> Option<&'a [Option<f64>]> {
    match table.column(name) {
        Some(Column::Numeric(values)) => Some(values),
        Some(_) => {
            warn!(column = name, "requested column is not numeric, skipping");
            None
        }
        None => {
            warn!(column = name, "requested column not found, skipping");
            None
        }
    }
}

/// Pairwise-complete Pearson correlation over `requested` columns.
/// Unknown or non-numeric names are skipped with a warning; `None` when
/// nothing was requested or nothing resolved.
pub fn correlation_matrix(table: &Table, requested: &[String]) -> Option<CorrelationMatrix> {
    if requested.is_empty() {
        return None;
    }
    let resolved: Vec<(&str, &[Option<f64>])> = requested
        .iter()
        .filter_map(|name| numeric_cells(table, name).map(|cells| (name.as_str(), cells)))
        .collect();
    if resolved.is_empty() {
        return None;
    }

    let size = resolved.len();
    let mut values = vec![vec![f64::NAN; size]; size];
    for i in 0..size {
        values[i][i] = 1.0;
        for j in (i + 1)..size {
            let (mut xs, mut ys) = (Vec::new(), Vec::new());
            for (x, y) in resolved[i].1.iter().zip(resolved[j].1) {
                if let (Some(x), Some(y)) = (x, y)
                    && !x.is_nan()
                    && !y.is_nan()
                {
                    xs.push(*x);
                    ys.push(*y);
                }
            }
            let r = eda_stats::pearson(&xs, &ys).unwrap_or(f64::NAN);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Some(CorrelationMatrix {
        columns: resolved
            .iter()
            .map(|(name, _)| (*name).to_string())
            .collect(),
        values,
    })
}
