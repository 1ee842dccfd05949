//! Z-score outlier detection. Reporting only: nothing here removes rows.

use eda_model::Table;

/// Rows where any numeric cell's |z-score| exceeds `threshold`, using
/// each column's own mean and sample standard deviation over its present
/// values. Zero-variance and under-populated columns flag nothing.
pub fn outlier_rows(table: &Table, threshold: f64) -> Vec<usize> {
    let mut flagged = vec![false; table.row_count()];
    for (_, column) in table.columns() {
        let present = column.present_numeric();
        if present.len() < 2 {
            continue;
        }
        let values: Vec<f64> = present.iter().map(|&(_, value)| value).collect();
        let Some(mean) = eda_stats::mean(&values) else {
            continue;
        };
        let Some(std) = eda_stats::std_dev(&values) else {
            continue;
        };
        if std == 0.0 {
            continue;
        }
        for &(row, value) in &present {
            if ((value - mean) / std).abs() > threshold {
                flagged[row] = true;
            }
        }
    }
    flagged
        .iter()
        .enumerate()
        .filter_map(|(row, &hit)| hit.then_some(row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eda_model::Column;

    fn numeric_table(values: Vec<Option<f64>>) -> Table {
        Table::new(vec![("x".to_string(), Column::Numeric(values))]).expect("table")
    }

    #[test]
    fn extreme_value_flagged() {
        let mut values: Vec<Option<f64>> = (0..50).map(|i| Some(f64::from(i))).collect();
        values.push(Some(500.0));
        let table = numeric_table(values);
        let rows = outlier_rows(&table, 3.0);
        assert_eq!(rows, vec![50]);
    }

    #[test]
    fn uniform_data_unflagged() {
        let table = numeric_table((1..=10).map(|i| Some(f64::from(i))).collect());
        assert!(outlier_rows(&table, 3.0).is_empty());
    }

    #[test]
    fn zero_variance_unflagged() {
        let table = numeric_table(vec![Some(5.0); 10]);
        assert!(outlier_rows(&table, 0.1).is_empty());
    }

    #[test]
    fn missing_cells_skipped() {
        let mut values: Vec<Option<f64>> = (0..30).map(|i| Some(f64::from(i))).collect();
        values.push(None);
        values.push(Some(400.0));
        let table = numeric_table(values);
        let rows = outlier_rows(&table, 3.0);
        assert_eq!(rows, vec![31]);
    }

    #[test]
    fn threshold_respected() {
        let mut values: Vec<Option<f64>> = (0..50).map(|i| Some(f64::from(i))).collect();
        values.push(Some(500.0));
        let table = numeric_table(values);
        // At an absurdly high threshold nothing qualifies.
        assert!(outlier_rows(&table, 100.0).is_empty());
    }
}
