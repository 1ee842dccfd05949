//! Skewness checks over a caller-selected column subset.

use tracing::warn;

use eda_model::{Column, Table};

/// A column's skewness magnitude above this flags the distribution as
/// asymmetric.
pub const SKEW_FLAG_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct SkewCheck {
    pub column: String,
    pub skewness: f64,
    /// True when |skewness| exceeds [`SKEW_FLAG_THRESHOLD`].
    pub flagged: bool,
}

/// Skewness of each requested numeric column. Unknown or non-numeric
/// names are skipped with a warning; `None` when nothing was requested
/// or nothing resolved.
pub fn skewness_checks(table: &Table, requested: &[String]) -> Option<Vec<SkewCheck>> {
    if requested.is_empty() {
        return None;
    }
    let mut checks = Vec::new();
    for name in requested {
        let Some(column) = table.column(name) else {
            warn!(column = %name, "requested column not found, skipping");
            continue;
        };
        if !matches!(column, Column::Numeric(_)) {
            warn!(column = %name, "requested column is not numeric, skipping");
            continue;
        }
        let values: Vec<f64> = column
            .present_numeric()
            .into_iter()
            .map(|(_, value)| value)
            .collect();
        let Some(skewness) = eda_stats::skewness(&values) else {
            continue;
        };
        checks.push(SkewCheck {
            column: name.clone(),
            skewness,
            flagged: skewness.abs() > SKEW_FLAG_THRESHOLD,
        });
    }
    if checks.is_empty() { None } else { Some(checks) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::new(vec![
            (
                "uniform".to_string(),
                Column::Numeric((1..=9).map(|i| Some(f64::from(i))).collect()),
            ),
            (
                "tailed".to_string(),
                Column::Numeric(vec![
                    Some(1.0),
                    Some(1.0),
                    Some(1.0),
                    Some(1.0),
                    Some(1.0),
                    Some(1.0),
                    Some(1.0),
                    Some(1.0),
                    Some(20.0),
                ]),
            ),
        ])
        .expect("table")
    }

    #[test]
    fn empty_request_skips_skewness() {
        assert!(skewness_checks(&table(), &[]).is_none());
    }

    #[test]
    fn symmetric_column_unflagged() {
        let checks = skewness_checks(&table(), &["uniform".to_string()]).expect("checks");
        assert_eq!(checks.len(), 1);
        assert!(!checks[0].flagged);
        assert!(checks[0].skewness.abs() < 0.1);
    }

    #[test]
    fn tailed_column_flagged() {
        let checks = skewness_checks(&table(), &["tailed".to_string()]).expect("checks");
        assert!(checks[0].flagged);
        assert!(checks[0].skewness > SKEW_FLAG_THRESHOLD);
    }

    #[test]
    fn unknown_column_skipped() {
        assert!(skewness_checks(&table(), &["ghost".to_string()]).is_none());
    }
}
