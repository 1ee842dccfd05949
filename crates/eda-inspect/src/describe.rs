//! Descriptive statistics over numeric columns.

use eda_model::Table;

/// Summary statistics for one numeric column, computed over its present
/// values.
#[derive(Debug, Clone)]
pub struct NumericSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// One summary per numeric column with at least one present value, in
/// column order.
pub fn describe(table: &Table) -> Vec<NumericSummary> {
    let mut summaries = Vec::new();
    for (name, column) in table.columns() {
        let values: Vec<f64> = column
            .present_numeric()
            .into_iter()
            .map(|(_, value)| value)
            .collect();
        if values.is_empty() {
            continue;
        }
        let summary = NumericSummary {
            name: name.to_string(),
            count: values.len(),
            mean: eda_stats::mean(&values).unwrap_or(f64::NAN),
            std: eda_stats::std_dev(&values).unwrap_or(f64::NAN),
            min: eda_stats::min(&values).unwrap_or(f64::NAN),
            q1: eda_stats::quantile(&values, 0.25).unwrap_or(f64::NAN),
            median: eda_stats::median(&values).unwrap_or(f64::NAN),
            q3: eda_stats::quantile(&values, 0.75).unwrap_or(f64::NAN),
            max: eda_stats::max(&values).unwrap_or(f64::NAN),
        };
        summaries.push(summary);
    }
    summaries
}
