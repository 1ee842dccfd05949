//! The inspection pipeline: a fixed sequence of read-only analyses
//! bundled into one transient report.

use tracing::debug;

use eda_clean::{duplicate_row_count, missing_counts, outlier_rows};
use eda_model::{DataType, InspectOptions, Table};

use crate::correlate::{CorrelationMatrix, correlation_matrix};
use crate::describe::{NumericSummary, describe};
use crate::plot::{BoxPlot, Histogram, build_box_plot, build_histogram};
use crate::ranges::{RangeCheck, check_ranges};
use crate::skew::{SkewCheck, skewness_checks};

/// Outlier threshold used by inspection, independent of any cleaning
/// threshold.
pub const INSPECT_OUTLIER_THRESHOLD: f64 = 3.0;

/// Everything one inspection pass computes. Lives only for the duration
/// of the call; nothing is persisted.
#[derive(Debug, Clone)]
pub struct InspectionReport {
    /// (rows, columns).
    pub shape: (usize, usize),
    pub dtypes: Vec<(String, DataType)>,
    pub missing_counts: Vec<(String, usize)>,
    pub describe: Vec<NumericSummary>,
    pub duplicate_rows: usize,
    pub outlier_rows: Vec<usize>,
    pub box_plots: Vec<(String, BoxPlot)>,
    pub range_checks: Vec<RangeCheck>,
    /// Present only when correlation columns were requested.
    pub correlation: Option<CorrelationMatrix>,
    /// Present only when skewness columns were requested.
    pub skewness: Option<Vec<SkewCheck>>,
    pub histograms: Vec<(String, Histogram)>,
}

fn numeric_values(table: &Table) -> Vec<(String, Vec<f64>)> {
    table
        .columns()
        .filter_map(|(name, column)| {
            let values: Vec<f64> = column
                .present_numeric()
                .into_iter()
                .map(|(_, value)| value)
                .collect();
            if values.is_empty() {
                None
            } else {
                Some((name.to_string(), values))
            }
        })
        .collect()
}

/// Inspects a table. Steps run in a fixed order; only correlation and
/// skewness are conditional, gated on their option lists being
/// non-empty.
pub fn inspect(table: &Table, options: &InspectOptions) -> InspectionReport {
    let shape = (table.row_count(), table.column_count());
    debug!(rows = shape.0, columns = shape.1, "inspecting table");

    let dtypes = table.dtypes();
    let missing = missing_counts(table);
    let summaries = describe(table);
    let duplicate_rows = duplicate_row_count(table);
    let outliers = outlier_rows(table, INSPECT_OUTLIER_THRESHOLD);

    let numeric = numeric_values(table);
    let box_plots = numeric
        .iter()
        .filter_map(|(name, values)| {
            build_box_plot(values).map(|plot| (name.clone(), plot))
        })
        .collect();
    let range_checks = check_ranges(table);
    let correlation = correlation_matrix(table, &options.corr_columns);
    let skewness = skewness_checks(table, &options.skew_columns);
    let histograms = numeric
        .iter()
        .map(|(name, values)| (name.clone(), build_histogram(values)))
        .collect();

    InspectionReport {
        shape,
        dtypes,
        missing_counts: missing,
        describe: summaries,
        duplicate_rows,
        outlier_rows: outliers,
        box_plots,
        range_checks,
        correlation,
        skewness,
        histograms,
    }
}
