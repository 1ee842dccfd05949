//! Domain sanity-range checks over well-known measurement columns.

use eda_model::{Column, Table};

/// Hardcoded plausibility bounds, applied only when the named column
/// exists and is numeric.
const RANGE_CHECKS: [(&str, f64, f64); 2] = [("Height", 100.0, 250.0), ("Weight", 20.0, 200.0)];

/// Result of one sanity-range check.
#[derive(Debug, Clone)]
pub struct RangeCheck {
    pub column: String,
    pub lower: f64,
    pub upper: f64,
    /// Rows whose value falls outside `[lower, upper]`.
    pub violations: Vec<usize>,
}

/// Runs every applicable range check. Missing cells never violate.
pub fn check_ranges(table: &Table) -> Vec<RangeCheck> {
    let mut checks = Vec::new();
    for (name, lower, upper) in RANGE_CHECKS {
        let Some(column) = table.column(name) else {
            continue;
        };
        if !matches!(column, Column::Numeric(_)) {
            continue;
        }
        let violations = column
            .present_numeric()
            .into_iter()
            .filter(|&(_, value)| value < lower || value > upper)
            .map(|(row, _)| row)
            .collect();
        checks.push(RangeCheck {
            column: name.to_string(),
            lower,
            upper,
            violations,
        });
    }
    checks
}
