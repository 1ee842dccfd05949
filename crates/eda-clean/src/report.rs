//! Structured results of a cleaning pass. Rendering lives with the
//! caller; nothing here prints.

/// Fill strategy applied to one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStrategy {
    /// Numeric columns: column median.
    Median,
    /// Text columns: most frequent value, first seen wins ties.
    Mode,
    /// Boolean columns: majority value.
    Majority,
    /// Datetime columns: forward fill, then backward fill.
    ForwardFill,
    /// Column had no present values to derive a fill from.
    Skipped,
}

impl std::fmt::Display for FillStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Median => write!(f, "median"),
            Self::Mode => write!(f, "mode"),
            Self::Majority => write!(f, "majority"),
            Self::ForwardFill => write!(f, "forward-fill"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

/// One column's imputation outcome.
#[derive(Debug, Clone)]
pub struct FillNote {
    pub column: String,
    pub strategy: FillStrategy,
    /// Rendered fill value; empty for forward-fill and skipped columns.
    pub value: String,
    pub filled: usize,
}

/// What happened to missing values.
#[derive(Debug, Clone)]
pub enum MissingAction {
    /// No missing values; the table passed through unchanged.
    None,
    /// Rows containing missing values were removed.
    Dropped { rows: usize },
    /// Missing values were imputed per column type.
    Filled { notes: Vec<FillNote> },
}

/// Diagnostics from one cleaning pass.
///
/// Duplicate and outlier counts describe the *returned* table; both are
/// report-only and never change it.
#[derive(Debug, Clone)]
pub struct CleaningReport {
    /// Missing-value count per column of the input table.
    pub missing_counts: Vec<(String, usize)>,
    pub action: MissingAction,
    pub duplicate_rows: usize,
    /// Rows where some numeric cell's |z-score| exceeds the threshold.
    pub outlier_rows: Vec<usize>,
    pub threshold: f64,
}

impl CleaningReport {
    pub fn total_missing(&self) -> usize {
        self.missing_counts.iter().map(|(_, count)| count).sum()
    }
}
