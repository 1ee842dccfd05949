//! Configuration options for cleaning and inspection.

use serde::{Deserialize, Serialize};

use crate::error::{EdaError, Result};

/// How missing values are handled during cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Drop every row containing at least one missing value.
    Drop,
    /// Impute missing values with a column-type-appropriate fill.
    Fill,
}

impl MissingPolicy {
    /// Parses a cleaning method string. Anything other than the two
    /// recognized values is rejected.
    pub fn parse(method: &str) -> Result<Self> {
        match method {
            "drop-missing" => Ok(Self::Drop),
            "fill-missing" => Ok(Self::Fill),
            other => Err(EdaError::InvalidCleaningMethod(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Drop => "drop-missing",
            Self::Fill => "fill-missing",
        }
    }
}

/// Options controlling cleaning behavior.
///
/// `method` is kept as a raw string and parsed when cleaning runs, so an
/// unrecognized value surfaces as `InvalidCleaningMethod` at that point
/// rather than at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningOptions {
    /// Missing-value handling: "drop-missing" or "fill-missing".
    pub method: String,
    /// Absolute z-score above which a value flags its row as an outlier.
    pub threshold: f64,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            method: MissingPolicy::Drop.as_str().to_string(),
            threshold: 3.0,
        }
    }
}

impl CleaningOptions {
    pub fn with_method(mut self, method: &str) -> Self {
        self.method = method.to_string();
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Options controlling inspection behavior. Empty column lists skip the
/// corresponding analysis step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InspectOptions {
    /// Columns for the correlation matrix; empty skips correlation.
    pub corr_columns: Vec<String>,
    /// Columns for the skewness check; empty skips skewness.
    pub skew_columns: Vec<String>,
}

impl InspectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_corr_columns(mut self, columns: Vec<String>) -> Self {
        self.corr_columns = columns;
        self
    }

    pub fn with_skew_columns(mut self, columns: Vec<String>) -> Self {
        self.skew_columns = columns;
        self
    }
}
