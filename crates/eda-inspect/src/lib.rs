pub mod correlate;
pub mod describe;
pub mod plot;
pub mod ranges;
pub mod report;
pub mod skew;

pub use correlate::{CorrelationMatrix, correlation_matrix};
pub use describe::{NumericSummary, describe};
pub use plot::{BoxPlot, Histogram, HistogramBin, build_box_plot, build_histogram};
pub use ranges::{RangeCheck, check_ranges};
pub use report::{INSPECT_OUTLIER_THRESHOLD, InspectionReport, inspect};
pub use skew::{SKEW_FLAG_THRESHOLD, SkewCheck, skewness_checks};
