pub mod clean;
pub mod duplicates;
pub mod missing;
pub mod outliers;
pub mod report;

pub use clean::clean;
pub use duplicates::duplicate_row_count;
pub use missing::{drop_missing, fill_missing, missing_counts};
pub use outliers::outlier_rows;
pub use report::{CleaningReport, FillNote, FillStrategy, MissingAction};
