use tracing::{debug, info};

use eda_model::{CleaningOptions, MissingPolicy, Result, Table};

use crate::duplicates::duplicate_row_count;
use crate::missing::{drop_missing, fill_missing, missing_counts};
use crate::outliers::outlier_rows;
use crate::report::{CleaningReport, MissingAction};

/// Cleans a table according to `options`.
///
/// Fixed step order: count missing values, apply the missing-value
/// policy, count duplicates, flag z-score outliers. Duplicates and
/// outliers are diagnostic only; the returned table is the table as of
/// the missing-value step. The cleaning method is validated up front, so
/// an unrecognized value aborts before any work.
pub fn clean(table: &Table, options: &CleaningOptions) -> Result<(Table, CleaningReport)> {
    let policy = MissingPolicy::parse(&options.method)?;

    let missing = missing_counts(table);
    let total_missing: usize = missing.iter().map(|(_, count)| count).sum();
    debug!(total_missing, "scanned for missing values");

    let (cleaned, action) = if total_missing == 0 {
        (table.clone(), MissingAction::None)
    } else {
        match policy {
            MissingPolicy::Drop => {
                let cleaned = drop_missing(table);
                let rows = table.row_count() - cleaned.row_count();
                info!(rows, "dropped rows with missing values");
                (cleaned, MissingAction::Dropped { rows })
            }
            MissingPolicy::Fill => {
                let (cleaned, notes) = fill_missing(table)?;
                info!(columns = notes.len(), "filled missing values");
                (cleaned, MissingAction::Filled { notes })
            }
        }
    };

    let duplicate_rows = duplicate_row_count(&cleaned);
    let outliers = outlier_rows(&cleaned, options.threshold);
    debug!(
        duplicates = duplicate_rows,
        outliers = outliers.len(),
        "diagnostics computed"
    );

    let report = CleaningReport {
        missing_counts: missing,
        action,
        duplicate_rows,
        outlier_rows: outliers,
        threshold: options.threshold,
    };
    Ok((cleaned, report))
}
