//! Property tests for the drop-missing policy.

use eda_clean::clean;
use eda_model::{CleaningOptions, Column, Table};
use proptest::prelude::*;

fn table_from(values: Vec<Option<f64>>, labels: Vec<Option<String>>) -> Table {
    Table::new(vec![
        ("value".to_string(), Column::Numeric(values)),
        ("label".to_string(), Column::Text(labels)),
    ])
    .expect("table")
}

proptest! {
    #[test]
    fn drop_missing_removes_all_and_only_missing_rows(
        rows in prop::collection::vec(
            (prop::option::of(-1e6_f64..1e6), prop::option::of("[a-z]{1,4}")),
            1..40,
        )
    ) {
        let values: Vec<Option<f64>> = rows.iter().map(|(value, _)| *value).collect();
        let labels: Vec<Option<String>> = rows.iter().map(|(_, label)| label.clone()).collect();
        let incomplete = rows
            .iter()
            .filter(|(value, label)| value.is_none() || label.is_none())
            .count();
        let table = table_from(values, labels);

        let (cleaned, _) = clean(&table, &CleaningOptions::default()).expect("clean");

        prop_assert_eq!(cleaned.row_count(), rows.len() - incomplete);
        for row in 0..cleaned.row_count() {
            prop_assert!(!cleaned.row_has_missing(row));
        }
    }

    #[test]
    fn diagnostics_never_change_the_returned_table(
        values in prop::collection::vec(prop::option::of(-1e3_f64..1e3), 1..30),
        threshold in 0.1_f64..5.0,
    ) {
        let labels = vec![Some("x".to_string()); values.len()];
        let table = table_from(values, labels);
        let options = CleaningOptions::default().with_threshold(threshold);

        let (cleaned, report) = clean(&table, &options).expect("clean");
        let (cleaned_again, _) = clean(&cleaned, &options).expect("clean again");

        // Whatever the duplicate/outlier counts, the table is unchanged
        // once missing values are gone.
        prop_assert_eq!(&cleaned, &cleaned_again);
        prop_assert!(report.outlier_rows.iter().all(|&row| row < cleaned.row_count()));
    }
}
