//! Duplicate-row detection. Reporting only: nothing here removes rows.

use std::collections::HashSet;

use eda_model::Table;

/// Number of rows identical to an earlier row across all columns
/// (missing status included). The first occurrence does not count.
pub fn duplicate_row_count(table: &Table) -> usize {
    let rows = table.row_count();
    if rows <= 1 {
        return 0;
    }
    let mut seen = HashSet::with_capacity(rows);
    (0..rows)
        .filter(|&row| !seen.insert(table.row_key(row)))
        .count()
}
