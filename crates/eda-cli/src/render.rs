//! Console rendering of cleaning and inspection reports.
//!
//! All computation happens in the library crates; this module only
//! formats. Plots are text-mode: unicode bars for histograms, ASCII box
//! plots.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use eda_clean::{CleaningReport, MissingAction};
use eda_inspect::{BoxPlot, Histogram, INSPECT_OUTLIER_THRESHOLD, InspectionReport};
use eda_model::{Table as DataTable, format_numeric};

const PREVIEW_ROWS: usize = 10;
const ROW_LIST_CAP: usize = 15;
const HISTOGRAM_BAR_WIDTH: usize = 40;
const BOX_PLOT_WIDTH: usize = 50;

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Statistic formatting: NaN renders as a dash, everything else with at
/// most four decimals.
fn stat_cell(value: f64) -> Cell {
    if value.is_nan() {
        dim_cell("-")
    } else {
        Cell::new(format_numeric((value * 1e4).round() / 1e4))
    }
}

/// Row indices joined for display, capped so one pathological column
/// cannot flood the console.
pub fn format_rows(rows: &[usize], cap: usize) -> String {
    if rows.is_empty() {
        return "-".to_string();
    }
    let mut rendered: Vec<String> = rows.iter().take(cap).map(usize::to_string).collect();
    if rows.len() > cap {
        rendered.push(format!("... (+{} more)", rows.len() - cap));
    }
    rendered.join(", ")
}

/// Bar of `count` scaled against `max_count` over `width` cells. A
/// non-zero count always shows at least one cell.
pub fn histogram_bar(count: usize, max_count: usize, width: usize) -> String {
    if count == 0 || max_count == 0 {
        return String::new();
    }
    let filled = (count * width).div_ceil(max_count).clamp(1, width);
    "█".repeat(filled)
}

/// ASCII box plot over `[min, max]`: `|` whisker ends, `=` box, `#`
/// median, `o` points beyond the whiskers.
pub fn render_box_plot(plot: &BoxPlot, width: usize) -> String {
    if width < 2 {
        return String::new();
    }
    let span = plot.max - plot.min;
    if !(span > 0.0) {
        return "#".to_string();
    }
    let position =
        |value: f64| ((((value - plot.min) / span) * (width - 1) as f64).round() as usize).min(width - 1);
    let mut cells = vec![' '; width];
    for cell in cells
        .iter_mut()
        .take(position(plot.upper_whisker) + 1)
        .skip(position(plot.lower_whisker))
    {
        *cell = '-';
    }
    for cell in cells
        .iter_mut()
        .take(position(plot.q3) + 1)
        .skip(position(plot.q1))
    {
        *cell = '=';
    }
    cells[position(plot.lower_whisker)] = '|';
    cells[position(plot.upper_whisker)] = '|';
    cells[position(plot.median)] = '#';
    if plot.min < plot.lower_whisker {
        cells[position(plot.min)] = 'o';
    }
    if plot.max > plot.upper_whisker {
        cells[position(plot.max)] = 'o';
    }
    cells.into_iter().collect()
}

fn print_histogram(name: &str, histogram: &Histogram) {
    println!("{name}");
    let max_count = histogram
        .bins
        .iter()
        .map(|bin| bin.count)
        .max()
        .unwrap_or(0);
    for bin in &histogram.bins {
        println!(
            "  [{:>10}, {:>10}) {} {}",
            format_numeric((bin.lower * 1e4).round() / 1e4),
            format_numeric((bin.upper * 1e4).round() / 1e4),
            histogram_bar(bin.count, max_count, HISTOGRAM_BAR_WIDTH),
            bin.count
        );
    }
}

/// First rows of a table, one comfy-table row per data row.
pub fn print_table_preview(table: &DataTable, limit: usize) {
    let mut preview = Table::new();
    preview.set_header(
        table
            .names()
            .iter()
            .map(|name| header_cell(name))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut preview);
    let shown = table.row_count().min(limit);
    for row in 0..shown {
        preview.add_row(
            table
                .columns()
                .map(|(_, column)| {
                    let value = column.display_value(row);
                    if value.is_empty() {
                        dim_cell("-")
                    } else {
                        Cell::new(value)
                    }
                })
                .collect::<Vec<_>>(),
        );
    }
    println!("{preview}");
    if table.row_count() > shown {
        println!("... {} more rows", table.row_count() - shown);
    }
}

pub fn print_cleaning_report(report: &CleaningReport, cleaned: &DataTable) {
    let mut missing = Table::new();
    missing.set_header(vec![header_cell("Column"), header_cell("Missing")]);
    apply_table_style(&mut missing);
    align_column(&mut missing, 1, CellAlignment::Right);
    for (name, count) in &report.missing_counts {
        missing.add_row(vec![Cell::new(name), count_cell(*count)]);
    }
    println!("Missing values per column:");
    println!("{missing}");

    match &report.action {
        MissingAction::None => println!("No missing values; table unchanged."),
        MissingAction::Dropped { rows } => {
            println!("Dropped {rows} rows with missing values.");
        }
        MissingAction::Filled { notes } => {
            let mut fills = Table::new();
            fills.set_header(vec![
                header_cell("Column"),
                header_cell("Strategy"),
                header_cell("Fill value"),
                header_cell("Filled"),
            ]);
            apply_table_style(&mut fills);
            align_column(&mut fills, 3, CellAlignment::Right);
            for note in notes {
                fills.add_row(vec![
                    Cell::new(&note.column),
                    Cell::new(note.strategy),
                    if note.value.is_empty() {
                        dim_cell("-")
                    } else {
                        Cell::new(&note.value)
                    },
                    count_cell(note.filled),
                ]);
            }
            println!("Filled missing values:");
            println!("{fills}");
        }
    }

    // Diagnostics only; both findings stay in the table.
    println!("Duplicate rows: {} (kept)", report.duplicate_rows);
    println!(
        "Potential outlier rows (|z| > {}): {} (kept){}",
        format_numeric(report.threshold),
        report.outlier_rows.len(),
        if report.outlier_rows.is_empty() {
            String::new()
        } else {
            format!(" at {}", format_rows(&report.outlier_rows, ROW_LIST_CAP))
        }
    );

    println!("Cleaned table ({} rows):", cleaned.row_count());
    print_table_preview(cleaned, PREVIEW_ROWS);
}

pub fn print_inspection_report(report: &InspectionReport) {
    println!(
        "The data has {} rows and {} columns.",
        report.shape.0, report.shape.1
    );

    let mut overview = Table::new();
    overview.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Missing"),
    ]);
    apply_table_style(&mut overview);
    align_column(&mut overview, 2, CellAlignment::Right);
    for ((name, dtype), (_, missing)) in report.dtypes.iter().zip(&report.missing_counts) {
        overview.add_row(vec![
            Cell::new(name),
            Cell::new(dtype.to_string()),
            count_cell(*missing),
        ]);
    }
    println!("{overview}");

    if !report.describe.is_empty() {
        let mut stats = Table::new();
        stats.set_header(vec![
            header_cell("Column"),
            header_cell("Count"),
            header_cell("Mean"),
            header_cell("Std"),
            header_cell("Min"),
            header_cell("25%"),
            header_cell("50%"),
            header_cell("75%"),
            header_cell("Max"),
        ]);
        apply_table_style(&mut stats);
        for index in 1..=8 {
            align_column(&mut stats, index, CellAlignment::Right);
        }
        for summary in &report.describe {
            stats.add_row(vec![
                Cell::new(&summary.name),
                Cell::new(summary.count),
                stat_cell(summary.mean),
                stat_cell(summary.std),
                stat_cell(summary.min),
                stat_cell(summary.q1),
                stat_cell(summary.median),
                stat_cell(summary.q3),
                stat_cell(summary.max),
            ]);
        }
        println!("Summary statistics for numeric columns:");
        println!("{stats}");
    }

    println!("Duplicate rows: {}", report.duplicate_rows);
    println!(
        "Potential outlier rows (|z| > {}): {}{}",
        format_numeric(INSPECT_OUTLIER_THRESHOLD),
        report.outlier_rows.len(),
        if report.outlier_rows.is_empty() {
            String::new()
        } else {
            format!(" at {}", format_rows(&report.outlier_rows, ROW_LIST_CAP))
        }
    );

    if !report.box_plots.is_empty() {
        println!("Box plots:");
        let label_width = report
            .box_plots
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);
        for (name, plot) in &report.box_plots {
            println!(
                "  {name:<label_width$} {} [{} .. {}]",
                render_box_plot(plot, BOX_PLOT_WIDTH),
                format_numeric(plot.min),
                format_numeric(plot.max),
            );
        }
    }

    for check in &report.range_checks {
        if check.violations.is_empty() {
            println!(
                "{} within [{}, {}].",
                check.column,
                format_numeric(check.lower),
                format_numeric(check.upper)
            );
        } else {
            println!(
                "{} outside [{}, {}] at rows {}.",
                check.column,
                format_numeric(check.lower),
                format_numeric(check.upper),
                format_rows(&check.violations, ROW_LIST_CAP)
            );
        }
    }

    if let Some(correlation) = &report.correlation {
        let mut matrix = Table::new();
        let mut header = vec![header_cell("")];
        header.extend(correlation.columns.iter().map(|name| header_cell(name)));
        matrix.set_header(header);
        apply_table_style(&mut matrix);
        for index in 1..=correlation.columns.len() {
            align_column(&mut matrix, index, CellAlignment::Right);
        }
        for (name, row) in correlation.columns.iter().zip(&correlation.values) {
            let mut cells = vec![header_cell(name)];
            cells.extend(row.iter().map(|&value| stat_cell(value)));
            matrix.add_row(cells);
        }
        println!("Correlation matrix:");
        println!("{matrix}");
    }

    if let Some(checks) = &report.skewness {
        let flagged: Vec<_> = checks.iter().filter(|check| check.flagged).collect();
        if flagged.is_empty() {
            println!("No skewed columns among those checked.");
        } else {
            println!("Columns with skewed distributions:");
            for check in flagged {
                println!(
                    "  {}: {}",
                    check.column,
                    format_numeric((check.skewness * 1e4).round() / 1e4)
                );
            }
        }
    }

    if !report.histograms.is_empty() {
        println!("Histograms:");
        for (name, histogram) in &report.histograms {
            print_histogram(name, histogram);
        }
    }

    // Time-series analysis is a placeholder step; the header keeps the
    // report section order stable.
    println!("Time-related patterns:");
}
