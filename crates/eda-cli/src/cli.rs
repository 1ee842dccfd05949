//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "eda",
    version,
    about = "Exploratory data analysis for tabular files",
    long_about = "Load a CSV, XLSX, or JSON dataset, report data quality\n\
                  (missing values, duplicates, outliers), and inspect it\n\
                  with summary statistics, correlation, and text plots."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Inspect a dataset: shape, stats, duplicates, outliers, plots.
    Inspect(InspectArgs),

    /// Clean a dataset: handle missing values, report duplicates and outliers.
    Clean(CleanArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the dataset (absolute path to a CSV, XLSX, or JSON file).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Columns for the correlation matrix (comma separated).
    #[arg(long = "corr", value_name = "COLUMNS", value_delimiter = ',')]
    pub corr: Vec<String>,

    /// Columns for the skewness check (comma separated).
    #[arg(long = "skew", value_name = "COLUMNS", value_delimiter = ',')]
    pub skew: Vec<String>,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the dataset (absolute path to a CSV, XLSX, or JSON file).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Missing-value handling: drop-missing or fill-missing.
    #[arg(long = "method", default_value = "drop-missing")]
    pub method: String,

    /// Absolute z-score above which a row is reported as an outlier.
    #[arg(long = "threshold", default_value_t = 3.0)]
    pub threshold: f64,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
