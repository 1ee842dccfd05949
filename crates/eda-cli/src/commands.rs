use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info_span;

use eda_clean::clean;
use eda_ingest::{check_path, load};
use eda_inspect::inspect;
use eda_model::{CleaningOptions, InspectOptions, Table};

use crate::cli::{CleanArgs, InspectArgs};
use eda_cli::render::{print_cleaning_report, print_inspection_report};

/// Validates the path as a precondition, then loads. The validator is
/// advisory in the library; the CLI turns a rejection into a hard stop
/// before touching the file.
fn load_checked(path: &Path) -> Result<Table> {
    let status = check_path(path);
    if !status.is_valid() {
        bail!("invalid path '{}': {status}", path.display());
    }
    load(path).with_context(|| format!("load {}", path.display()))
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let span = info_span!("inspect", file = %args.file.display());
    let _guard = span.enter();
    let table = load_checked(&args.file)?;
    let options = InspectOptions::new()
        .with_corr_columns(args.corr.clone())
        .with_skew_columns(args.skew.clone());
    let report = inspect(&table, &options);
    print_inspection_report(&report);
    Ok(())
}

pub fn run_clean(args: &CleanArgs) -> Result<()> {
    let span = info_span!("clean", file = %args.file.display());
    let _guard = span.enter();
    let table = load_checked(&args.file)?;
    let options = CleaningOptions::default()
        .with_method(&args.method)
        .with_threshold(args.threshold);
    let (cleaned, report) = clean(&table, &options)?;
    print_cleaning_report(&report, &cleaned);
    Ok(())
}
