use std::path::Path;

use tracing::{debug, info};

use eda_model::{EdaError, Result, Table};

use crate::csv_reader::read_csv;
use crate::format::{FormatTag, infer_format};
use crate::infer::build_table;
use crate::json_reader::read_json;
use crate::xlsx_reader::read_xlsx;

/// Loads the dataset at `path` into a typed table.
///
/// Fails with `UnsupportedFormat` when the inferred tag is not one of
/// csv/xlsx/json, with `Parse` when the content is malformed for the
/// inferred format, and with `EmptyFile` when the parse yields no data
/// rows.
pub fn load(path: &Path) -> Result<Table> {
    let format = infer_format(path);
    debug!(path = %path.display(), format = %format, "inferred file format");
    let raw = match format {
        FormatTag::Csv => read_csv(path)?,
        FormatTag::Xlsx => read_xlsx(path)?,
        FormatTag::Json => read_json(path)?,
        other => return Err(EdaError::UnsupportedFormat(other.to_string())),
    };
    let table = build_table(&raw)?;
    if table.row_count() == 0 {
        return Err(EdaError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded table"
    );
    Ok(table)
}
