pub mod csv_table;
pub mod error;
pub mod excel;

pub use csv_table::read_csv_table;
pub use error::{IngestError, Result};
pub use excel::read_excel_table;

use std::path::Path;

use tabclean_model::Table;
use tracing::info;

/// Read a tabular source into a table, format selected by file extension.
///
/// `.csv` is parsed as comma-delimited with a header row; `.xls`/`.xlsx`
/// as the first sheet of a workbook with a header row. Any other extension
/// is rejected before any processing happens.
pub fn read_input(path: &Path) -> Result<Table> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();
    let table = match extension.as_str() {
        "csv" => read_csv_table(path)?,
        "xls" | "xlsx" => read_excel_table(path)?,
        _ => return Err(IngestError::UnsupportedExtension(extension)),
    };
    let (rows, columns) = table.shape();
    info!(path = %path.display(), rows, columns, "loaded input");
    Ok(table)
}
