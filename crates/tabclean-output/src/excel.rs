use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

use tabclean_model::{CellValue, Table};

/// Single-sheet workbook with a header row and no row index. Numbers are
/// written as numeric cells; dates and text as strings; absent cells stay
/// blank.
pub fn write_xlsx(table: &Table, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, name) in table.column_names().iter().enumerate() {
        worksheet
            .write_string(0, col as u16, name)
            .context("write xlsx header")?;
    }
    for row in 0..table.row_count() {
        for (col, column) in table.columns.iter().enumerate() {
            let cell = column.values.get(row).unwrap_or(&CellValue::Absent);
            let target_row = (row + 1) as u32;
            let target_col = col as u16;
            match cell {
                CellValue::Absent => {}
                CellValue::Number(value) => {
                    worksheet
                        .write_number(target_row, target_col, *value)
                        .context("write xlsx number")?;
                }
                _ => {
                    worksheet
                        .write_string(target_row, target_col, cell.render())
                        .context("write xlsx cell")?;
                }
            }
        }
    }
    workbook
        .save(path)
        .with_context(|| format!("save xlsx: {}", path.display()))?;
    Ok(())
}
