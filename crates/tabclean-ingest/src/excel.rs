use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use tabclean_model::table::{format_date, format_number};
use tabclean_model::{CellValue, Column, ColumnKind, Table};

use crate::error::{IngestError, Result};

/// Render a workbook cell to its text form. Typed cells (numbers, dates)
/// become their canonical string representation; downstream type inference
/// reclassifies them the same way it does for CSV input.
fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Absent,
        Data::String(value) => {
            if value.is_empty() {
                CellValue::Absent
            } else {
                CellValue::Text(value.clone())
            }
        }
        Data::Int(value) => CellValue::Text(value.to_string()),
        Data::Float(value) => CellValue::Text(format_number(*value)),
        Data::Bool(value) => CellValue::Text(value.to_string()),
        Data::DateTime(value) => match value.as_datetime() {
            Some(datetime) => CellValue::Text(format_date(datetime)),
            None => CellValue::Absent,
        },
        Data::DateTimeIso(value) | Data::DurationIso(value) => CellValue::Text(value.clone()),
    }
}

fn header_value(cell: &Data) -> String {
    match cell_value(cell) {
        CellValue::Text(value) => value.trim().to_string(),
        _ => String::new(),
    }
}

/// Read the first sheet of an XLS/XLSX workbook, treating the first row as
/// the header row.
pub fn read_excel_table(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptyWorkbook(path.to_path_buf()))??;
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Table::empty());
    };
    let mut columns: Vec<Column> = header_row
        .iter()
        .map(|cell| Column::new(header_value(cell), ColumnKind::Text))
        .collect();
    for row in rows {
        for (index, column) in columns.iter_mut().enumerate() {
            let value = row.get(index).map_or(CellValue::Absent, cell_value);
            column.values.push(value);
        }
    }
    Ok(Table::new(columns))
}
