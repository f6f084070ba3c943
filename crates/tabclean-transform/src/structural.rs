use std::collections::BTreeSet;

use tabclean_model::{CellValue, Table};
use tracing::{debug, info};

/// Drop columns whose values are entirely absent.
pub fn drop_empty_columns(mut table: Table) -> Table {
    let before = table.column_count();
    table.columns.retain(|column| !column.is_all_absent());
    let dropped = before - table.column_count();
    if dropped > 0 {
        info!(dropped, "dropped empty columns");
    }
    table
}

/// Composite key for one row. Cells are rendered with a kind marker so a
/// text "1" and a numeric 1 never collide.
fn row_key(table: &Table, index: usize) -> String {
    let mut key = String::new();
    for column in &table.columns {
        let cell = column.values.get(index).unwrap_or(&CellValue::Absent);
        match cell {
            CellValue::Absent => key.push('\u{0}'),
            CellValue::Text(value) => {
                key.push('t');
                key.push_str(value);
            }
            CellValue::Number(value) => {
                key.push('n');
                key.push_str(&value.to_bits().to_string());
            }
            CellValue::Date(value) => {
                key.push('d');
                key.push_str(&value.to_string());
            }
        }
        key.push('\u{1f}');
    }
    key
}

/// Drop rows that are exact duplicates across every column. The first
/// occurrence wins; remaining row order is preserved.
pub fn drop_exact_duplicates(mut table: Table) -> Table {
    let row_count = table.row_count();
    let mut seen = BTreeSet::new();
    let mut keep = Vec::with_capacity(row_count);
    for index in 0..row_count {
        keep.push(seen.insert(row_key(&table, index)));
    }
    let dropped = keep.iter().filter(|kept| !**kept).count();
    table.retain_rows(&keep);
    info!(dropped, "dropped exact duplicate rows");
    table
}

/// Trim whitespace from every text cell; cells empty after trimming become
/// absent.
pub fn trim_string_cells(mut table: Table) -> Table {
    let mut emptied = 0usize;
    for column in &mut table.columns {
        for cell in &mut column.values {
            let replacement = match cell {
                CellValue::Text(value) => {
                    let trimmed = value.trim();
                    if trimmed.is_empty() {
                        Some(CellValue::Absent)
                    } else if trimmed.len() != value.len() {
                        Some(CellValue::Text(trimmed.to_string()))
                    } else {
                        None
                    }
                }
                _ => None,
            };
            if let Some(next) = replacement {
                if next.is_absent() {
                    emptied += 1;
                }
                *cell = next;
            }
        }
    }
    if emptied > 0 {
        debug!(emptied, "blank strings normalized to absent");
    }
    table
}
