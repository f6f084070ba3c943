use tabclean_model::Table;
use tracing::info;

/// Drop rows that are absent across every column, whether empty in the
/// input or emptied later by coercion failures.
pub fn drop_empty_rows(mut table: Table) -> Table {
    let row_count = table.row_count();
    let keep: Vec<bool> = (0..row_count)
        .map(|index| table.row(index).iter().any(|cell| !cell.is_absent()))
        .collect();
    let dropped = keep.iter().filter(|kept| !**kept).count();
    table.retain_rows(&keep);
    info!(dropped, "dropped entirely-empty rows");
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabclean_model::{CellValue, Column, ColumnKind};

    #[test]
    fn removes_fully_absent_rows_only() {
        let table = Table::new(vec![
            Column::with_values(
                "a",
                ColumnKind::Text,
                vec![CellValue::Absent, CellValue::Absent],
            ),
            Column::with_values(
                "b",
                ColumnKind::Text,
                vec![CellValue::Text("x".to_string()), CellValue::Absent],
            ),
            Column::with_values(
                "c",
                ColumnKind::Text,
                vec![CellValue::Absent, CellValue::Absent],
            ),
        ]);
        let pruned = drop_empty_rows(table);
        assert_eq!(pruned.shape(), (1, 3));
        assert_eq!(
            pruned.columns[1].values,
            vec![CellValue::Text("x".to_string())]
        );
    }
}
