use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use tabclean_model::Table;

/// Comma-delimited output with a header row and no row index.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("create csv: {}", path.display()))?;
    writer
        .write_record(table.column_names())
        .context("write csv header")?;
    for index in 0..table.row_count() {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|column| {
                column
                    .values
                    .get(index)
                    .map(tabclean_model::CellValue::render)
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&record).context("write csv row")?;
    }
    writer.flush().context("flush csv")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabclean_model::{CellValue, Column, ColumnKind};

    #[test]
    fn writes_header_and_rendered_cells() {
        let table = Table::new(vec![
            Column::with_values(
                "name",
                ColumnKind::Text,
                vec![CellValue::Text("Alice".to_string()), CellValue::Absent],
            ),
            Column::with_values(
                "amount",
                ColumnKind::Numeric,
                vec![CellValue::Number(1000.0), CellValue::Number(2.5)],
            ),
        ]);
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        write_csv(&table, &path).expect("write csv");
        let content = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(content, "name,amount\nAlice,1000\n,2.5\n");
    }
}
