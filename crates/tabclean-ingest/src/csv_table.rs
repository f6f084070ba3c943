use std::path::Path;

use csv::ReaderBuilder;

use tabclean_model::{CellValue, Column, ColumnKind, Table};

use crate::error::Result;

fn strip_bom(raw: &str) -> &str {
    raw.trim_matches('\u{feff}')
}

/// Empty raw cells load as absent; everything else stays untouched text.
/// Whitespace trimming is a later pipeline stage, so " Alice " survives
/// ingest as-is.
fn cell_value(raw: &str) -> CellValue {
    let cleaned = strip_bom(raw);
    if cleaned.is_empty() {
        CellValue::Absent
    } else {
        CellValue::Text(cleaned.to_string())
    }
}

/// Read a comma-delimited file with a header row into a table of text columns.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| strip_bom(header).to_string())
        .collect();
    let mut columns: Vec<Column> = headers
        .iter()
        .map(|header| Column::new(header.clone(), ColumnKind::Text))
        .collect();
    for record in reader.records() {
        let record = record?;
        for (index, column) in columns.iter_mut().enumerate() {
            let raw = record.get(index).unwrap_or("");
            column.values.push(cell_value(raw));
        }
    }
    Ok(Table::new(columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("create temp csv");
        file.write_all(content.as_bytes()).expect("write temp csv");
        file
    }

    #[test]
    fn reads_header_and_rows() {
        let file = write_csv("Name,Amount\nAlice,10\nBob,\n");
        let table = read_csv_table(file.path()).expect("read csv");
        assert_eq!(table.column_names(), vec!["Name", "Amount"]);
        assert_eq!(table.shape(), (2, 2));
        assert_eq!(
            table.columns[1].values,
            vec![CellValue::Text("10".to_string()), CellValue::Absent]
        );
    }

    #[test]
    fn short_rows_pad_with_absent() {
        let file = write_csv("a,b,c\n1\n");
        let table = read_csv_table(file.path()).expect("read csv");
        assert_eq!(table.columns[1].values, vec![CellValue::Absent]);
        assert_eq!(table.columns[2].values, vec![CellValue::Absent]);
    }

    #[test]
    fn whitespace_cells_stay_text_until_trim() {
        let file = write_csv("a\n\" Alice \"\n");
        let table = read_csv_table(file.path()).expect("read csv");
        assert_eq!(
            table.columns[0].values,
            vec![CellValue::Text(" Alice ".to_string())]
        );
    }
}
