pub mod options;
pub mod table;

pub use options::{CleanConfig, DateFill, FillPolicy, NumericFillStrategy};
pub use table::{CellValue, Column, ColumnKind, Table};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shape_counts_rows_and_columns() {
        let mut column = Column::new("amount", ColumnKind::Text);
        column.values.push(CellValue::Text("1".to_string()));
        column.values.push(CellValue::Absent);
        let table = Table::new(vec![column]);
        assert_eq!(table.shape(), (2, 1));
    }

    #[test]
    fn config_serializes() {
        let config = CleanConfig::default();
        let json = serde_json::to_string(&config).expect("serialize config");
        let round: CleanConfig = serde_json::from_str(&json).expect("deserialize config");
        assert_eq!(round.output_base_name, "cleaned_data");
        assert_eq!(round.report_name, "cleaning_report.json");
    }
}
