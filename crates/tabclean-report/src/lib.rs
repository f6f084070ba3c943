//! Cleaning report assembly and JSON serialization.
//!
//! The report is a snapshot derived once from the loaded and final tables;
//! it is never mutated after construction.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

use tabclean_model::{CellValue, Table};

const SAMPLE_ROWS: usize = 5;

/// Column-to-count map serialized in descending-count order.
///
/// A plain serde map would sort keys alphabetically; the ordering here is
/// part of the report contract, so serialization goes entry by entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCounts(pub Vec<(String, usize)>);

impl Serialize for MissingCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, count) in &self.0 {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

/// One sampled row, keyed by column name in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRow(pub Vec<(String, Value)>);

impl Serialize for SampleRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CleaningReport {
    pub original_shape: (usize, usize),
    pub cleaned_shape: (usize, usize),
    pub columns_original: Vec<String>,
    pub columns_clean: Vec<String>,
    pub parsed_date_columns: Vec<String>,
    pub missing_counts_after: MissingCounts,
    pub sample_head: Vec<SampleRow>,
}

fn cell_to_json(cell: &CellValue) -> Value {
    match cell {
        CellValue::Absent => Value::Null,
        CellValue::Text(value) => Value::String(value.clone()),
        CellValue::Number(value) => serde_json::Number::from_f64(*value)
            .map_or(Value::Null, Value::Number),
        CellValue::Date(_) => Value::String(cell.render()),
    }
}

fn missing_counts(table: &Table) -> MissingCounts {
    let mut counts: Vec<(String, usize)> = table
        .columns
        .iter()
        .map(|column| (column.name.clone(), column.missing_count()))
        .collect();
    // Stable sort: ties keep column order, matching the shape lists.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    MissingCounts(counts)
}

fn sample_head(table: &Table) -> Vec<SampleRow> {
    let rows = table.row_count().min(SAMPLE_ROWS);
    (0..rows)
        .map(|index| {
            SampleRow(
                table
                    .columns
                    .iter()
                    .map(|column| {
                        let cell = column.values.get(index).unwrap_or(&CellValue::Absent);
                        (column.name.clone(), cell_to_json(cell))
                    })
                    .collect(),
            )
        })
        .collect()
}

/// Build the report from the table as loaded and the final cleaned table.
pub fn build_report(
    original: &Table,
    cleaned: &Table,
    parsed_date_columns: Vec<String>,
) -> CleaningReport {
    CleaningReport {
        original_shape: original.shape(),
        cleaned_shape: cleaned.shape(),
        columns_original: original.column_names(),
        columns_clean: cleaned.column_names(),
        parsed_date_columns,
        missing_counts_after: missing_counts(cleaned),
        sample_head: sample_head(cleaned),
    }
}

/// Write the report as pretty-printed JSON.
pub fn write_report(report: &CleaningReport, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create report: {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .with_context(|| format!("write report: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tabclean_model::{Column, ColumnKind};

    fn sample_table() -> Table {
        let date = NaiveDate::from_ymd_opt(2021, 1, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Table::new(vec![
            Column::with_values(
                "customer_name",
                ColumnKind::Text,
                vec![
                    CellValue::Text("Alice".to_string()),
                    CellValue::Text("Bob".to_string()),
                ],
            ),
            Column::with_values(
                "order_date",
                ColumnKind::Date,
                vec![CellValue::Date(date), CellValue::Absent],
            ),
            Column::with_values(
                "amount",
                ColumnKind::Numeric,
                vec![CellValue::Number(1000.0), CellValue::Number(1000.0)],
            ),
        ])
    }

    #[test]
    fn missing_counts_sort_descending_with_stable_ties() {
        let table = sample_table();
        let counts = missing_counts(&table);
        assert_eq!(
            counts.0,
            vec![
                ("order_date".to_string(), 1),
                ("customer_name".to_string(), 0),
                ("amount".to_string(), 0),
            ]
        );
    }

    #[test]
    fn report_serializes_with_ordered_missing_counts() {
        let table = sample_table();
        let report = build_report(&table, &table, vec!["order_date".to_string()]);
        let json = serde_json::to_string(&report).expect("serialize report");
        let order_date = json.find("\"order_date\":1").expect("order_date entry");
        let customer = json
            .find("\"customer_name\":0")
            .expect("customer_name entry");
        assert!(order_date < customer, "descending count order in JSON");
    }

    #[test]
    fn sample_head_renders_cells_per_category() {
        let table = sample_table();
        let report = build_report(&table, &table, Vec::new());
        assert_eq!(report.sample_head.len(), 2);
        let first = &report.sample_head[0];
        assert_eq!(first.0[0].1, Value::String("Alice".to_string()));
        assert_eq!(first.0[1].1, Value::String("2021-01-05".to_string()));
        assert_eq!(first.0[2].1, serde_json::json!(1000.0));
        let second = &report.sample_head[1];
        assert_eq!(second.0[1].1, Value::Null);
    }

    #[test]
    fn shapes_record_rows_then_columns() {
        let table = sample_table();
        let report = build_report(&table, &table, Vec::new());
        assert_eq!(report.original_shape, (2, 3));
        assert_eq!(report.cleaned_shape, (2, 3));
    }
}
