#![deny(unsafe_code)]

use chrono::{NaiveDateTime, Timelike};

/// A single cell in a table.
///
/// `Absent` covers missing values, nulls, and strings that were empty after
/// trimming. Text, Number, and Date are the three value categories the
/// pipeline distinguishes.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Absent,
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
}

impl CellValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Render the cell as its output string form. Absent renders empty.
    pub fn render(&self) -> String {
        match self {
            CellValue::Absent => String::new(),
            CellValue::Text(value) => value.clone(),
            CellValue::Number(value) => format_number(*value),
            CellValue::Date(value) => format_date(*value),
        }
    }
}

/// Format a number without trailing zeros ("10.50" becomes "10.5", "10.0" becomes "10").
pub fn format_number(value: f64) -> String {
    let rendered = format!("{value}");
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

/// Format a date, keeping date-only precision when the time is midnight.
pub fn format_date(value: NaiveDateTime) -> String {
    if value.num_seconds_from_midnight() == 0 && value.nanosecond() == 0 {
        value.format("%Y-%m-%d").to_string()
    } else {
        value.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

/// The column-type category assigned by type inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColumnKind {
    Text,
    Numeric,
    Date,
}

impl ColumnKind {
    pub fn label(self) -> &'static str {
        match self {
            ColumnKind::Text => "text",
            ColumnKind::Numeric => "numeric",
            ColumnKind::Date => "date",
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
            values: Vec::new(),
        }
    }

    pub fn with_values(
        name: impl Into<String>,
        kind: ColumnKind,
        values: Vec<CellValue>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            values,
        }
    }

    pub fn present_values(&self) -> impl Iterator<Item = &CellValue> {
        self.values.iter().filter(|value| !value.is_absent())
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_absent()).count()
    }

    pub fn is_all_absent(&self) -> bool {
        self.values.iter().all(CellValue::is_absent)
    }
}

/// An ordered collection of named columns aligned by row index.
///
/// Column order and row order are significant. Pipeline stages take a table
/// by value and return a new one; no stage mutates a table another stage
/// still holds.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |column| column.values.len())
    }

    /// (rows, columns), in the order reports present shapes.
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|column| column.name.clone()).collect()
    }

    /// Cells of one row, in column order.
    pub fn row(&self, index: usize) -> Vec<&CellValue> {
        self.columns
            .iter()
            .filter_map(|column| column.values.get(index))
            .collect()
    }

    /// Keep only rows whose mask entry is true. Mask length must equal the
    /// row count.
    pub fn retain_rows(&mut self, keep: &[bool]) {
        for column in &mut self.columns {
            let mut index = 0;
            column.values.retain(|_| {
                let kept = keep.get(index).copied().unwrap_or(true);
                index += 1;
                kept
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn number_formatting_trims_trailing_zeros() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(10.5), "10.5");
        assert_eq!(format_number(-3.25), "-3.25");
        assert_eq!(format_number(1000.0), "1000");
    }

    #[test]
    fn date_formatting_preserves_precision() {
        let midnight = NaiveDate::from_ymd_opt(2021, 1, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_date(midnight), "2021-01-05");
        let afternoon = NaiveDate::from_ymd_opt(2021, 1, 5)
            .unwrap()
            .and_hms_opt(13, 45, 0)
            .unwrap();
        assert_eq!(format_date(afternoon), "2021-01-05T13:45:00");
    }

    #[test]
    fn retain_rows_filters_every_column() {
        let mut table = Table::new(vec![
            Column::with_values(
                "a",
                ColumnKind::Text,
                vec![
                    CellValue::Text("1".to_string()),
                    CellValue::Text("2".to_string()),
                    CellValue::Text("3".to_string()),
                ],
            ),
            Column::with_values(
                "b",
                ColumnKind::Text,
                vec![CellValue::Absent, CellValue::Absent, CellValue::Absent],
            ),
        ]);
        table.retain_rows(&[true, false, true]);
        assert_eq!(table.shape(), (2, 2));
        assert_eq!(table.columns[0].values[1], CellValue::Text("3".to_string()));
    }
}
