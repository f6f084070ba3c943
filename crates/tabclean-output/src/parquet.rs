use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{Column as PolarsColumn, DataFrame, NamedFrom, ParquetWriter, Series};

use tabclean_model::{CellValue, ColumnKind, Table};

/// Convert the table to a DataFrame: numeric columns as nullable f64,
/// text and date columns as nullable strings (dates in their rendered
/// form).
fn to_dataframe(table: &Table) -> Result<DataFrame> {
    let mut columns: Vec<PolarsColumn> = Vec::with_capacity(table.column_count());
    for column in &table.columns {
        let series = match column.kind {
            ColumnKind::Numeric => {
                let values: Vec<Option<f64>> = column
                    .values
                    .iter()
                    .map(|cell| match cell {
                        CellValue::Number(value) => Some(*value),
                        _ => None,
                    })
                    .collect();
                Series::new(column.name.as_str().into(), values)
            }
            ColumnKind::Text | ColumnKind::Date => {
                let values: Vec<Option<String>> = column
                    .values
                    .iter()
                    .map(|cell| {
                        if cell.is_absent() {
                            None
                        } else {
                            Some(cell.render())
                        }
                    })
                    .collect();
                Series::new(column.name.as_str().into(), values)
            }
        };
        columns.push(series.into());
    }
    DataFrame::new(columns).context("build dataframe")
}

/// Columnar binary output, no row index.
pub fn write_parquet(table: &Table, path: &Path) -> Result<()> {
    let mut df = to_dataframe(table)?;
    let file = File::create(path)
        .with_context(|| format!("create parquet: {}", path.display()))?;
    ParquetWriter::new(file)
        .finish(&mut df)
        .context("write parquet")?;
    Ok(())
}
