//! Missing-value filling per column-type category.

use tabclean_model::{CellValue, Column, ColumnKind, FillPolicy, NumericFillStrategy, Table};
use tracing::debug;

fn present_numbers(column: &Column) -> Vec<f64> {
    column
        .values
        .iter()
        .filter_map(|cell| match cell {
            CellValue::Number(value) => Some(*value),
            _ => None,
        })
        .collect()
}

/// Median of present values, undefined for an empty column. Even-length
/// inputs interpolate between the two middle values.
fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn fill_absent(column: &mut Column, replacement: &CellValue) {
    let mut filled = 0usize;
    for cell in &mut column.values {
        if cell.is_absent() {
            *cell = replacement.clone();
            filled += 1;
        }
    }
    if filled > 0 {
        debug!(column = %column.name, filled, "filled absent cells");
    }
}

/// Apply the fill policy: numeric columns first, then text, then dates.
///
/// Numeric columns with an entry in `numeric_exceptions` use that value and
/// skip the category strategy. Median/mean fills are skipped entirely when
/// the statistic is undefined (all-absent column). Text columns always fill
/// with the categorical value; date columns only fill when a date fill is
/// configured, sharing one resolved value across the whole run.
pub fn fill_missing_values(mut table: Table, policy: &FillPolicy) -> Table {
    for column in &mut table.columns {
        if column.kind != ColumnKind::Numeric {
            continue;
        }
        if let Some(value) = policy.numeric_exceptions.get(&column.name) {
            fill_absent(column, &CellValue::Number(*value));
            continue;
        }
        let replacement = match &policy.numeric_strategy {
            NumericFillStrategy::Median => median(&present_numbers(column)),
            NumericFillStrategy::Mean => mean(&present_numbers(column)),
            NumericFillStrategy::PerColumn(map) => map.get(&column.name).copied(),
        };
        if let Some(value) = replacement {
            fill_absent(column, &CellValue::Number(value));
        }
    }

    for column in &mut table.columns {
        if column.kind == ColumnKind::Text {
            fill_absent(column, &CellValue::Text(policy.categorical_fill.clone()));
        }
    }

    if let Some(date_fill) = policy.date_fill {
        let resolved = CellValue::Date(date_fill.resolve());
        for column in &mut table.columns {
            if column.kind == ColumnKind::Date {
                fill_absent(column, &resolved);
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;
    use tabclean_model::DateFill;

    fn numeric_column(name: &str, values: Vec<Option<f64>>) -> Column {
        Column::with_values(
            name,
            ColumnKind::Numeric,
            values
                .into_iter()
                .map(|value| value.map_or(CellValue::Absent, CellValue::Number))
                .collect(),
        )
    }

    #[test]
    fn median_interpolates_even_counts() {
        assert_eq!(median(&[1.0, 3.0]), Some(2.0));
        assert_eq!(median(&[1.0, 2.0, 10.0]), Some(2.0));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn median_strategy_fills_absent_numeric_cells() {
        let table = Table::new(vec![numeric_column(
            "amount",
            vec![Some(1.0), None, Some(3.0)],
        )]);
        let filled = fill_missing_values(table, &FillPolicy::default());
        assert_eq!(filled.columns[0].values[1], CellValue::Number(2.0));
    }

    #[test]
    fn mean_strategy_fills_with_the_average() {
        assert_eq!(mean(&[1.0, 2.0, 6.0]), Some(3.0));
        assert_eq!(mean(&[]), None);
        let policy = FillPolicy {
            numeric_strategy: NumericFillStrategy::Mean,
            ..FillPolicy::default()
        };
        let table = Table::new(vec![numeric_column(
            "amount",
            vec![Some(1.0), None, Some(5.0)],
        )]);
        let filled = fill_missing_values(table, &policy);
        assert_eq!(filled.columns[0].values[1], CellValue::Number(3.0));
    }

    #[test]
    fn all_absent_numeric_column_is_left_untouched() {
        let table = Table::new(vec![numeric_column("amount", vec![None, None])]);
        let filled = fill_missing_values(table, &FillPolicy::default());
        assert!(filled.columns[0].is_all_absent());
    }

    #[test]
    fn exception_overrides_strategy() {
        let mut exceptions = BTreeMap::new();
        exceptions.insert("amount".to_string(), 0.0);
        let policy = FillPolicy {
            numeric_exceptions: exceptions,
            ..FillPolicy::default()
        };
        let table = Table::new(vec![numeric_column(
            "amount",
            vec![Some(100.0), None],
        )]);
        let filled = fill_missing_values(table, &policy);
        assert_eq!(filled.columns[0].values[1], CellValue::Number(0.0));
    }

    #[test]
    fn per_column_strategy_only_touches_listed_columns() {
        let mut map = BTreeMap::new();
        map.insert("a".to_string(), 9.0);
        let policy = FillPolicy {
            numeric_strategy: NumericFillStrategy::PerColumn(map),
            ..FillPolicy::default()
        };
        let table = Table::new(vec![
            numeric_column("a", vec![None]),
            numeric_column("b", vec![None]),
        ]);
        let filled = fill_missing_values(table, &policy);
        assert_eq!(filled.columns[0].values[0], CellValue::Number(9.0));
        assert!(filled.columns[1].values[0].is_absent());
    }

    #[test]
    fn text_columns_fill_with_categorical_value() {
        let table = Table::new(vec![Column::with_values(
            "name",
            ColumnKind::Text,
            vec![CellValue::Text("Alice".to_string()), CellValue::Absent],
        )]);
        let filled = fill_missing_values(table, &FillPolicy::default());
        assert_eq!(
            filled.columns[0].values[1],
            CellValue::Text("Unknown".to_string())
        );
    }

    #[test]
    fn date_columns_only_fill_when_configured() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let column = Column::with_values(
            "order_date",
            ColumnKind::Date,
            vec![CellValue::Date(date), CellValue::Absent],
        );
        let untouched = fill_missing_values(
            Table::new(vec![column.clone()]),
            &FillPolicy::default(),
        );
        assert!(untouched.columns[0].values[1].is_absent());

        let policy = FillPolicy {
            date_fill: Some(DateFill::Literal(date)),
            ..FillPolicy::default()
        };
        let filled = fill_missing_values(Table::new(vec![column]), &policy);
        assert_eq!(filled.columns[0].values[1], CellValue::Date(date));
    }

    #[test]
    fn filling_twice_is_a_no_op() {
        let table = Table::new(vec![
            numeric_column("amount", vec![Some(1.0), None, Some(3.0)]),
            Column::with_values(
                "name",
                ColumnKind::Text,
                vec![CellValue::Absent, CellValue::Text("x".to_string()), CellValue::Absent],
            ),
        ]);
        let policy = FillPolicy::default();
        let once = fill_missing_values(table, &policy);
        let twice = fill_missing_values(once.clone(), &policy);
        assert_eq!(once, twice);
    }
}
