//! Heuristic column type inference.
//!
//! Both detectors work from a bounded sample of the column's leading
//! non-absent values, so wide or long tables stay cheap to classify and a
//! minority of malformed values cannot veto a conversion.

use tabclean_model::{CellValue, ColumnKind, Table};
use tracing::{debug, info};

use crate::datetime::parse_date;

/// Upper bound on sampled values per column.
const SAMPLE_LIMIT: usize = 200;

/// Minimum sample size before content-based date detection is attempted.
const MIN_DATE_SAMPLE: usize = 10;

/// Remove thousands separators and any whitespace.
fn strip_separators(value: &str) -> String {
    value
        .chars()
        .filter(|ch| *ch != ',' && !ch.is_whitespace())
        .collect()
}

/// Exact match of `-?\d+(\.\d+)?`.
fn is_numeric_like(value: &str) -> bool {
    let rest = value.strip_prefix('-').unwrap_or(value);
    let (integer, fraction) = match rest.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rest, None),
    };
    if integer.is_empty() || !integer.chars().all(|ch| ch.is_ascii_digit()) {
        return false;
    }
    match fraction {
        None => true,
        Some(digits) => !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_digit()),
    }
}

fn coerce_number(value: &str) -> CellValue {
    match strip_separators(value).parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => CellValue::Number(parsed),
        _ => CellValue::Absent,
    }
}

fn sample_text<'a>(values: &'a [CellValue]) -> Vec<&'a str> {
    values
        .iter()
        .filter_map(CellValue::as_text)
        .take(SAMPLE_LIMIT)
        .collect()
}

/// Reclassify text columns whose sampled values look numeric.
///
/// A column converts when at least `threshold` of its sample matches the
/// numeric pattern after separator stripping. Conversion covers the whole
/// column, coercing values that fail to parse to absent. Columns with an
/// empty sample are left as text.
pub fn convert_numeric_columns(mut table: Table, threshold: f64) -> Table {
    let mut converted = 0usize;
    for column in &mut table.columns {
        if column.kind != ColumnKind::Text {
            continue;
        }
        let sample = sample_text(&column.values);
        if sample.is_empty() {
            continue;
        }
        let matching = sample
            .iter()
            .filter(|value| is_numeric_like(&strip_separators(value)))
            .count();
        let fraction = matching as f64 / sample.len() as f64;
        if fraction < threshold {
            continue;
        }
        for cell in &mut column.values {
            if let CellValue::Text(value) = cell {
                *cell = coerce_number(value.as_str());
            }
        }
        column.kind = ColumnKind::Numeric;
        converted += 1;
        debug!(column = %column.name, fraction, "converted column to numeric");
    }
    if converted > 0 {
        info!(converted, "numeric column conversion complete");
    }
    table
}

/// Count how many of the column's text values parse as dates.
fn parsed_count(values: &[&str]) -> usize {
    values.iter().filter(|value| parse_date(value).is_some()).count()
}

fn coerce_dates(column: &mut tabclean_model::Column) {
    for cell in &mut column.values {
        if let CellValue::Text(value) = cell {
            *cell = match parse_date(value) {
                Some(parsed) => CellValue::Date(parsed),
                None => CellValue::Absent,
            };
        }
    }
    column.kind = ColumnKind::Date;
}

/// Detect and parse date columns, returning the table together with the
/// ordered list of accepted column names.
///
/// Two independent triggers: a column name containing "date" is accepted
/// as soon as one value parses (short-circuiting the sample check);
/// otherwise a sample of at least [`MIN_DATE_SAMPLE`] values must parse at
/// `min_fraction` or better. Parsing is coercive either way: values that
/// fail after acceptance become absent.
pub fn detect_and_parse_dates(mut table: Table, min_fraction: f64) -> (Table, Vec<String>) {
    let mut parsed_columns = Vec::new();
    for column in &mut table.columns {
        if column.kind != ColumnKind::Text {
            continue;
        }
        if column.name.contains("date") {
            let all: Vec<&str> = column.values.iter().filter_map(CellValue::as_text).collect();
            if parsed_count(&all) > 0 {
                coerce_dates(column);
                parsed_columns.push(column.name.clone());
                debug!(column = %column.name, "date column accepted by name");
                continue;
            }
        }
        let sample = sample_text(&column.values);
        if sample.len() < MIN_DATE_SAMPLE {
            continue;
        }
        let fraction = parsed_count(&sample) as f64 / sample.len() as f64;
        if fraction >= min_fraction {
            coerce_dates(column);
            parsed_columns.push(column.name.clone());
            debug!(column = %column.name, fraction, "date column accepted by sample");
        }
    }
    if !parsed_columns.is_empty() {
        info!(count = parsed_columns.len(), "date column detection complete");
    }
    (table, parsed_columns)
}
