//! The cleaning pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the CSV or Excel input into a typed table
//! 2. **Transform**: Normalize headers, drop empty columns and duplicate
//!    rows, trim strings, infer numeric and date columns, fill missing
//!    values, prune empty rows
//! 3. **Output**: Build the cleaning report and write all artifacts
//!
//! Each stage takes the output of the previous stage and returns typed
//! results.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use tabclean_ingest::read_input;
use tabclean_model::{CleanConfig, DateFill};
use tabclean_output::save_outputs;
use tabclean_report::{build_report, write_report};
use tabclean_transform::{
    convert_numeric_columns, detect_and_parse_dates, drop_empty_columns, drop_empty_rows,
    drop_exact_duplicates, fill_missing_values, normalize_columns, parse_date, trim_string_cells,
};

use crate::types::{CleanResult, ColumnSummary};

/// Build the pipeline configuration from a raw `--date_fill` argument.
///
/// Rejects values that are neither `today` nor a parseable date so a typo
/// fails before any file is read.
pub fn config_from_date_fill(date_fill: Option<&str>) -> Result<CleanConfig> {
    let fill = match date_fill {
        None => None,
        Some(raw) if raw.eq_ignore_ascii_case("today") => Some(DateFill::Today),
        Some(raw) => {
            let parsed = parse_date(raw)
                .ok_or_else(|| anyhow!("unrecognized --date_fill value: {raw}"))?;
            Some(DateFill::Literal(parsed))
        }
    };
    Ok(CleanConfig::new().with_date_fill(fill))
}

/// Run the full cleaning pipeline for one input file.
pub fn run_clean(input: &Path, output_dir: &Path, config: &CleanConfig) -> Result<CleanResult> {
    let clean_span = info_span!("clean", input = %input.display());
    let _clean_guard = clean_span.enter();

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let ingest_start = Instant::now();
    let original =
        read_input(input).with_context(|| format!("read input: {}", input.display()))?;
    let (rows, columns) = original.shape();
    info!(
        rows,
        columns,
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Transform
    // =========================================================================
    let transform_span = info_span!("transform");
    let transform_start = Instant::now();
    let (cleaned, parsed_date_columns) = transform_span.in_scope(|| {
        let table = normalize_columns(original.clone());
        let table = drop_empty_columns(table);
        let table = drop_exact_duplicates(table);
        let table = trim_string_cells(table);
        let table = convert_numeric_columns(table, config.numeric_detection_threshold);
        let (table, parsed) = detect_and_parse_dates(table, config.date_detection_fraction);
        // Rows with no data at all are pruned before filling so the
        // categorical fill cannot resurrect them. The second prune catches
        // rows left fully absent when fills were skipped.
        let table = drop_empty_rows(table);
        let table = fill_missing_values(table, &config.fill);
        let table = drop_empty_rows(table);
        (table, parsed)
    });
    let (rows, columns) = cleaned.shape();
    info!(
        rows,
        columns,
        parsed_date_columns = parsed_date_columns.len(),
        duration_ms = transform_start.elapsed().as_millis(),
        "transform complete"
    );

    // =========================================================================
    // Stage 3: Report and outputs
    // =========================================================================
    let output_span = info_span!("output", output_dir = %output_dir.display());
    let output_start = Instant::now();
    let (report, report_path, outputs) = output_span.in_scope(|| {
        let report = build_report(&original, &cleaned, parsed_date_columns);
        let outputs = save_outputs(&cleaned, output_dir, &config.output_base_name)?;
        let report_path = output_dir.join(&config.report_name);
        write_report(&report, &report_path)?;
        Ok::<_, anyhow::Error>((report, report_path, outputs))
    })?;
    info!(
        report = %report_path.display(),
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );

    let column_summaries = cleaned
        .columns
        .iter()
        .map(|column| ColumnSummary {
            name: column.name.clone(),
            kind: column.kind,
            missing_after: column.missing_count(),
        })
        .collect();

    Ok(CleanResult {
        input: input.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        report,
        report_path,
        outputs,
        columns: column_summaries,
    })
}
