use std::path::PathBuf;

use tabclean_model::ColumnKind;
use tabclean_output::OutputPaths;
use tabclean_report::CleaningReport;

/// Everything one cleaning run produced.
#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub report: CleaningReport,
    pub report_path: PathBuf,
    pub outputs: OutputPaths,
    pub columns: Vec<ColumnSummary>,
}

/// Per-column state after cleaning, for the terminal summary.
#[derive(Debug)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ColumnKind,
    pub missing_after: usize,
}
