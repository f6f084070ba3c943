//! Writers for the cleaned table.
//!
//! CSV and XLSX writes are mandatory; Parquet is best-effort. A parquet
//! failure is logged and the artifact is reported as absent, everything
//! else still lands.

pub mod csv_file;
pub mod excel;
pub mod parquet;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use tabclean_model::Table;

/// Paths of the artifacts one run produced. `parquet` is absent when the
/// columnar write failed or was unavailable.
#[derive(Debug, Clone, Default)]
pub struct OutputPaths {
    pub csv: Option<PathBuf>,
    pub excel: Option<PathBuf>,
    pub parquet: Option<PathBuf>,
}

/// Write the cleaned table into `out_dir` as `<base_name>.csv`,
/// `<base_name>.xlsx`, and (best-effort) `<base_name>.parquet`.
pub fn save_outputs(table: &Table, out_dir: &Path, base_name: &str) -> Result<OutputPaths> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir: {}", out_dir.display()))?;
    let csv_path = out_dir.join(format!("{base_name}.csv"));
    let excel_path = out_dir.join(format!("{base_name}.xlsx"));
    let parquet_path = out_dir.join(format!("{base_name}.parquet"));

    csv_file::write_csv(table, &csv_path)?;
    excel::write_xlsx(table, &excel_path)?;
    let parquet = match parquet::write_parquet(table, &parquet_path) {
        Ok(()) => Some(parquet_path),
        Err(error) => {
            warn!(error = %error, "parquet save failed, skipping artifact");
            None
        }
    };

    info!(
        csv = %csv_path.display(),
        excel = %excel_path.display(),
        parquet_written = parquet.is_some(),
        "saved outputs"
    );
    Ok(OutputPaths {
        csv: Some(csv_path),
        excel: Some(excel_path),
        parquet,
    })
}
