use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported file type: {0}")]
    UnsupportedExtension(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),
    #[error("no worksheet found in {0}")]
    EmptyWorkbook(PathBuf),
}

pub type Result<T> = std::result::Result<T, IngestError>;
