//! CLI argument definitions for tabclean.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabclean",
    version,
    about = "tabclean - Single-pass cleaning for messy tabular files",
    long_about = "Clean a CSV or Excel file in one pass.\n\n\
                  Normalizes headers, drops empty columns and exact duplicate rows,\n\
                  infers numeric and date columns, fills missing values, and writes\n\
                  cleaned CSV/XLSX/Parquet artifacts plus a JSON cleaning report."
)]
pub struct Cli {
    /// Path to the input file (.csv, .xls, or .xlsx).
    #[arg(long = "input", short = 'i', value_name = "PATH")]
    pub input: PathBuf,

    /// Directory where cleaned artifacts and the report are written.
    #[arg(long = "output_dir", short = 'o', value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Fill value for absent date cells: "today" or a date literal
    /// such as 2021-01-05. Absent date cells are left absent when omitted.
    #[arg(long = "date_fill", value_name = "VALUE")]
    pub date_fill: Option<String>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
