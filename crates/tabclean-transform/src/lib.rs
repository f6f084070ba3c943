//! Cleaning stages for the tabclean pipeline.
//!
//! Each stage takes a table by value and returns a new one:
//!
//! - **normalize**: canonical lowercase/underscore column names
//! - **structural**: empty-column drop, exact-duplicate drop, string trim
//! - **infer**: heuristic numeric and date column detection
//! - **fill**: configurable missing-value replacement per category
//! - **prune**: removal of rows absent across all columns
//! - **datetime**: the shared coercive date parsing helpers

pub mod datetime;
pub mod fill;
pub mod infer;
pub mod normalize;
pub mod prune;
pub mod structural;

pub use datetime::parse_date;
pub use fill::fill_missing_values;
pub use infer::{convert_numeric_columns, detect_and_parse_dates};
pub use normalize::{normalize_column_name, normalize_columns};
pub use prune::drop_empty_rows;
pub use structural::{drop_empty_columns, drop_exact_duplicates, trim_string_cells};
