//! Configuration for the cleaning pipeline.
//!
//! The pipeline takes one immutable [`CleanConfig`] value; every recognized
//! option is a typed field, so there is no open-ended option dictionary and
//! no unrecognized-key behavior to define.

use std::collections::BTreeMap;

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Strategy for filling absent cells in numeric columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum NumericFillStrategy {
    /// Fill with the column median of present values.
    #[default]
    Median,
    /// Fill with the column mean of present values.
    Mean,
    /// Fill only the listed columns, each with its own value.
    PerColumn(BTreeMap<String, f64>),
}

/// Fill value for date columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DateFill {
    /// Resolves to the current UTC date/time at run time.
    Today,
    Literal(NaiveDateTime),
}

impl DateFill {
    pub fn resolve(self) -> NaiveDateTime {
        match self {
            DateFill::Today => Utc::now().naive_utc(),
            DateFill::Literal(value) => value,
        }
    }
}

/// How absent cells are replaced, per column-type category.
///
/// `numeric_exceptions` takes precedence over `numeric_strategy` for the
/// columns it names (keys are normalized column names).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillPolicy {
    pub numeric_strategy: NumericFillStrategy,
    pub categorical_fill: String,
    pub date_fill: Option<DateFill>,
    pub numeric_exceptions: BTreeMap<String, f64>,
}

impl Default for FillPolicy {
    fn default() -> Self {
        Self {
            numeric_strategy: NumericFillStrategy::default(),
            categorical_fill: "Unknown".to_string(),
            date_fill: None,
            numeric_exceptions: BTreeMap::new(),
        }
    }
}

/// Options controlling one cleaning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanConfig {
    pub fill: FillPolicy,
    /// Fraction of sampled values that must look numeric to convert a column.
    pub numeric_detection_threshold: f64,
    /// Fraction of sampled values that must parse as dates to convert a column.
    pub date_detection_fraction: f64,
    /// Base name for the cleaned CSV/XLSX/Parquet artifacts.
    pub output_base_name: String,
    /// File name of the JSON report inside the output directory.
    pub report_name: String,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            fill: FillPolicy::default(),
            numeric_detection_threshold: 0.6,
            date_detection_fraction: 0.6,
            output_base_name: "cleaned_data".to_string(),
            report_name: "cleaning_report.json".to_string(),
        }
    }
}

impl CleanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_numeric_strategy(mut self, strategy: NumericFillStrategy) -> Self {
        self.fill.numeric_strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_categorical_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill.categorical_fill = fill.into();
        self
    }

    #[must_use]
    pub fn with_date_fill(mut self, fill: Option<DateFill>) -> Self {
        self.fill.date_fill = fill;
        self
    }

    #[must_use]
    pub fn with_numeric_exceptions(mut self, exceptions: BTreeMap<String, f64>) -> Self {
        self.fill.numeric_exceptions = exceptions;
        self
    }

    #[must_use]
    pub fn with_numeric_detection_threshold(mut self, threshold: f64) -> Self {
        self.numeric_detection_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_date_detection_fraction(mut self, fraction: f64) -> Self {
        self.date_detection_fraction = fraction;
        self
    }

    #[must_use]
    pub fn with_output_base_name(mut self, name: impl Into<String>) -> Self {
        self.output_base_name = name.into();
        self
    }

    #[must_use]
    pub fn with_report_name(mut self, name: impl Into<String>) -> Self {
        self.report_name = name.into();
        self
    }
}
