//! Descriptive statistics over the numeric columns of the filtered family table.

use std::fmt::{self, Display};
use std::fs::{create_dir_all, write};

use tracing::info;

use chromprep_core::consts::FAMILY_NAME_COL;
use chromprep_core::{PipelineConfig, RawTable};

use crate::errors::{PreprocessingError, Result};

/// Min, max and unweighted mean of the valid values of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl ColumnStatistics {
    ///
    /// Compute statistics over the values that are present. Returns `None`
    /// when no value is.
    ///
    pub fn from_values(values: &[Option<f64>]) -> Option<Self> {
        let valid: Vec<f64> = values.iter().flatten().copied().collect();
        if valid.is_empty() {
            return None;
        }

        let min = valid.iter().copied().fold(f64::INFINITY, f64::min);
        let max = valid.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = valid.iter().sum::<f64>() / valid.len() as f64;

        Some(ColumnStatistics { min, max, mean })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    /// `None` when the column held no valid value
    pub statistics: Option<ColumnStatistics>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub columns: Vec<ColumnSummary>,
    pub total_rows: usize,
}

impl SummaryReport {
    ///
    /// Summarise `columns` of `table`. The family name column is never
    /// summarised; a requested column missing from the table is an error.
    ///
    pub fn from_table(table: &RawTable, columns: &[&str]) -> Result<Self> {
        let mut summaries = Vec::new();
        for column in columns.iter().filter(|c| **c != FAMILY_NAME_COL) {
            let values = table.numeric_column(column)?;
            summaries.push(ColumnSummary {
                column: column.to_string(),
                statistics: ColumnStatistics::from_values(&values),
            });
        }

        Ok(SummaryReport {
            columns: summaries,
            total_rows: table.len(),
        })
    }
}

impl Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Families for analysis - summary statistics")?;
        writeln!(f, "{}", "=".repeat(45))?;
        writeln!(f)?;

        for summary in &self.columns {
            writeln!(f, "{}:", summary.column)?;
            match &summary.statistics {
                None => writeln!(f, "  no valid values")?,
                Some(stats) => {
                    writeln!(f, "  min     = {}", stats.min)?;
                    writeln!(f, "  max     = {}", stats.max)?;
                    writeln!(f, "  average = {:?}", stats.mean)?;
                }
            }
            writeln!(f)?;
        }

        writeln!(f, "Global counts:")?;
        writeln!(f, "  number of families = {}", self.total_rows)
    }
}

///
/// Writes the summary statistics report of the filtered table.
///
pub struct StatisticsReporter<'a> {
    config: &'a PipelineConfig,
}

impl<'a> StatisticsReporter<'a> {
    pub fn new(config: &'a PipelineConfig) -> Self {
        StatisticsReporter { config }
    }

    pub fn run(&self, columns: &[&str]) -> Result<SummaryReport> {
        let input = self.config.filtered_table_path();
        if !input.is_file() {
            return Err(PreprocessingError::MissingInput(input));
        }

        let table = RawTable::from_path(&input)?;
        let report = SummaryReport::from_table(&table, columns)?;

        let output = self.config.summary_report_path();
        if let Some(parent) = output.parent() {
            create_dir_all(parent)?;
        }
        write(&output, report.to_string())?;
        info!(
            "Summarised {} columns over {} families. Wrote {:?}",
            report.columns.len(),
            report.total_rows,
            output
        );

        Ok(report)
    }
}
