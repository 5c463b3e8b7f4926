use anyhow::{Context, Result};
use clap::ArgMatches;

use chromprep_core::PipelineConfig;
use chromprep_core::consts::FAMILY_TABLE_COLUMNS;
use chromprep_preprocessing::StatisticsReporter;

use super::cli::STATISTICS_CMD;
use crate::logging::StepOutcome;

pub fn run_statistics(config: &PipelineConfig, _matches: &ArgMatches) -> Result<StepOutcome> {
    let report = StatisticsReporter::new(config)
        .run(&FAMILY_TABLE_COLUMNS)
        .context("Failed to compute summary statistics")?;

    let output = config.summary_report_path();
    eprintln!(
        "Summarised {} families into {}",
        report.total_rows,
        output.display()
    );

    let columns: Vec<&str> = report.columns.iter().map(|c| c.column.as_str()).collect();

    Ok(StepOutcome::new(STATISTICS_CMD)
        .param(
            "families_for_analysis_file",
            config.filtered_table_path().display(),
        )
        .param("columns", format!("[{}]", columns.join(", ")))
        .output(output))
}
