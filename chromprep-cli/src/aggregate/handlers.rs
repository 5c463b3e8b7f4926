use anyhow::{Context, Result};
use clap::ArgMatches;

use chromprep_core::counts::InvalidCountPolicy;
use chromprep_core::{AppendLog, PipelineConfig};
use chromprep_preprocessing::FamilyScanner;

use super::cli::AGGREGATE_CMD;
use crate::logging::StepOutcome;

/// Scan every family directory and write the aggregated family table.
/// # Arguments
/// - config: pipeline locations
/// - matches: matched items from CLAP args
pub fn run_aggregate(config: &PipelineConfig, matches: &ArgMatches) -> Result<StepOutcome> {
    let mut config = config.clone();
    if matches.get_flag("skip-invalid-counts") {
        config.invalid_counts = InvalidCountPolicy::Skip;
    }

    let skip_log = AppendLog::new(config.skip_log_path());
    if matches.get_flag("reset-logs") {
        skip_log
            .reset()
            .with_context(|| format!("Failed to reset {}", skip_log.path().display()))?;
    }

    let summary = FamilyScanner::new(&config, skip_log)
        .run()
        .context("Failed to aggregate family counts")?;

    let output = config.aggregated_table_path();
    eprintln!(
        "Aggregated {} families ({} skipped) into {}",
        summary.kept,
        summary.skipped,
        output.display()
    );

    Ok(StepOutcome::new(AGGREGATE_CMD)
        .output(output)
        .notes(format!(
            "Summary CSV: iterated {}; skipped {} missing {}; kept {}.",
            summary.total, summary.skipped, config.counts_file_name, summary.kept
        )))
}
