use anyhow::{Context, Result};
use clap::ArgMatches;

use chromprep_core::PipelineConfig;
use chromprep_preprocessing::SizeFilter;

use super::cli::FILTER_CMD;
use crate::logging::StepOutcome;

pub fn run_filter(config: &PipelineConfig, matches: &ArgMatches) -> Result<StepOutcome> {
    let min_family_size = *matches
        .get_one::<u64>("min-family-size")
        .context("--min-family-size is required")?;

    let summary = SizeFilter::new(config)
        .run(min_family_size)
        .context("Failed to filter families by size")?;

    eprintln!(
        "Kept {} of {} families with family_size >= {}",
        summary.kept, summary.total, min_family_size
    );

    Ok(StepOutcome::new(FILTER_CMD)
        .param("min_family_size", min_family_size)
        .output(config.filtered_table_path())
        .output(config.excluded_log_path(min_family_size))
        .notes(format!(
            "Filter(min_family_size={}): excluded {}/{}; kept {}.",
            min_family_size, summary.excluded, summary.total, summary.kept
        )))
}
