use anyhow::{Context, Result};
use clap::ArgMatches;

use chromprep_core::{ExtremeType, PipelineConfig};
use chromprep_preprocessing::ExtremeExtractor;

use super::cli::EXTREME_CMD;
use crate::logging::StepOutcome;

pub fn run_extreme(config: &PipelineConfig, matches: &ArgMatches) -> Result<StepOutcome> {
    let extreme_type: ExtremeType = matches
        .get_one::<String>("extreme-type")
        .map(String::as_str)
        .unwrap_or_default()
        .parse()?;

    let report = ExtremeExtractor::new(config)
        .run(extreme_type)
        .with_context(|| format!("Failed to extract {} chromosome species", extreme_type))?;

    let output = config.extreme_report_path(extreme_type);
    eprintln!(
        "{} chromosome number = {} in {} families. Report: {}",
        extreme_type,
        report.value,
        report.families.len(),
        output.display()
    );

    let file_name = output
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(StepOutcome::new(EXTREME_CMD)
        .param("extreme_type", extreme_type)
        .param(
            "families_for_analysis_csv_file",
            config.filtered_table_path().display(),
        )
        .output(output)
        .notes(format!(
            "Extreme species report: extreme_type={}; output={}.",
            extreme_type, file_name
        )))
}
