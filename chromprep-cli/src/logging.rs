use std::path::PathBuf;
use std::sync::Once;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chromprep_core::{PipelineConfig, RunLogger, RunRecord};

use crate::consts::{BIN_NAME, RUN_LOG_STEP};

pub const LOG_ENV: &str = "CHROMPREP_LOG";
pub const RUN_DESCRIPTION: &str = "Preprocessing pipeline (controlled by the step selector): \
    aggregate, filter-by-min-size, compute-statistics, extract-extreme-species.";

static INIT: Once = Once::new();

///
/// Initialize diagnostics on stderr. Levels come from `CHROMPREP_LOG`
/// (e.g. `CHROMPREP_LOG=chromprep_preprocessing=debug`), `info` otherwise.
///
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .with(filter)
            .init();
    });
}

/// What a step handler reports back for the run log.
#[derive(Debug, Clone, Default)]
pub struct StepOutcome {
    pub run: &'static str,
    pub params: Vec<(String, String)>,
    pub outputs: Vec<PathBuf>,
    pub notes: Option<String>,
}

impl StepOutcome {
    pub fn new(run: &'static str) -> Self {
        StepOutcome {
            run,
            ..StepOutcome::default()
        }
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn output(mut self, path: PathBuf) -> Self {
        self.outputs.push(path);
        self
    }

    pub fn notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }
}

///
/// Assemble the run record of one invocation: shared parameters first, then
/// the step's own, then the list of steps that ran.
///
/// `ran_steps` is written as a bracketed, comma separated list of step
/// names (`[aggregate]`), not as a quoted list literal.
///
pub fn build_run_record(
    config: &PipelineConfig,
    outcome: StepOutcome,
    user_notes: Option<&str>,
) -> RunRecord {
    let mut params = vec![
        ("run".to_string(), outcome.run.to_string()),
        (
            "database_chr_count_input".to_string(),
            config.database_input_dir.display().to_string(),
        ),
        (
            "preprocessing_dir".to_string(),
            config.preprocessing_dir.display().to_string(),
        ),
    ];
    params.extend(outcome.params);
    params.push(("ran_steps".to_string(), format!("[{}]", outcome.run)));

    let mut notes_parts: Vec<String> = outcome.notes.into_iter().collect();
    if let Some(user_notes) = user_notes.filter(|n| !n.is_empty()) {
        notes_parts.push(format!("User notes: {}", user_notes));
    }
    let notes = (!notes_parts.is_empty()).then(|| notes_parts.join(" "));

    RunRecord {
        step: RUN_LOG_STEP.to_string(),
        script: BIN_NAME.to_string(),
        params,
        outputs: outcome
            .outputs
            .iter()
            .map(|o| o.display().to_string())
            .collect(),
        description: RUN_DESCRIPTION.to_string(),
        notes,
    }
}

pub fn log_run(config: &PipelineConfig, outcome: StepOutcome, user_notes: Option<&str>) -> Result<()> {
    let record = build_run_record(config, outcome, user_notes);
    RunLogger::new(&config.logs_root).log_run(&record)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    fn test_build_run_record() {
        let config = PipelineConfig::default();
        let outcome = StepOutcome::new("filter-by-min-size")
            .param("min_family_size", 20)
            .output(PathBuf::from("input_data/families_for_analysis.csv"))
            .notes("Filter(min_family_size=20): excluded 1/3; kept 2.".to_string());

        let record = build_run_record(&config, outcome, Some("second pass"));

        let keys: Vec<&str> = record.params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "run",
                "database_chr_count_input",
                "preprocessing_dir",
                "min_family_size",
                "ran_steps"
            ]
        );
        assert_eq!(record.run_mode(), "filter-by-min-size");
        assert_eq!(record.params[4].1, "[filter-by-min-size]");
        assert_eq!(
            record.notes.as_deref(),
            Some("Filter(min_family_size=20): excluded 1/3; kept 2. User notes: second pass")
        );
        assert_eq!(record.outputs, vec!["input_data/families_for_analysis.csv"]);
    }

    #[rstest]
    fn test_no_notes() {
        let record = build_run_record(
            &PipelineConfig::default(),
            StepOutcome::new("compute-statistics"),
            None,
        );
        assert_eq!(record.notes, None);
    }

    #[rstest]
    fn test_log_run_writes_both_logs() {
        let dir = TempDir::new().unwrap();
        let config = PipelineConfig {
            logs_root: dir.path().join("logs"),
            ..PipelineConfig::default()
        };

        log_run(&config, StepOutcome::new("aggregate"), None).unwrap();

        assert!(dir.path().join("logs/project.log").is_file());
        assert!(dir.path().join("logs/preprocessing/preprocessing.log").is_file());
    }
}
