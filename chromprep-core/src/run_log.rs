//! Run logging: every pipeline invocation leaves one line in the project log
//! and one detailed block in the log of its step.

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};

use crate::consts::{PROJECT_LOG_FILE, TIMESTAMP_FORMAT};
use crate::errors::Result;
use crate::log_writer::AppendLog;

/// What a single invocation did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunRecord {
    pub step: String,
    pub script: String,
    /// Parameters in the order they should be listed
    pub params: Vec<(String, String)>,
    pub outputs: Vec<String>,
    pub description: String,
    pub notes: Option<String>,
}

impl RunRecord {
    /// Value of the `run` parameter, `NA` when absent.
    pub fn run_mode(&self) -> &str {
        self.params
            .iter()
            .find(|(k, _)| k == "run")
            .map(|(_, v)| v.as_str())
            .unwrap_or("NA")
    }

    fn summary_line(&self, timestamp: &str) -> String {
        format!(
            "{} | {} | run={} | {} | {}",
            timestamp,
            self.step,
            self.run_mode(),
            self.script,
            self.description
        )
    }

    fn detail_block(&self, timestamp: &str) -> String {
        let mut block = vec![
            "=".repeat(80),
            format!("DATE        : {}", timestamp),
            format!("SCRIPT      : {}", self.script),
            String::new(),
            "PARAMETERS:".to_string(),
        ];
        block.extend(self.params.iter().map(|(k, v)| format!("  - {}: {}", k, v)));
        block.push(String::new());
        block.push("OUTPUTS:".to_string());
        block.extend(self.outputs.iter().map(|o| format!("  - {}", o)));
        block.push(String::new());
        block.push("DESCRIPTION:".to_string());
        block.push(format!("  {}", self.description));
        if let Some(notes) = self.notes.as_deref().filter(|n| !n.is_empty()) {
            block.push(String::new());
            block.push("NOTES:".to_string());
            block.push(format!("  {}", notes));
        }
        block.push(String::new());

        block.join("\n")
    }
}

///
/// Writes run records under a logs root:
///
/// - `<logs_root>/project.log`: one line per run
/// - `<logs_root>/<step>/<step>.log`: one block per run
///
#[derive(Debug, Clone)]
pub struct RunLogger {
    logs_root: PathBuf,
}

impl RunLogger {
    pub fn new(logs_root: impl Into<PathBuf>) -> Self {
        RunLogger {
            logs_root: logs_root.into(),
        }
    }

    pub fn project_log(&self) -> AppendLog {
        AppendLog::new(self.logs_root.join(PROJECT_LOG_FILE))
    }

    pub fn step_log(&self, step: &str) -> AppendLog {
        AppendLog::new(self.logs_root.join(step).join(format!("{}.log", step)))
    }

    pub fn log_run(&self, record: &RunRecord) -> Result<()> {
        self.log_run_at(record, Local::now().naive_local())
    }

    pub fn log_run_at(&self, record: &RunRecord, when: NaiveDateTime) -> Result<()> {
        let timestamp = when.format(TIMESTAMP_FORMAT).to_string();

        self.project_log()
            .append_line(&record.summary_line(&timestamp))?;
        self.step_log(&record.step)
            .append(&record.detail_block(&timestamp))?;

        Ok(())
    }
}
