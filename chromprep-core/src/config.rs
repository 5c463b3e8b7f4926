use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::counts::InvalidCountPolicy;
use crate::errors::{ChromPrepError, Result};
use crate::models::ExtremeType;

///
/// Locations and parsing options shared by every pipeline stage. Built once
/// (from defaults or a toml file) and handed to each component.
///
/// ```toml
/// database_input_dir = "/data/families_chrom_input"
/// preprocessing_dir = "/data/preprocessing"
/// ploidb_by_family_file = "/data/ploidb_by_family_without_missing.csv"
/// ploidb_by_genus_file = "/data/ploidb_by_genus_without_missing.csv"
/// logs_root = "/data/logs"
/// counts_file_name = "counts.fasta"
/// invalid_counts = "fail"
/// ```
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    /// Root holding one subdirectory per family
    pub database_input_dir: PathBuf,
    /// Where tables, reports and pipeline logs are written
    pub preprocessing_dir: PathBuf,
    pub ploidb_by_family_file: PathBuf,
    pub ploidb_by_genus_file: PathBuf,
    /// Root of the project and per-step run logs
    pub logs_root: PathBuf,
    /// Name of the counts file inside each family directory
    pub counts_file_name: String,
    pub invalid_counts: InvalidCountPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            database_input_dir: PathBuf::from(DEFAULT_DATABASE_INPUT_DIR),
            preprocessing_dir: PathBuf::from(DEFAULT_PREPROCESSING_DIR),
            ploidb_by_family_file: PathBuf::from(DEFAULT_PLOIDB_BY_FAMILY_FILE),
            ploidb_by_genus_file: PathBuf::from(DEFAULT_PLOIDB_BY_GENUS_FILE),
            logs_root: PathBuf::from(DEFAULT_LOGS_ROOT),
            counts_file_name: DEFAULT_COUNTS_FILE_NAME.to_string(),
            invalid_counts: InvalidCountPolicy::default(),
        }
    }
}

impl PipelineConfig {
    pub fn counts_file(&self, family_dir: &Path) -> PathBuf {
        family_dir.join(&self.counts_file_name)
    }

    pub fn aggregated_table_path(&self) -> PathBuf {
        self.preprocessing_dir.join(ALL_FAMILIES_DATA_SUMMARY_FILE)
    }

    pub fn filtered_table_path(&self) -> PathBuf {
        self.preprocessing_dir.join(FAMILIES_FOR_ANALYSIS_FILE)
    }

    pub fn summary_report_path(&self) -> PathBuf {
        self.preprocessing_dir
            .join(FAMILIES_FOR_ANALYSIS_SUMMARY_FILE)
    }

    pub fn skip_log_path(&self) -> PathBuf {
        self.preprocessing_dir.join(SKIPPED_FAMILIES_LOG_FILE)
    }

    pub fn excluded_log_path(&self, min_family_size: u64) -> PathBuf {
        self.preprocessing_dir.join(format!(
            "{}{}.txt",
            EXCLUDED_FAMILIES_LOG_PREFIX, min_family_size
        ))
    }

    pub fn extreme_report_path(&self, extreme_type: ExtremeType) -> PathBuf {
        self.preprocessing_dir
            .join(format!("{}{}", extreme_type, EXTREME_SPECIES_FILE_SUFFIX))
    }
}

impl TryFrom<&Path> for PipelineConfig {
    type Error = ChromPrepError;

    fn try_from(path: &Path) -> Result<Self> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}
