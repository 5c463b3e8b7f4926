use std::fs::read_dir;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use chromprep_core::counts::parse_counts_file;
use chromprep_core::reference::PloidyReference;
use chromprep_core::utils::is_hidden_name;
use chromprep_core::{AppendLog, FamilyRecord, FamilyTable, PipelineConfig};

use crate::errors::{PreprocessingError, Result};

/// Family counts of one directory scan. `total == skipped + kept`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub total: usize,
    pub skipped: usize,
    pub kept: usize,
}

///
/// Builds the aggregated table: one [FamilyRecord] per family directory
/// that holds a counts file. Families without one are written to the skip
/// log instead.
///
pub struct FamilyScanner<'a> {
    config: &'a PipelineConfig,
    skip_log: AppendLog,
}

impl<'a> FamilyScanner<'a> {
    pub fn new(config: &'a PipelineConfig, skip_log: AppendLog) -> Self {
        FamilyScanner { config, skip_log }
    }

    ///
    /// Scan every family directory under the configured root.
    ///
    /// The skip log is appended to as families are skipped; nothing else is
    /// written.
    ///
    pub fn scan(&self) -> Result<(FamilyTable, ScanSummary)> {
        let root = &self.config.database_input_dir;
        if !root.is_dir() {
            return Err(PreprocessingError::MissingRootDirectory(root.clone()));
        }

        let by_family = load_reference(&self.config.ploidb_by_family_file)?;
        let by_genus = load_reference(&self.config.ploidb_by_genus_file)?;

        let family_dirs = list_family_dirs(root)?;
        info!(
            "Scanning {} family directories in {:?}",
            family_dirs.len(),
            root
        );

        let pb = ProgressBar::new(family_dirs.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
        );

        let mut table = FamilyTable::default();
        let mut summary = ScanSummary::default();

        for family_dir in family_dirs {
            let family_name = family_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            summary.total += 1;
            pb.set_message(family_name.clone());

            let counts_path = self.config.counts_file(&family_dir);
            if !counts_path.is_file() {
                warn!("{} skipped: no {}", family_name, self.config.counts_file_name);
                self.skip_log.append_line(&family_name)?;
                summary.skipped += 1;
                pb.inc(1);
                continue;
            }

            let counts = parse_counts_file(&counts_path, self.config.invalid_counts)?;
            debug!(
                "{}: size={} min={} max={}",
                family_name, counts.size, counts.min_chrom, counts.max_chrom
            );

            let ploidy_by_family = by_family.count_polyploid(&family_name);
            let ploidy_by_genus = by_genus.count_polyploid(&family_name);
            table.push(FamilyRecord::new(
                family_name,
                counts,
                ploidy_by_family,
                ploidy_by_genus,
            ));
            summary.kept += 1;
            pb.inc(1);
        }

        pb.finish_and_clear();

        Ok((table, summary))
    }

    ///
    /// Scan and write the aggregated table to its configured location.
    ///
    pub fn run(&self) -> Result<ScanSummary> {
        let (table, summary) = self.scan()?;

        let output = self.config.aggregated_table_path();
        table.to_path(&output)?;
        info!(
            "Iterated {} families; skipped {}; kept {}. Wrote {:?}",
            summary.total, summary.skipped, summary.kept, output
        );

        Ok(summary)
    }
}

fn load_reference(path: &Path) -> Result<PloidyReference> {
    if !path.is_file() {
        return Err(PreprocessingError::MissingReferenceTable(path.to_path_buf()));
    }
    Ok(PloidyReference::from_path(path)?)
}

///
/// Immediate, non-hidden subdirectories of `root`, sorted by name so the
/// table comes out in the same order on every filesystem.
///
fn list_family_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if is_hidden_name(&entry.file_name().to_string_lossy()) {
            continue;
        }
        dirs.push(entry.path());
    }
    dirs.sort();

    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    fn test_list_family_dirs_skips_hidden_and_files() {
        let dir = TempDir::new().unwrap();
        for name in ["Rosaceae", "Fabaceae", ".ipynb_checkpoints", ".git"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::write(dir.path().join("README.txt"), "not a family").unwrap();

        let dirs = list_family_dirs(dir.path()).unwrap();
        let names: Vec<String> = dirs
            .iter()
            .map(|d| d.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["Fabaceae", "Rosaceae"]);
    }

    #[rstest]
    fn test_missing_root_directory() {
        let dir = TempDir::new().unwrap();
        let config = PipelineConfig {
            database_input_dir: dir.path().join("nope"),
            ..PipelineConfig::default()
        };
        let scanner = FamilyScanner::new(&config, AppendLog::new(dir.path().join("skip.txt")));

        assert!(matches!(
            scanner.scan(),
            Err(PreprocessingError::MissingRootDirectory(_))
        ));
    }
}
