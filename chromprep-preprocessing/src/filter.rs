use std::fs::create_dir_all;
use std::path::Path;

use tracing::info;

use chromprep_core::consts::{FAMILY_NAME_COL, FAMILY_SIZE_COL};
use chromprep_core::{FamilyRecord, FamilyTable, PipelineConfig};

use crate::errors::{PreprocessingError, Result};

/// Row counts of one filtering run. `excluded + kept == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub total: usize,
    pub excluded: usize,
    pub kept: usize,
}

///
/// Split a family table into families with at least `min_family_size`
/// species and the rest. Row order is preserved in both halves.
///
/// Returns `(kept, excluded)`.
///
pub fn partition_by_min_size(
    table: &FamilyTable,
    min_family_size: u64,
) -> (FamilyTable, FamilyTable) {
    let (kept, excluded): (Vec<FamilyRecord>, Vec<FamilyRecord>) = table
        .iter()
        .cloned()
        .partition(|record| record.size >= min_family_size);

    (
        FamilyTable {
            records: kept,
            path: None,
        },
        FamilyTable {
            records: excluded,
            path: None,
        },
    )
}

///
/// Filters the aggregated table by family size and persists both halves:
/// the kept rows as the filtered table, the excluded rows as a per-threshold
/// log.
///
pub struct SizeFilter<'a> {
    config: &'a PipelineConfig,
}

impl<'a> SizeFilter<'a> {
    pub fn new(config: &'a PipelineConfig) -> Self {
        SizeFilter { config }
    }

    pub fn run(&self, min_family_size: u64) -> Result<FilterSummary> {
        let input = self.config.aggregated_table_path();
        if !input.is_file() {
            return Err(PreprocessingError::MissingInput(input));
        }

        let table = FamilyTable::from_path(&input)?;
        let (kept, excluded) = partition_by_min_size(&table, min_family_size);

        let excluded_log = self.config.excluded_log_path(min_family_size);
        write_excluded_log(&excluded, &excluded_log)?;

        let output = self.config.filtered_table_path();
        kept.to_path(&output)?;

        let summary = FilterSummary {
            total: table.len(),
            excluded: excluded.len(),
            kept: kept.len(),
        };
        info!(
            "Filter(min_family_size={}): excluded {}/{}; kept {}",
            min_family_size, summary.excluded, summary.total, summary.kept
        );

        Ok(summary)
    }
}

///
/// Tab separated `family_name, family_size` listing of the excluded rows,
/// overwritten on every run.
///
fn write_excluded_log(excluded: &FamilyTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(path)?;
    writer.write_record([FAMILY_NAME_COL, FAMILY_SIZE_COL])?;
    for record in excluded {
        let size = record.size.to_string();
        writer.write_record([record.name.as_str(), size.as_str()])?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chromprep_core::counts::CountsSummary;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn family(name: &str, size: u64) -> FamilyRecord {
        FamilyRecord::new(
            name,
            CountsSummary {
                size,
                ..CountsSummary::default()
            },
            0,
            0,
        )
    }

    #[fixture]
    fn table() -> FamilyTable {
        vec![family("A", 10), family("B", 60), family("C", 80), family("D", 50)]
            .into_iter()
            .collect()
    }

    #[rstest]
    fn test_partition_by_min_size(table: FamilyTable) {
        let (kept, excluded) = partition_by_min_size(&table, 50);

        let kept: Vec<&str> = kept.iter().map(|r| r.name.as_str()).collect();
        let excluded: Vec<&str> = excluded.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(kept, vec!["B", "C", "D"]);
        assert_eq!(excluded, vec!["A"]);
    }

    #[rstest]
    #[case(0)]
    #[case(10)]
    #[case(11)]
    #[case(51)]
    #[case(81)]
    #[case(u64::MAX)]
    fn test_partition_is_complete(table: FamilyTable, #[case] threshold: u64) {
        let (kept, excluded) = partition_by_min_size(&table, threshold);

        assert_eq!(kept.len() + excluded.len(), table.len());
        assert!(kept.iter().all(|r| r.size >= threshold));
        assert!(excluded.iter().all(|r| r.size < threshold));
    }
}
