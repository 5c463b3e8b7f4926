use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::FAMILY_TABLE_COLUMNS;
use crate::counts::CountsSummary;
use crate::errors::{ChromPrepError, Result};

///
/// FamilyRecord struct, the per-family statistics row of the aggregated
/// table. Field names map onto the fixed csv columns.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyRecord {
    #[serde(rename = "family_name")]
    pub name: String,
    #[serde(rename = "family_size")]
    pub size: u64,
    pub min_chrom: i64,
    pub max_chrom: i64,
    #[serde(rename = "diff_chrom")]
    pub diff: i64,
    #[serde(rename = "num_of_polyploid_species_by_family")]
    pub ploidy_by_family: u64,
    #[serde(rename = "num_of_polyploid_species_by_genus")]
    pub ploidy_by_genus: u64,
}

impl FamilyRecord {
    pub fn new(
        name: impl Into<String>,
        counts: CountsSummary,
        ploidy_by_family: u64,
        ploidy_by_genus: u64,
    ) -> Self {
        FamilyRecord {
            name: name.into(),
            size: counts.size,
            min_chrom: counts.min_chrom,
            max_chrom: counts.max_chrom,
            diff: counts.diff,
            ploidy_by_family,
            ploidy_by_genus,
        }
    }
}

///
/// FamilyTable struct, an ordered list of [FamilyRecord]. Used both for the
/// aggregated table (all scanned families) and the filtered table.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyTable {
    pub records: Vec<FamilyRecord>,
    pub path: Option<PathBuf>,
}

impl FamilyTable {
    pub fn push(&mut self, record: FamilyRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FamilyRecord> {
        self.records.iter()
    }

    ///
    /// Read a family table from its csv form.
    ///
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ChromPrepError::MissingFile(path.to_path_buf()));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let records = reader
            .deserialize()
            .collect::<std::result::Result<Vec<FamilyRecord>, csv::Error>>()?;

        Ok(FamilyTable {
            records,
            path: Some(path.to_path_buf()),
        })
    }

    ///
    /// Write the table as csv, header first. Parent directories are created
    /// and an existing file is overwritten.
    ///
    pub fn to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }

        // header written by hand so that an empty table still gets one
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        writer.write_record(FAMILY_TABLE_COLUMNS)?;
        for record in &self.records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(())
    }
}

impl TryFrom<&Path> for FamilyTable {
    type Error = ChromPrepError;

    fn try_from(value: &Path) -> Result<Self> {
        FamilyTable::from_path(value)
    }
}

impl FromIterator<FamilyRecord> for FamilyTable {
    fn from_iter<I: IntoIterator<Item = FamilyRecord>>(iter: I) -> Self {
        FamilyTable {
            records: iter.into_iter().collect(),
            path: None,
        }
    }
}

impl<'a> IntoIterator for &'a FamilyTable {
    type Item = &'a FamilyRecord;
    type IntoIter = std::slice::Iter<'a, FamilyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::TempDir;

    #[fixture]
    fn table() -> FamilyTable {
        vec![
            FamilyRecord::new(
                "Fabaceae",
                CountsSummary {
                    size: 4,
                    min_chrom: 9,
                    max_chrom: 27,
                    diff: 18,
                },
                3,
                1,
            ),
            FamilyRecord::new("Poaceae", CountsSummary::default(), 0, 0),
        ]
        .into_iter()
        .collect()
    }

    #[rstest]
    fn test_write_read_round_trip(table: FamilyTable) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/all_families_data_summary.csv");

        table.to_path(&path).unwrap();
        let loaded = FamilyTable::from_path(&path).unwrap();

        assert_eq!(loaded.records, table.records);
        assert_eq!(loaded.path, Some(path));
    }

    #[rstest]
    fn test_csv_layout(table: FamilyTable) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("table.csv");

        table.to_path(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(
            lines[0],
            "family_name,family_size,min_chrom,max_chrom,diff_chrom,num_of_polyploid_species_by_family,num_of_polyploid_species_by_genus"
        );
        assert_eq!(lines[1], "Fabaceae,4,9,27,18,3,1");
        assert_eq!(lines[2], "Poaceae,0,0,0,0,0,0");
    }

    #[rstest]
    fn test_empty_table_keeps_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");

        FamilyTable::default().to_path(&path).unwrap();
        let loaded = FamilyTable::from_path(&path).unwrap();

        assert!(loaded.is_empty());
        assert!(fs::read_to_string(&path).unwrap().starts_with("family_name,"));
    }

    #[rstest]
    fn test_missing_table() {
        let result = FamilyTable::try_from(Path::new("missing.csv"));
        assert!(matches!(result, Err(ChromPrepError::MissingFile(_))));
    }
}
