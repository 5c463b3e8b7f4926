use std::path::Path;

use crate::consts::{REFERENCE_FAMILY_COL, REFERENCE_PLOIDY_COL};
use crate::errors::{ChromPrepError, Result};
use crate::utils::column_index;

///
/// One row of a ploidy reference table: the family it belongs to and
/// whether it carries evidence of polyploidy.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRow {
    pub family: String,
    pub ploidy_inference: bool,
}

///
/// A ploidy reference table (by family or by genus). Read once, never
/// mutated.
///
#[derive(Debug, Clone, Default)]
pub struct PloidyReference {
    pub rows: Vec<ReferenceRow>,
}

impl PloidyReference {
    ///
    /// Load a reference table from a csv file with at least the columns
    /// `Family` and `Ploidy inference`.
    ///
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ChromPrepError::MissingFile(path.to_path_buf()));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();
        let family_idx = column_index(&headers, REFERENCE_FAMILY_COL, path)?;
        let ploidy_idx = column_index(&headers, REFERENCE_PLOIDY_COL, path)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(ReferenceRow {
                family: record.get(family_idx).unwrap_or_default().to_string(),
                ploidy_inference: record.get(ploidy_idx).is_some_and(is_polyploid_flag),
            });
        }

        Ok(PloidyReference { rows })
    }

    ///
    /// Number of rows for `family` flagged with polyploidy evidence.
    ///
    /// The family name is matched exactly: no trimming, case-sensitive.
    ///
    pub fn count_polyploid(&self, family: &str) -> u64 {
        self.rows
            .iter()
            .filter(|row| row.ploidy_inference && row.family == family)
            .count() as u64
    }
}

/// The flag is set when the cell holds the number 1 (`1`, `1.0`).
fn is_polyploid_flag(cell: &str) -> bool {
    cell.trim().parse::<f64>().is_ok_and(|v| v == 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::TempDir;

    #[fixture]
    fn reference_file() -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("ploidb_by_family.csv");
        fs::write(
            &path,
            "Genus,Family,Ploidy inference\n\
             Vicia,Fabaceae,1\n\
             Pisum,Fabaceae,0\n\
             Lathyrus,Fabaceae,1.0\n\
             Cicer,fabaceae,1\n\
             Lens, Fabaceae,1\n\
             Poa,Poaceae,1\n\
             Avena,Poaceae,\n",
        )
        .expect("Failed to write reference file");
        (dir, path)
    }

    #[rstest]
    fn test_count_polyploid(reference_file: (TempDir, PathBuf)) {
        let (_dir, path) = reference_file;
        let reference = PloidyReference::from_path(&path).unwrap();

        assert_eq!(reference.rows.len(), 7);
        assert_eq!(reference.count_polyploid("Fabaceae"), 2);
        assert_eq!(reference.count_polyploid("Poaceae"), 1);
        assert_eq!(reference.count_polyploid("Rosaceae"), 0);
    }

    #[rstest]
    fn test_missing_reference_file() {
        let result = PloidyReference::from_path(Path::new("missing/ploidb.csv"));
        assert!(matches!(result, Err(ChromPrepError::MissingFile(_))));
    }

    #[rstest]
    fn test_missing_ploidy_column() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ploidb.csv");
        fs::write(&path, "Genus,Family\nVicia,Fabaceae\n").unwrap();

        let result = PloidyReference::from_path(&path);

        assert!(matches!(result, Err(ChromPrepError::MissingColumn { .. })));
    }

    #[rstest]
    #[case("1", true)]
    #[case("1.0", true)]
    #[case(" 1 ", true)]
    #[case("0", false)]
    #[case("", false)]
    #[case("yes", false)]
    fn test_is_polyploid_flag(#[case] cell: &str, #[case] expected: bool) {
        assert_eq!(is_polyploid_flag(cell), expected);
    }
}
