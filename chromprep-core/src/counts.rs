//! Parsing of per-family chromosome count files.
//!
//! A counts file is FASTA-like: every record starts with a `>` header line
//! describing one species, followed by a line holding its chromosome count.
//!
//! ```text
//! >Lathyrus sativus 1234
//! 14
//! >Vicia faba 5678
//! 12
//! ```

use std::io::BufRead;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{ChromPrepError, Result};
use crate::utils::get_dynamic_reader;

/// What to do with a count line that is not an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidCountPolicy {
    /// Abort with [ChromPrepError::InvalidChromCount].
    #[default]
    Fail,
    /// Log a warning and ignore the line.
    Skip,
}

/// Size and chromosome range of one family's counts file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountsSummary {
    /// Number of `>` header lines
    pub size: u64,
    pub min_chrom: i64,
    pub max_chrom: i64,
    /// `max_chrom - min_chrom`
    pub diff: i64,
}

///
/// Scan a counts file once, counting headers and tracking the chromosome
/// count range.
///
/// Blank lines are ignored. A file without any count line yields a
/// `(0, 0, 0)` range.
///
/// # Arguments
///
/// - path: path to the counts file, optionally gzip'd
/// - policy: how to treat non-numeric count lines
///
pub fn parse_counts_file(path: &Path, policy: InvalidCountPolicy) -> Result<CountsSummary> {
    let reader = get_dynamic_reader(path)?;

    let mut size: u64 = 0;
    let mut range: Option<(i64, i64)> = None;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;

        if line.starts_with('>') {
            size += 1;
            continue;
        }

        let value = line.trim();
        if value.is_empty() {
            continue;
        }

        let chrom = match value.parse::<i64>() {
            Ok(chrom) => chrom,
            Err(_) => match policy {
                InvalidCountPolicy::Fail => {
                    return Err(ChromPrepError::InvalidChromCount {
                        path: path.to_path_buf(),
                        line: line_num + 1,
                        value: value.to_string(),
                    });
                }
                InvalidCountPolicy::Skip => {
                    warn!(
                        "Skipping non-numeric chromosome count {:?} at line {} of {:?}",
                        value,
                        line_num + 1,
                        path
                    );
                    continue;
                }
            },
        };

        range = Some(match range {
            None => (chrom, chrom),
            Some((min, max)) => (min.min(chrom), max.max(chrom)),
        });
    }

    let (min_chrom, max_chrom) = range.unwrap_or((0, 0));

    Ok(CountsSummary {
        size,
        min_chrom,
        max_chrom,
        diff: max_chrom - min_chrom,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::TempDir;

    #[fixture]
    fn tmp() -> TempDir {
        TempDir::new().expect("Failed to create temp dir")
    }

    fn write_counts(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("Failed to write counts file");
        path
    }

    #[rstest]
    fn test_parse_counts_file(tmp: TempDir) {
        let path = write_counts(
            &tmp,
            "counts.fasta",
            ">Lathyrus sativus\n9\n>Vicia faba\n9\n>Pisum sativum\n18\n>Cicer arietinum\n27\n",
        );

        let counts = parse_counts_file(&path, InvalidCountPolicy::Fail).unwrap();

        assert_eq!(
            counts,
            CountsSummary {
                size: 4,
                min_chrom: 9,
                max_chrom: 27,
                diff: 18
            }
        );
    }

    #[rstest]
    fn test_blank_lines_and_whitespace(tmp: TempDir) {
        let path = write_counts(&tmp, "counts.fasta", ">a b\n  12 \n\n>c d\n\n7\n\n");

        let counts = parse_counts_file(&path, InvalidCountPolicy::Fail).unwrap();

        assert_eq!(counts.size, 2);
        assert_eq!(counts.min_chrom, 7);
        assert_eq!(counts.max_chrom, 12);
        assert_eq!(counts.diff, 5);
    }

    #[rstest]
    fn test_headers_only_defaults_to_zero_range(tmp: TempDir) {
        let path = write_counts(&tmp, "counts.fasta", ">a b\n>c d\n");

        let counts = parse_counts_file(&path, InvalidCountPolicy::Fail).unwrap();

        assert_eq!(
            counts,
            CountsSummary {
                size: 2,
                min_chrom: 0,
                max_chrom: 0,
                diff: 0
            }
        );
    }

    #[rstest]
    fn test_invalid_count_fails_by_default(tmp: TempDir) {
        let path = write_counts(&tmp, "counts.fasta", ">a b\n12\n>c d\nx\n");

        let result = parse_counts_file(&path, InvalidCountPolicy::Fail);

        match result {
            Err(ChromPrepError::InvalidChromCount { line, value, .. }) => {
                assert_eq!(line, 4);
                assert_eq!(value, "x");
            }
            other => panic!("Expected InvalidChromCount, got {:?}", other),
        }
    }

    #[rstest]
    fn test_invalid_count_skipped_on_request(tmp: TempDir) {
        let path = write_counts(&tmp, "counts.fasta", ">a b\n12\n>c d\nx\n>e f\n30\n");

        let counts = parse_counts_file(&path, InvalidCountPolicy::Skip).unwrap();

        assert_eq!(counts.size, 3);
        assert_eq!(counts.min_chrom, 12);
        assert_eq!(counts.max_chrom, 30);
    }

    #[rstest]
    fn test_gzipped_counts_file(tmp: TempDir) {
        let path = tmp.path().join("counts.fasta.gz");
        let mut encoder = GzEncoder::new(
            fs::File::create(&path).expect("Failed to create gz file"),
            Compression::default(),
        );
        encoder.write_all(b">a b\n5\n>c d\n40\n").unwrap();
        encoder.finish().unwrap();

        let counts = parse_counts_file(&path, InvalidCountPolicy::Fail).unwrap();

        assert_eq!(counts.size, 2);
        assert_eq!(counts.diff, 35);
    }
}
