//! Species with the globally extreme chromosome count.
//!
//! Runs in two phases. The first works on the filtered table only: it takes
//! the global min (or max) of the target column and collects the families
//! that reach it. The second re-reads the counts files of just those
//! families and lists the species whose own count equals the extreme.

use std::fmt::{self, Display};
use std::fs::{create_dir_all, write};
use std::io::{BufRead, Read};
use std::path::Path;

use bio::io::fasta;
use tracing::{debug, info};

use chromprep_core::consts::FAMILY_NAME_COL;
use chromprep_core::utils::get_dynamic_reader;
use chromprep_core::{ExtremeType, PipelineConfig, RawTable};

use crate::errors::{PreprocessingError, Result};

/// Species of one family whose chromosome count equals the extreme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilySpecies {
    pub family: String,
    pub species: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtremeReport {
    pub extreme_type: ExtremeType,
    pub value: f64,
    pub families: Vec<FamilySpecies>,
}

impl Display for ExtremeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Species with {} chromosome number = {}",
            self.extreme_type, self.value
        )?;
        writeln!(f, "{}", "=".repeat(50))?;

        for family in &self.families {
            writeln!(f)?;
            writeln!(f, "{}:", family.family)?;
            for species in &family.species {
                writeln!(f, "  {}", species)?;
            }
        }

        Ok(())
    }
}

///
/// Global minimum or maximum of the present values, `None` when there are
/// none.
///
pub fn find_global_extreme(values: &[Option<f64>], extreme_type: ExtremeType) -> Option<f64> {
    let valid = values.iter().flatten().copied();
    match extreme_type {
        ExtremeType::Min => valid.reduce(f64::min),
        ExtremeType::Max => valid.reduce(f64::max),
    }
}

/// Families whose value equals `extreme` exactly, in table order.
pub fn matching_families(names: &[&str], values: &[Option<f64>], extreme: f64) -> Vec<String> {
    names
        .iter()
        .zip(values)
        .filter(|(_, value)| **value == Some(extreme))
        .map(|(name, _)| name.to_string())
        .collect()
}

///
/// Species name of a record: the first two whitespace separated tokens of
/// its header text.
///
pub fn species_name(header: &str) -> String {
    header
        .split_whitespace()
        .take(2)
        .collect::<Vec<&str>>()
        .join(" ")
}

///
/// Species in a counts file whose chromosome count equals `target`.
/// Records whose count does not parse are skipped, as are any lines before
/// the first `>` header.
///
pub fn species_with_chrom_count(counts_path: &Path, target: f64) -> Result<Vec<String>> {
    let mut raw = get_dynamic_reader(counts_path)?;

    // the fasta reader wants a header on the very first line
    let mut first_header = String::new();
    loop {
        first_header.clear();
        if raw.read_line(&mut first_header)? == 0 {
            return Ok(Vec::new());
        }
        if first_header.starts_with('>') {
            break;
        }
    }
    let reader = fasta::Reader::new(first_header.as_bytes().chain(raw));

    let mut species = Vec::new();
    for record in reader.records() {
        let record = record?;

        let chrom = std::str::from_utf8(record.seq())
            .ok()
            .and_then(|s| s.trim().parse::<i64>().ok());
        let Some(chrom) = chrom else {
            continue;
        };

        if chrom as f64 == target {
            let header = match record.desc() {
                Some(desc) => format!("{} {}", record.id(), desc),
                None => record.id().to_string(),
            };
            species.push(species_name(&header));
        }
    }

    Ok(species)
}

///
/// Builds the extreme chromosome count report from the filtered table and
/// the raw counts files.
///
pub struct ExtremeExtractor<'a> {
    config: &'a PipelineConfig,
}

impl<'a> ExtremeExtractor<'a> {
    pub fn new(config: &'a PipelineConfig) -> Self {
        ExtremeExtractor { config }
    }

    pub fn extract(&self, extreme_type: ExtremeType) -> Result<ExtremeReport> {
        let input = self.config.filtered_table_path();
        if !input.is_file() {
            return Err(PreprocessingError::MissingInput(input));
        }

        // phase 1: table only
        let table = RawTable::from_path(&input)?;
        let names = table.text_column(FAMILY_NAME_COL)?;
        let values = table.numeric_column(extreme_type.column())?;

        let extreme = find_global_extreme(&values, extreme_type)
            .ok_or_else(|| PreprocessingError::NoValidValues(extreme_type.column().to_string()))?;
        let families = matching_families(&names, &values, extreme);
        info!(
            "Global {} chromosome number is {}, reached by {} families",
            extreme_type,
            extreme,
            families.len()
        );

        // phase 2: raw files of the matching families only
        let mut report = ExtremeReport {
            extreme_type,
            value: extreme,
            families: Vec::new(),
        };
        for family in families {
            let counts_path = self
                .config
                .counts_file(&self.config.database_input_dir.join(&family));
            if !counts_path.is_file() {
                debug!("{} skipped: {:?} not found", family, counts_path);
                continue;
            }

            let species = species_with_chrom_count(&counts_path, extreme)?;
            report.families.push(FamilySpecies { family, species });
        }

        Ok(report)
    }

    pub fn run(&self, extreme_type: ExtremeType) -> Result<ExtremeReport> {
        let report = self.extract(extreme_type)?;

        let output = self.config.extreme_report_path(extreme_type);
        if let Some(parent) = output.parent() {
            create_dir_all(parent)?;
        }
        write(&output, report.to_string())?;
        info!("Wrote {:?}", output);

        Ok(report)
    }
}
