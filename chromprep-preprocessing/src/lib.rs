//! Preprocessing pipeline for per-family chromosome count data.
//!
//! The pipeline runs in four stages, each reading the artifact the previous
//! one left on disk:
//!
//! 1. [`scanner`]: walk the family directories, summarise every counts file and
//!    join the ploidy reference tables into the aggregated table
//! 2. [`filter`]: keep families with at least a minimum number of species
//! 3. [`statistics`]: min / max / mean of every numeric column of the filtered table
//! 4. [`extreme`]: find the global min or max chromosome count and list the
//!    species that reach it
//!
//! # Example
//!
//! ```no_run
//! use chromprep_core::{AppendLog, ExtremeType, PipelineConfig};
//! use chromprep_preprocessing::{ExtremeExtractor, FamilyScanner, SizeFilter};
//!
//! let config = PipelineConfig::default();
//!
//! let skip_log = AppendLog::new(config.skip_log_path());
//! let scan = FamilyScanner::new(&config, skip_log).run().unwrap();
//! let filtered = SizeFilter::new(&config).run(50).unwrap();
//! let report = ExtremeExtractor::new(&config).run(ExtremeType::Min).unwrap();
//! ```

pub mod errors;
pub mod extreme;
pub mod filter;
pub mod scanner;
pub mod statistics;

// re-exports
pub use errors::{PreprocessingError, Result};
pub use extreme::{ExtremeExtractor, ExtremeReport, FamilySpecies};
pub use filter::{FilterSummary, SizeFilter, partition_by_min_size};
pub use scanner::{FamilyScanner, ScanSummary};
pub use statistics::{ColumnStatistics, ColumnSummary, StatisticsReporter, SummaryReport};
