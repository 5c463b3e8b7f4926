//! Core data structures for chromprep.
//!
//! This crate holds everything the preprocessing pipeline shares between its
//! stages:
//!
//! - [`models`]: the per-family record, its tabular form and raw tables with numeric coercion
//! - [`counts`]: parsing of per-family chromosome count files (FASTA-like)
//! - [`reference`]: ploidy inference reference tables
//! - [`config`]: the pipeline configuration object and artifact paths
//! - [`log_writer`] and [`run_log`]: append-only logs and the run logger
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use chromprep_core::counts::{parse_counts_file, InvalidCountPolicy};
//!
//! let counts = parse_counts_file(Path::new("Fabaceae/counts.fasta"), InvalidCountPolicy::Fail).unwrap();
//! println!("{} species, chromosome range {}..{}", counts.size, counts.min_chrom, counts.max_chrom);
//! ```

pub mod config;
pub mod consts;
pub mod counts;
pub mod errors;
pub mod log_writer;
pub mod models;
pub mod reference;
pub mod run_log;
pub mod utils;

// re-exports
pub use config::PipelineConfig;
pub use errors::{ChromPrepError, Result};
pub use log_writer::AppendLog;
pub use models::{ExtremeType, FamilyRecord, FamilyTable, RawTable};
pub use run_log::{RunLogger, RunRecord};
