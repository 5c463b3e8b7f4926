// columns of the aggregated and filtered family tables
pub const FAMILY_NAME_COL: &str = "family_name";
pub const FAMILY_SIZE_COL: &str = "family_size";
pub const MIN_CHROM_COL: &str = "min_chrom";
pub const MAX_CHROM_COL: &str = "max_chrom";
pub const DIFF_COL: &str = "diff_chrom";
pub const POLYPLOIDY_BY_FAMILY_COL: &str = "num_of_polyploid_species_by_family";
pub const POLYPLOIDY_BY_GENUS_COL: &str = "num_of_polyploid_species_by_genus";

pub const FAMILY_TABLE_COLUMNS: [&str; 7] = [
    FAMILY_NAME_COL,
    FAMILY_SIZE_COL,
    MIN_CHROM_COL,
    MAX_CHROM_COL,
    DIFF_COL,
    POLYPLOIDY_BY_FAMILY_COL,
    POLYPLOIDY_BY_GENUS_COL,
];

// columns of the ploidy reference tables
pub const REFERENCE_FAMILY_COL: &str = "Family";
pub const REFERENCE_PLOIDY_COL: &str = "Ploidy inference";

// input data
pub const DEFAULT_COUNTS_FILE_NAME: &str = "counts.fasta";
pub const DEFAULT_DATABASE_INPUT_DIR: &str = "input_data/families_chrom_input";
pub const DEFAULT_PREPROCESSING_DIR: &str = "input_data";
pub const DEFAULT_PLOIDB_BY_FAMILY_FILE: &str = "input_data/ploidb_by_family_without_missing.csv";
pub const DEFAULT_PLOIDB_BY_GENUS_FILE: &str = "input_data/ploidb_by_genus_without_missing.csv";
pub const DEFAULT_LOGS_ROOT: &str = "logs";

// artifacts written under the preprocessing directory
pub const ALL_FAMILIES_DATA_SUMMARY_FILE: &str = "all_families_data_summary.csv";
pub const FAMILIES_FOR_ANALYSIS_FILE: &str = "families_for_analysis.csv";
pub const FAMILIES_FOR_ANALYSIS_SUMMARY_FILE: &str = "families_for_analysis_summary.txt";
pub const SKIPPED_FAMILIES_LOG_FILE: &str = "skipped_families_missing_counts_fasta.txt";
pub const EXCLUDED_FAMILIES_LOG_PREFIX: &str = "excluded_families_min_size_";
pub const EXTREME_SPECIES_FILE_SUFFIX: &str = "_chrom_species.txt";

// run logs
pub const PROJECT_LOG_FILE: &str = "project.log";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
