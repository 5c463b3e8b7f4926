mod aggregate;
mod extreme;
mod filter;
mod logging;
mod statistics;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

use chromprep_core::PipelineConfig;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "chromprep";
    pub const RUN_LOG_STEP: &str = "preprocessing";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Preprocessing pipeline for per-family chromosome count data: aggregate family statistics, filter by family size, summarise and find species with extreme chromosome numbers.")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .global(true)
                .help("TOML file with input/output locations (default: paths relative to the working directory)"),
        )
        .arg(
            Arg::new("notes")
                .long("notes")
                .value_name("TEXT")
                .global(true)
                .help("Optional free-text notes to store in the run log"),
        )
        .subcommand(aggregate::cli::create_aggregate_cli())
        .subcommand(filter::cli::create_filter_cli())
        .subcommand(statistics::cli::create_statistics_cli())
        .subcommand(extreme::cli::create_extreme_cli())
}

fn load_config(matches: &ArgMatches) -> Result<PipelineConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => PipelineConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path)),
        None => Ok(PipelineConfig::default()),
    }
}

fn main() -> Result<()> {
    logging::init_tracing();

    let app = build_parser();
    let matches = app.get_matches();

    // global args are propagated down to the step
    let (step, matches) = matches
        .subcommand()
        .expect("A step is required");
    let config = load_config(matches)?;

    let outcome = match step {
        //
        // AGGREGATE
        //
        aggregate::cli::AGGREGATE_CMD => aggregate::handlers::run_aggregate(&config, matches)?,

        //
        // FILTER BY MIN SIZE
        //
        filter::cli::FILTER_CMD => filter::handlers::run_filter(&config, matches)?,

        //
        // SUMMARY STATISTICS
        //
        statistics::cli::STATISTICS_CMD => statistics::handlers::run_statistics(&config, matches)?,

        //
        // EXTREME SPECIES
        //
        extreme::cli::EXTREME_CMD => extreme::handlers::run_extreme(&config, matches)?,

        _ => unreachable!("Subcommand not found"),
    };

    let notes = matches.get_one::<String>("notes").map(String::as_str);
    logging::log_run(&config, outcome, notes).context("Failed to write run log")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn test_verify_cli() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_step_is_required() {
        let result = build_parser().try_get_matches_from(["chromprep"]);
        assert!(result.is_err());
    }

    #[rstest]
    fn test_global_args_after_step() {
        let matches = build_parser()
            .try_get_matches_from([
                "chromprep",
                "filter-by-min-size",
                "--min-family-size",
                "20",
                "--notes",
                "rerun with smaller families",
            ])
            .unwrap();

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, filter::cli::FILTER_CMD);
        assert_eq!(sub.get_one::<u64>("min-family-size"), Some(&20));
        assert_eq!(
            sub.get_one::<String>("notes").map(String::as_str),
            Some("rerun with smaller families")
        );
    }

    #[rstest]
    fn test_defaults() {
        let matches = build_parser()
            .try_get_matches_from(["chromprep", "extract-extreme-species"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(
            sub.get_one::<String>("extreme-type").map(String::as_str),
            Some("min")
        );

        let matches = build_parser()
            .try_get_matches_from(["chromprep", "filter-by-min-size"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<u64>("min-family-size"), Some(&50));
    }

    #[rstest]
    fn test_invalid_extreme_type_rejected() {
        let result = build_parser()
            .try_get_matches_from(["chromprep", "extract-extreme-species", "--extreme-type", "median"]);
        assert!(result.is_err());
    }
}
