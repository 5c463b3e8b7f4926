use clap::{Arg, Command, value_parser};

pub const FILTER_CMD: &str = "filter-by-min-size";
pub const DEFAULT_MIN_FAMILY_SIZE: &str = "50";

pub fn create_filter_cli() -> Command {
    Command::new(FILTER_CMD)
        .about("Keep families with at least a minimum number of species.")
        .arg(
            Arg::new("min-family-size")
                .long("min-family-size")
                .value_name("N")
                .value_parser(value_parser!(u64))
                .default_value(DEFAULT_MIN_FAMILY_SIZE)
                .help("Minimum family size for filtering"),
        )
}
