use clap::{Arg, Command, builder::PossibleValuesParser};

pub const EXTREME_CMD: &str = "extract-extreme-species";

pub fn create_extreme_cli() -> Command {
    Command::new(EXTREME_CMD)
        .about("List the species that reach the global min or max chromosome number.")
        .arg(
            Arg::new("extreme-type")
                .long("extreme-type")
                .value_parser(PossibleValuesParser::new(["min", "max"]))
                .default_value("min")
                .help("Which extreme to report"),
        )
}
