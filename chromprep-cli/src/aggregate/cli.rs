use clap::{Arg, ArgAction, Command};

pub const AGGREGATE_CMD: &str = "aggregate";

pub fn create_aggregate_cli() -> Command {
    Command::new(AGGREGATE_CMD)
        .about("Summarise every family's counts file into the aggregated family table.")
        .arg(
            Arg::new("reset-logs")
                .long("reset-logs")
                .action(ArgAction::SetTrue)
                .help("Clear the skipped-families log before scanning instead of appending to it"),
        )
        .arg(
            Arg::new("skip-invalid-counts")
                .long("skip-invalid-counts")
                .action(ArgAction::SetTrue)
                .help("Skip non-numeric chromosome count lines with a warning instead of failing"),
        )
}
