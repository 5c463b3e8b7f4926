use clap::Command;

pub const STATISTICS_CMD: &str = "compute-statistics";

pub fn create_statistics_cli() -> Command {
    Command::new(STATISTICS_CMD)
        .about("Write min / max / mean of every numeric column of the filtered family table.")
}
