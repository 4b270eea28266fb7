use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "bikeshare",
    about = "Explore US bike-share trip data: busiest times, popular stations, trip durations and riders",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Used when no subcommand is given
    #[command(flatten)]
    pub explore: ExploreArgs,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactive session (default)
    Explore(ExploreArgs),
    /// One non-interactive pass over a selection
    Report(ReportArgs),
    /// Print example invocations
    Examples,
}

/// Options shared by every subcommand that reads data.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Disable ANSI colour in headings
    #[arg(long)]
    pub no_color: bool,
}

/// `bikeshare explore …`
#[derive(Args, Debug, Clone)]
pub struct ExploreArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

/// `bikeshare report …`
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// chicago, "new york city" or washington
    #[arg(long)]
    pub city: String,

    /// all, or january..june
    #[arg(long, default_value = "all")]
    pub month: String,

    /// all, or monday..sunday
    #[arg(long, default_value = "all")]
    pub day: String,

    /// Also print this many pages of raw trips
    #[arg(long, value_name = "PAGES", default_value_t = 0)]
    pub raw: usize,
}
