mod handlers;
pub mod parse;
pub mod report;
pub mod shell;
pub mod style;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::ExploreError;

pub fn run() -> Result<(), ExploreError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        None => handlers::explore(&cli.explore),
        Some(parse::Command::Explore(a)) => handlers::explore(&a),
        Some(parse::Command::Report(a)) => handlers::report(&a),
        Some(parse::Command::Examples) => {
            handlers::examples();
            Ok(())
        }
    }
}
