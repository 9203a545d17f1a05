use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;
mod stream;

use commands::Command;
use subseq_runtime::logging;

#[derive(Debug, Parser)]
#[command(name = "subseq", version, about = "Case-insensitive subsequence search")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Query(args) => commands::query::run(args),
        Command::History(args) => commands::history::run(args),
    }
}
