pub mod history;
pub mod query;

use clap::Subcommand;
pub use history::HistoryArgs;
pub use query::QueryArgs;

/// Common error type for command handlers.
pub type CommandResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build an index from a corpus file and run an interactive query REPL.
    ///
    /// Example:
    ///   subseq query corpus.txt
    ///   subseq query -n 50 --json corpus.txt
    Query(QueryArgs),

    /// Show past queries.
    History(HistoryArgs),
}
