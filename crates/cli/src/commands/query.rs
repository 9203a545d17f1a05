use std::fs::File;
use std::io::{self, BufRead, BufReader, Stderr, Stdout};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use subseq_engine::{Builder, Index};
use subseq_runtime::history::{HistoryStore, QueryEvent};

use crate::commands::CommandResult;
use crate::printer::{
    ColorChoice, HumanPrinter, JsonPrinter, OutputFormat, PrinterConfig, QueryPrintContext,
    QueryPrinter, QueryRow,
};
use crate::stream::stream_query;

#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Output results as NDJSON (one JSON object per line)
    #[arg(long)]
    pub json: bool,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,

    /// Suppress timing statistics
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl OutputOptions {
    pub fn make_printer(&self, limit: usize) -> Box<dyn QueryPrinter> {
        let format = if self.json { OutputFormat::Json } else { OutputFormat::Human };

        let color = match self.color.as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        };

        let cfg = PrinterConfig { format, color, limit, show_timing: !self.quiet };

        match format {
            OutputFormat::Human => Box::new(HumanPrinter::<Stdout, Stderr>::stdout(cfg)),
            OutputFormat::Json => Box::new(JsonPrinter::<Stdout, Stderr>::stdout(cfg)),
        }
    }
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Path to a newline-delimited corpus file to index.
    pub corpus: PathBuf,

    /// Maximum number of results to display per query
    #[arg(long, short = 'n', default_value = "20")]
    pub limit: usize,

    /// Output formatting options
    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: QueryArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[error] {e}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: QueryArgs) -> CommandResult<ExitCode> {
    let index = Arc::new(build_index(&args.corpus)?);
    log::debug!("loaded corpus from {}: {} strings", args.corpus.display(), index.len());

    repl(&index, &args)?;
    Ok(ExitCode::from(0))
}

fn build_index(corpus: &Path) -> CommandResult<Index> {
    let file = File::open(corpus)
        .with_context(|| format!("failed to open corpus file {}", corpus.display()))?;
    let mut builder = Builder::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("failed to read {}", corpus.display()))?;
        builder.insert(&line);
    }
    Ok(builder.build())
}

/// Read one query per line from stdin until EOF, printing and logging each.
fn repl(index: &Arc<Index>, args: &QueryArgs) -> CommandResult<()> {
    let history = HistoryStore::new();
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read query from stdin")?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }

        run_query(index, query, args, history.as_ref());
    }

    Ok(())
}

fn run_query(index: &Arc<Index>, query: &str, args: &QueryArgs, history: Option<&HistoryStore>) {
    let started = Instant::now();
    let rx = stream_query(Arc::clone(index), query.to_string(), args.limit + 1);
    let mut rows: Vec<(String, Vec<u8>)> = rx.iter().collect();
    let elapsed = started.elapsed();

    let truncated = rows.len() > args.limit;
    rows.truncate(args.limit);
    let total = rows.len();

    let mut printer = args.output.make_printer(args.limit);
    let ctx = QueryPrintContext { query, total, truncated, elapsed: Some(elapsed) };

    if let Err(e) = print_results(printer.as_mut(), &ctx, &rows) {
        log::debug!("failed to print query results: {e}");
    }

    if let Some(store) = history {
        let duration_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
        store.log_query(QueryEvent::new(query.to_string(), total, duration_ms));
    }
}

fn print_results(
    printer: &mut dyn QueryPrinter,
    ctx: &QueryPrintContext,
    rows: &[(String, Vec<u8>)],
) -> io::Result<()> {
    printer.begin(ctx)?;
    for (text, positions) in rows {
        let row = QueryRow { text, positions };
        printer.print_row(&row, ctx)?;
    }
    printer.finish(ctx)?;
    Ok(())
}
