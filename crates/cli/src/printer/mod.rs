use std::io::{self, Write};
use std::time::Duration;

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Automatically detect TTY and enable colors if appropriate.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Human,
    /// NDJSON (newline-delimited JSON) for machine consumption.
    Json,
}

/// Configuration for printing query results.
#[derive(Debug, Clone)]
pub struct PrinterConfig {
    pub format: OutputFormat,
    pub color: ColorChoice,
    pub limit: usize,
    /// Whether to show timing and hit-count statistics.
    pub show_timing: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: ColorChoice::Auto,
            limit: 20,
            show_timing: true,
        }
    }
}

/// Static context about one query's print run.
#[derive(Debug)]
pub struct QueryPrintContext<'a> {
    pub query: &'a str,
    /// Number of rows actually emitted to the printer (after `limit` truncation;
    /// the core has no cheap way to report an exact total beyond the cap).
    pub total: usize,
    pub truncated: bool,
    pub elapsed: Option<Duration>,
}

/// One matched string and the byte offsets of its matched characters.
#[derive(Debug)]
pub struct QueryRow<'a> {
    pub text: &'a str,
    pub positions: &'a [u8],
}

/// Receives a stream of rows for one query and is responsible for formatting them.
pub trait QueryPrinter {
    fn begin(&mut self, ctx: &QueryPrintContext) -> io::Result<()>;
    fn print_row(&mut self, row: &QueryRow<'_>, ctx: &QueryPrintContext) -> io::Result<()>;
    fn finish(&mut self, ctx: &QueryPrintContext) -> io::Result<()>;
}

/// Human-readable printer: the matched string followed by a marker line with a
/// `*` under each matched byte position.
pub struct HumanPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
    use_color: bool,
}

impl<W: Write, E: Write> HumanPrinter<W, E> {
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        let use_color = matches!(cfg.color, ColorChoice::Always);
        Self { out, err, cfg, use_color }
    }

    /// Create a printer that writes to stdout/stderr with TTY detection.
    pub fn stdout(cfg: PrinterConfig) -> HumanPrinter<io::Stdout, io::Stderr> {
        use std::io::IsTerminal;

        let use_color = match cfg.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };

        HumanPrinter { out: io::stdout(), err: io::stderr(), cfg, use_color }
    }

    fn format_text(&self, text: &str) -> String {
        if self.use_color {
            format!("\x1b[32m{text}\x1b[0m")
        } else {
            text.to_owned()
        }
    }

    fn marker_line(text: &str, positions: &[u8]) -> String {
        let mut line = vec![b' '; text.len()];
        for &p in positions {
            if let Some(slot) = line.get_mut(p as usize) {
                *slot = b'*';
            }
        }
        String::from_utf8(line).unwrap_or_default()
    }
}

pub struct JsonPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
}

impl<W: Write, E: Write> JsonPrinter<W, E> {
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        Self { out, err, cfg }
    }

    pub fn stdout(cfg: PrinterConfig) -> JsonPrinter<io::Stdout, io::Stderr> {
        JsonPrinter { out: io::stdout(), err: io::stderr(), cfg }
    }
}

impl<W: Write, E: Write> QueryPrinter for HumanPrinter<W, E> {
    fn begin(&mut self, _ctx: &QueryPrintContext) -> io::Result<()> {
        Ok(())
    }

    fn print_row(&mut self, row: &QueryRow<'_>, _ctx: &QueryPrintContext) -> io::Result<()> {
        writeln!(self.out, "{}", self.format_text(row.text))?;
        if !row.positions.is_empty() {
            writeln!(self.out, "{}", Self::marker_line(row.text, row.positions))?;
        }
        Ok(())
    }

    fn finish(&mut self, ctx: &QueryPrintContext) -> io::Result<()> {
        if ctx.truncated {
            writeln!(self.out, "... more results not shown (showing first {})", self.cfg.limit)?;
        }

        if self.cfg.show_timing {
            let ms = ctx.elapsed.unwrap_or_default().as_secs_f64() * 1000.0;
            writeln!(self.err, "[{}] {} results in {:.2}ms", ctx.query, ctx.total, ms)?;
        }

        Ok(())
    }
}

impl<W: Write, E: Write> QueryPrinter for JsonPrinter<W, E> {
    fn begin(&mut self, _ctx: &QueryPrintContext) -> io::Result<()> {
        Ok(())
    }

    fn print_row(&mut self, row: &QueryRow<'_>, ctx: &QueryPrintContext) -> io::Result<()> {
        let obj = serde_json::json!({
            "query": ctx.query,
            "text": row.text,
            "positions": row.positions,
        });
        writeln!(self.out, "{obj}")
    }

    fn finish(&mut self, ctx: &QueryPrintContext) -> io::Result<()> {
        if self.cfg.show_timing {
            let obj = serde_json::json!({
                "type": "summary",
                "query": ctx.query,
                "total": ctx.total,
                "truncated": ctx.truncated,
                "elapsed_ms": ctx.elapsed.unwrap_or_default().as_secs_f64() * 1000.0,
            });
            writeln!(self.err, "{obj}")?;
        }

        Ok(())
    }
}
