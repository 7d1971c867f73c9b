use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use filters::ParIncludeFilter;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

mod config;

use config::FilterConfig;

/// listfilter - Keep or drop lines of text by glob pattern
#[derive(Parser)]
#[command(name = "listfilter")]
#[command(about = "Filter lines through include and exclude glob patterns", long_about = None)]
struct Cli {
    /// File to read lines from (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON file with `include` and `exclude` pattern lists
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep only lines matching this pattern (repeatable)
    #[arg(long = "include", value_name = "GLOB")]
    include: Vec<String>,

    /// Drop lines matching this pattern (repeatable)
    #[arg(long = "exclude", value_name = "GLOB")]
    exclude: Vec<String>,

    /// Evaluate patterns on all cores
    #[arg(long)]
    parallel: bool,

    /// Print a summary to stderr
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for the filtered lines
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => FilterConfig::load(path)?,
        None => FilterConfig::default(),
    };
    config.extend(cli.include, cli.exclude);

    let chain = config.build_chain().context("Failed to build filter chain")?;
    tracing::debug!("Filter stages: {:?}", chain.stage_names());

    let lines = read_lines(cli.input.as_deref())?;
    let total = lines.len();

    let start = Instant::now();
    let kept = if cli.parallel {
        chain.par_filter(&lines)
    } else {
        chain.apply(lines)
    };
    let elapsed = start.elapsed();

    write_lines(&kept).context("Failed to write output")?;

    if cli.stats {
        print_stats(total, kept.len(), elapsed, cli.parallel);
    }
    Ok(())
}

/// Read every line from `path`, or from stdin when no path is given.
fn read_lines(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            BufReader::new(file)
                .lines()
                .collect::<io::Result<Vec<_>>>()
                .with_context(|| format!("Failed to read input file {}", path.display()))
        }
        None => io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read stdin"),
    }
}

fn write_lines(lines: &[String]) -> io::Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// Helper function to print the summary
fn print_stats(total: usize, kept: usize, elapsed: Duration, parallel: bool) {
    let mode = if parallel { "parallel" } else { "sequential" };
    eprintln!("{}", "Filter summary:".bold().blue());
    eprintln!("{}Lines read: {}", "• ".cyan(), total);
    eprintln!("{}Lines kept: {}", "• ".green(), kept);
    eprintln!("{}Lines dropped: {}", "• ".red(), total - kept);
    eprintln!("{}Time ({}): {:?}", "• ".cyan(), mode, elapsed);
}
