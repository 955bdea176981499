use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use rolodex_core::{AddressOpener, Dataset, SystemOpener, pager};

mod output;

use output::ColorMode;

/// Rolodex — browse a directory of places and open entries in the platform handler
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one page of the directory
    List {
        /// 1-based page to print (clamped to the last page)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Dataset file to browse instead of the bundled directory
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Open the address of the record at a global index
    Open {
        /// Global record index, as shown by `list`
        index: usize,

        /// Dataset file to browse instead of the bundled directory
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Report entries rejected by schema validation
    Audit {
        /// Dataset file to audit instead of the bundled directory
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::List {
            page,
            no_color,
            data,
        } => list(page, no_color, data),
        Command::Open { index, data } => open(index, data),
        Command::Audit { data } => audit(data),
    }
}

fn load(data: Option<PathBuf>) -> anyhow::Result<Dataset> {
    match data {
        Some(path) => Dataset::from_path(&path)
            .with_context(|| format!("could not load dataset from {}", path.display())),
        None => Dataset::bundled().context("could not load the bundled dataset"),
    }
}

fn list(page: usize, no_color: bool, data: Option<PathBuf>) -> anyhow::Result<()> {
    let dataset = load(data)?;

    // 1-based on the command line; clamp into range like the TUI does
    let last = pager::total_pages(dataset.records.len(), pager::PAGE_SIZE).max(1) - 1;
    let page = page.saturating_sub(1).min(last);

    let mut stdout = std::io::stdout().lock();
    output::print_page(&mut stdout, &dataset, page, ColorMode(!no_color))?;
    Ok(())
}

fn open(index: usize, data: Option<PathBuf>) -> anyhow::Result<()> {
    let dataset = load(data)?;
    let record = dataset.records.get(index).with_context(|| {
        format!(
            "no record at index {index} (directory has {} records)",
            dataset.records.len()
        )
    })?;

    SystemOpener.open(&record.address)?;
    println!("Opened {} ({})", record.name, record.address);
    Ok(())
}

fn audit(data: Option<PathBuf>) -> anyhow::Result<()> {
    let dataset = load(data)?;

    let mut stdout = std::io::stdout().lock();
    output::print_audit(&mut stdout, &dataset, ColorMode(true))?;
    stdout.flush()?;

    if !dataset.rejected.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("ROLODEX_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
