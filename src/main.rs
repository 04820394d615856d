//! Namesake: find files and folders with identical or near-identical names.
//!
//! Thin binary entry point. All logic lives in the `namesake-core`
//! and `namesake-report` crates.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, OutputFormat};
use namesake_core::{start_scan, ScanProgress, ScanReport};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Log a progress line every this many collected items.
const PROGRESS_LOG_INTERVAL: u64 = 1_000;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for CSV/JSON output.
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .init();

    let config = cli
        .scan_request()
        .validate()
        .context("invalid scan options")?;

    let handle = start_scan(config).context("could not start scan")?;
    for msg in handle.progress_rx.iter() {
        match msg {
            ScanProgress::Update {
                items_found,
                current_path,
            } => {
                if items_found % PROGRESS_LOG_INTERVAL == 0 {
                    tracing::info!("Processing: {current_path} | Found: {items_found} items");
                } else {
                    tracing::trace!("Processing: {current_path} | Found: {items_found} items");
                }
            }
            ScanProgress::Error { path, message } => {
                tracing::warn!("Skipped {path}: {message}");
            }
            ScanProgress::Complete { duration, .. } => {
                tracing::debug!("Scan thread finished in {duration:?}");
            }
        }
    }
    let report = handle
        .wait()
        .with_context(|| format!("scan of {} failed", cli.root.display()))?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            write_report(&report, cli.format, BufWriter::new(file))?;
            tracing::info!("Report written to {}", path.display());
        }
        None => write_report(&report, cli.format, io::stdout().lock())?,
    }

    eprintln!("{}", namesake_report::completion_line(&report));
    Ok(())
}

fn write_report<W: Write>(
    report: &ScanReport,
    format: OutputFormat,
    mut out: W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            namesake_report::render_text(&report.groups, &mut out)
                .context("failed to write report")?;
            out.flush().context("failed to flush report")?;
        }
        OutputFormat::Csv => namesake_report::write_csv(&report.groups, out)?,
        OutputFormat::Json => namesake_report::write_json(&report.groups, out)?,
    }
    Ok(())
}
