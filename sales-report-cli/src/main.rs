//! Sales Report CLI Application
//!
//! This is the command-line interface for the sales report library.
//! It uses the sales-report library and adds:
//! - Loading report settings from TOML/JSON files
//! - Command-line overrides for the required fields
//! - Output to stdout or a file (text summary or JSON)

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use sales_report::{IoSink, ReportConfiguration};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

mod config;

/// Sales Report - Validate and render report configurations
#[derive(Parser, Debug)]
#[command(name = "sales-report-cli")]
#[command(about = "Validate and render sales report configurations", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the report configuration (.toml or .json)
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,

    /// Output file for the rendered report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Override the report title
    #[arg(long)]
    title: Option<String>,

    /// Override the output format (e.g. PDF, CSV)
    #[arg(long)]
    format: Option<String>,

    /// Override the first day of the period (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    start_date: Option<NaiveDate>,

    /// Override the last day of the period (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    end_date: Option<NaiveDate>,

    /// Only validate the configuration, do not render it
    #[arg(long, conflicts_with = "output")]
    check: bool,

    /// Print the validated configuration as JSON instead of the text summary
    #[arg(long, conflicts_with = "check")]
    json: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Sales Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using sales-report library v{}", sales_report::VERSION);

    log::info!("Loading configuration from: {:?}", args.config);
    let mut report = config::load_config(&args.config)?;
    apply_overrides(&mut report, &args);
    log::debug!("Configuration loaded successfully");

    if args.check {
        return check_report(&report, args.quiet, &mut io::stdout());
    }

    if args.json {
        return write_json(&report, args.output.as_deref());
    }

    render_report(&report, args.output.as_deref())
}

/// Replace loaded values with the ones given on the command line
fn apply_overrides(report: &mut ReportConfiguration, args: &Args) {
    if let Some(title) = &args.title {
        log::debug!("Overriding title: {}", title);
        report.title = title.clone();
    }
    if let Some(format) = &args.format {
        log::debug!("Overriding format: {}", format);
        report.format = format.clone();
    }
    if let Some(start) = args.start_date {
        log::debug!("Overriding start date: {}", start);
        report.start_date = Some(start);
    }
    if let Some(end) = args.end_date {
        log::debug!("Overriding end date: {}", end);
        report.end_date = Some(end);
    }
}

/// Validate only; print a confirmation to `out` unless quiet
fn check_report<W: Write>(report: &ReportConfiguration, quiet: bool, out: &mut W) -> Result<()> {
    report.validate()?;
    log::info!("Configuration '{}' passed validation", report.title);

    if !quiet {
        writeln!(out, "✓ Configuration is valid: {}", report.title)?;
    }
    Ok(())
}

/// Write the validated configuration as pretty JSON to stdout or a file
fn write_json(report: &ReportConfiguration, output: Option<&Path>) -> Result<()> {
    report.validate()?;

    let json = serde_json::to_string_pretty(report)
        .context("Failed to serialize configuration")?;
    let mut out = open_output(output)?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}

/// Render the text summary to stdout or a file
fn render_report(report: &ReportConfiguration, output: Option<&Path>) -> Result<()> {
    // Validate before touching the output so an existing file is not truncated
    report.validate()?;

    let out = open_output(output)?;
    let mut sink = IoSink::new(out);

    report.render(&mut sink)?;
    sink.into_inner().flush()?;

    if let Some(path) = output {
        log::info!("Report written to {:?}", path);
    }
    Ok(())
}

fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
