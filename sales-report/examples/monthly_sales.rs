//! Build a report configuration in code and render it to stdout
//!
//! Usage:
//!   cargo run -p sales-report --example monthly_sales [--charts-without-type]
//!
//! With `--charts-without-type` the configuration is left invalid and the
//! validation message is printed instead of the summary.

use chrono::NaiveDate;
use sales_report::{IoSink, ReportConfiguration};
use std::env;
use std::io;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let broken = env::args().any(|arg| arg == "--charts-without-type");

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let end = NaiveDate::from_ymd_opt(2024, 1, 31).expect("valid date");

    let mut config = ReportConfiguration::new()
        .with_title("Monthly Sales")
        .with_format("PDF")
        .with_period(start, end)
        .with_columns(["Date", "Region", "Amount"])
        .add_filter("Amount > 0")
        .with_group_by("Region")
        .with_totals(true)
        .with_orientation("Landscape")
        .with_page_size("A4")
        .with_page_numbers(true)
        .with_footer("Uso interno");

    if broken {
        config.include_charts = true;
        config.chart_type.clear();
    }

    println!("Validating '{}'...", config.title);
    let mut sink = IoSink::new(io::stdout());
    match config.render(&mut sink) {
        Ok(()) => println!("\n✓ Done"),
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}
