//! Sales Report Configuration Library
//!
//! Holds the settings that describe a sales report, validates them, and
//! renders a human-readable summary to any line sink.
//!
//! # Architecture
//!
//! This library is intentionally minimal:
//! - `ReportConfiguration` is a plain value with public fields and builder methods
//! - `validate()` reports the first broken rule as a `ValidationError`
//! - `render()` validates, then writes the summary through a `LineSink`
//!
//! The library does NOT:
//! - Produce real report documents (PDF, charts, pagination)
//! - Fetch report data
//! - Read configuration files
//!
//! File loading and console output live in the application layer (sales-report-cli).
//!
//! # Example Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use sales_report::{IoSink, ReportConfiguration};
//!
//! let config = ReportConfiguration::new()
//!     .with_title("Monthly Sales")
//!     .with_format("PDF")
//!     .with_period(
//!         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
//!     )
//!     .with_columns(["Date", "Amount"])
//!     .with_charts("Bar");
//!
//! config.validate().unwrap();
//!
//! let mut sink = IoSink::new(std::io::stdout());
//! config.render(&mut sink).unwrap();
//! ```

// Public modules
pub mod config;
pub mod render;
pub mod types;

// Re-export main types for convenience
pub use config::ReportConfiguration;
pub use render::{IoSink, LineSink};
pub use types::{ReportError, Result, ValidationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
