//! Report configuration types
//!
//! `ReportConfiguration` is a plain value: every field is public and can be
//! assigned freely. Nothing is checked on assignment; call
//! [`ReportConfiguration::validate`] when the configuration is complete.

use crate::types::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Descriptive and formatting settings for a sales report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfiguration {
    /// Report title (required)
    pub title: String,
    /// Output kind such as "PDF" or "CSV" (required)
    pub format: String,
    /// First day of the reporting period (required)
    pub start_date: Option<NaiveDate>,
    /// Last day of the reporting period (required, not before `start_date`)
    pub end_date: Option<NaiveDate>,

    pub include_header: bool,
    pub include_footer: bool,
    /// Required when `include_header` is set
    pub header_text: String,
    /// Required when `include_footer` is set
    pub footer_text: String,

    pub include_charts: bool,
    /// Required when `include_charts` is set
    pub chart_type: String,

    pub include_summary: bool,

    /// Column names, in display order (at least one)
    pub columns: Vec<String>,
    pub filters: Vec<String>,
    pub sort_by: String,
    pub group_by: String,
    pub include_totals: bool,

    /// "Portrait" or "Landscape"
    pub orientation: String,
    /// Paper size label, e.g. "A4"
    pub page_size: String,
    pub include_page_numbers: bool,
    pub company_logo: String,
    pub water_mark: String,
}

pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

impl ReportConfiguration {
    /// Create a configuration with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the configuration and report the first rule it breaks
    ///
    /// Rules are checked in a fixed order: title, format, start date, end
    /// date, date ordering, columns, header text, footer text, chart type.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.title) {
            return Err(ValidationError::MissingTitle);
        }

        if is_blank(&self.format) {
            return Err(ValidationError::MissingFormat);
        }

        let start = self.start_date.ok_or(ValidationError::MissingStartDate)?;
        let end = self.end_date.ok_or(ValidationError::MissingEndDate)?;

        if end < start {
            return Err(ValidationError::EndBeforeStart { start, end });
        }

        if self.columns.is_empty() {
            return Err(ValidationError::NoColumns);
        }

        if self.include_header && is_blank(&self.header_text) {
            return Err(ValidationError::MissingHeaderText);
        }

        if self.include_footer && is_blank(&self.footer_text) {
            return Err(ValidationError::MissingFooterText);
        }

        if self.include_charts && is_blank(&self.chart_type) {
            return Err(ValidationError::MissingChartType);
        }

        Ok(())
    }

    /// Whether `validate()` would succeed
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Builder method: set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder method: set the output format
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Builder method: set both ends of the reporting period
    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Builder method: set the first day of the period
    pub fn with_start_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Builder method: set the last day of the period
    pub fn with_end_date(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Builder method: enable the header with the given text
    pub fn with_header(mut self, text: impl Into<String>) -> Self {
        self.include_header = true;
        self.header_text = text.into();
        self
    }

    /// Builder method: enable the footer with the given text
    pub fn with_footer(mut self, text: impl Into<String>) -> Self {
        self.include_footer = true;
        self.footer_text = text.into();
        self
    }

    /// Builder method: enable charts of the given type
    pub fn with_charts(mut self, chart_type: impl Into<String>) -> Self {
        self.include_charts = true;
        self.chart_type = chart_type.into();
        self
    }

    /// Builder method: include or omit the summary section
    pub fn with_summary(mut self, enabled: bool) -> Self {
        self.include_summary = enabled;
        self
    }

    /// Builder method: append a column
    pub fn add_column(mut self, column: impl Into<String>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Builder method: replace the column list
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: append a filter expression
    pub fn add_filter(mut self, filter: impl Into<String>) -> Self {
        self.filters.push(filter.into());
        self
    }

    pub fn with_sort_by(mut self, column: impl Into<String>) -> Self {
        self.sort_by = column.into();
        self
    }

    pub fn with_group_by(mut self, column: impl Into<String>) -> Self {
        self.group_by = column.into();
        self
    }

    pub fn with_totals(mut self, enabled: bool) -> Self {
        self.include_totals = enabled;
        self
    }

    pub fn with_orientation(mut self, orientation: impl Into<String>) -> Self {
        self.orientation = orientation.into();
        self
    }

    pub fn with_page_size(mut self, page_size: impl Into<String>) -> Self {
        self.page_size = page_size.into();
        self
    }

    pub fn with_page_numbers(mut self, enabled: bool) -> Self {
        self.include_page_numbers = enabled;
        self
    }

    pub fn with_company_logo(mut self, logo: impl Into<String>) -> Self {
        self.company_logo = logo.into();
        self
    }

    pub fn with_water_mark(mut self, water_mark: impl Into<String>) -> Self {
        self.water_mark = water_mark.into();
        self
    }
}
