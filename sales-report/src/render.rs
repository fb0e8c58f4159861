//! Textual rendering of a report configuration
//!
//! Rendering always validates first. Lines are only produced once the
//! configuration has passed, so a failing render leaves the sink untouched.

use crate::config::{is_blank, ReportConfiguration};
use crate::types::{Result, ValidationError};
use std::io::{self, Write};

/// Date layout used in the period line (dd/MM/yyyy)
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Separator for column and filter lists
const LIST_SEPARATOR: &str = ", ";

/// Anything that can receive rendered lines
pub trait LineSink {
    /// Write one line of text (without a trailing newline)
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// Line sink over any `io::Write` (stdout, files, buffers)
///
/// Each line is terminated with `\n`.
pub struct IoSink<W: Write> {
    writer: W,
}

impl<W: Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for IoSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Sim"
    } else {
        "Não"
    }
}

impl ReportConfiguration {
    /// Validate, then write the configuration summary to `sink`
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use sales_report::ReportConfiguration;
    ///
    /// let config = ReportConfiguration::new()
    ///     .with_title("Monthly Sales")
    ///     .with_format("PDF")
    ///     .with_period(
    ///         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///         NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    ///     )
    ///     .with_columns(["Date", "Amount"]);
    ///
    /// let mut lines: Vec<String> = Vec::new();
    /// config.render(&mut lines).unwrap();
    /// assert_eq!(lines[0], "=== Gerando Relatório: Monthly Sales ===");
    /// ```
    pub fn render<S: LineSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        self.validate()?;

        let lines = self.format_lines();
        log::debug!("Rendering report '{}' ({} lines)", self.title, lines.len());

        for line in &lines {
            sink.write_line(line)?;
        }
        Ok(())
    }

    /// Validate, then return the summary lines
    pub fn render_lines(&self) -> std::result::Result<Vec<String>, ValidationError> {
        self.validate()?;
        Ok(self.format_lines())
    }

    /// Validate, then return the summary as newline-terminated text
    pub fn render_to_string(&self) -> std::result::Result<String, ValidationError> {
        let lines = self.render_lines()?;
        Ok(lines.iter().map(|line| format!("{}\n", line)).collect())
    }

    /// Build summary lines without validating.
    ///
    /// Only called after `validate()` has passed, so both dates are set.
    fn format_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(18);

        lines.push(format!("=== Gerando Relatório: {} ===", self.title));
        lines.push(format!("Formato: {}", self.format));
        lines.push(format!(
            "Período: {} a {}",
            format_date(self.start_date),
            format_date(self.end_date)
        ));

        if self.include_header {
            lines.push(format!("Cabeçalho: {}", self.header_text));
        }

        if self.include_charts {
            lines.push(format!("Gráfico: {}", self.chart_type));
        }

        lines.push(format!("Colunas: {}", self.columns.join(LIST_SEPARATOR)));

        if !self.filters.is_empty() {
            lines.push(format!("Filtros: {}", self.filters.join(LIST_SEPARATOR)));
        }

        if !is_blank(&self.sort_by) {
            lines.push(format!("Ordenado por: {}", self.sort_by));
        }

        if !is_blank(&self.group_by) {
            lines.push(format!("Agrupado por: {}", self.group_by));
        }

        lines.push(format!("Inclui Totais: {}", yes_no(self.include_totals)));
        lines.push(format!("Inclui Resumo: {}", yes_no(self.include_summary)));
        lines.push(format!("Orientação: {}", self.orientation));
        lines.push(format!("Tamanho da página: {}", self.page_size));
        lines.push(format!(
            "Inclui números de página: {}",
            yes_no(self.include_page_numbers)
        ));
        lines.push(format!("Logo da empresa: {}", self.company_logo));
        lines.push(format!("Marca d'água: {}", self.water_mark));

        if self.include_footer {
            lines.push(format!("Conteúdo do rodapé: {}", self.footer_text));
        }

        lines.push("Relatório gerado com sucesso!".to_string());
        lines
    }
}

fn format_date(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}
