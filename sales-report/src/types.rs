//! Error types for the sales report library
//!
//! Validation stops at the first rule that fails, so a `ValidationError`
//! always names exactly one broken invariant.

use chrono::NaiveDate;

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// A single failed configuration rule
///
/// Variants are listed in the order `validate()` checks them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("O título do relatório é obrigatório.")]
    MissingTitle,

    #[error("O formato do relatório é obrigatório.")]
    MissingFormat,

    #[error("A data inicial é obrigatória.")]
    MissingStartDate,

    #[error("A data final é obrigatória.")]
    MissingEndDate,

    #[error("A data final não pode ser anterior à data inicial.")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("Pelo menos uma coluna deve ser definida.")]
    NoColumns,

    #[error("O texto do cabeçalho é obrigatório quando IncludeHeader está ativado.")]
    MissingHeaderText,

    #[error("O texto do rodapé é obrigatório quando IncludeFooter está ativado.")]
    MissingFooterText,

    #[error("O tipo de gráfico é obrigatório quando IncludeCharts está ativado.")]
    MissingChartType,
}

/// Errors that can occur while rendering a configuration
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Invalid report configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ReportError {
    /// The validation failure behind this error, if any
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            ReportError::Validation(e) => Some(e),
            ReportError::IoError(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_name_the_rule() {
        assert_eq!(
            ValidationError::MissingTitle.to_string(),
            "O título do relatório é obrigatório."
        );
        assert!(ValidationError::MissingChartType
            .to_string()
            .contains("IncludeCharts"));
    }

    #[test]
    fn test_report_error_wraps_validation() {
        let err: ReportError = ValidationError::NoColumns.into();
        assert_eq!(err.validation(), Some(&ValidationError::NoColumns));
        assert!(err.to_string().ends_with("Pelo menos uma coluna deve ser definida."));

        let io: ReportError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert!(io.validation().is_none());
    }
}
