//! Configuration loading and parsing
//!
//! Report settings come from a TOML or JSON file whose keys are the
//! snake_case field names of `ReportConfiguration`. Missing keys keep their
//! defaults, so validation happens later, not while parsing.

use anyhow::{bail, Context, Result};
use sales_report::ReportConfiguration;
use std::fs;
use std::path::Path;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase());

        match extension.as_deref() {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => bail!("Unsupported config file format: {:?}", path),
        }
    }
}

/// Load a report configuration from a TOML or JSON file
pub fn load_config(path: &Path) -> Result<ReportConfiguration> {
    let format = ConfigFormat::from_path(path)?;
    log::debug!("Detected {:?} config file", format);

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    parse_config(&content, format)
        .with_context(|| format!("Failed to parse config file: {:?}", path))
}

/// Keys that hold calendar dates
const DATE_KEYS: [&str; 2] = ["start_date", "end_date"];

/// Parse configuration text in the given format
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<ReportConfiguration> {
    let config: ReportConfiguration = match format {
        ConfigFormat::Toml => {
            let mut table: toml::Table = toml::from_str(content)?;
            normalize_toml_dates(&mut table);
            toml::Value::Table(table).try_into()?
        }
        ConfigFormat::Json => serde_json::from_str(content)?,
    };
    Ok(config)
}

/// Turn bare TOML local dates (`start_date = 2024-01-01`) into ISO strings.
///
/// Values carrying a time or offset are left alone and fail to parse as dates.
fn normalize_toml_dates(table: &mut toml::Table) {
    for key in DATE_KEYS {
        let text = match table.get(key) {
            Some(toml::Value::Datetime(dt))
                if dt.date.is_some() && dt.time.is_none() && dt.offset.is_none() =>
            {
                dt.to_string()
            }
            _ => continue,
        };
        log::trace!("Converting bare TOML date {} = {}", key, text);
        table.insert(key.to_string(), toml::Value::String(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    const MONTHLY_TOML: &str = r#"
        title = "Monthly Sales"
        format = "PDF"
        start_date = "2024-01-01"
        end_date = "2024-01-31"
        columns = ["Date", "Amount"]
        include_charts = true
        chart_type = "Bar"
    "#;

    const MONTHLY_JSON: &str = r#"{
        "title": "Monthly Sales",
        "format": "PDF",
        "start_date": "2024-01-01",
        "end_date": "2024-01-31",
        "columns": ["Date", "Amount"],
        "include_charts": true,
        "chart_type": "Bar"
    }"#;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_deserialization() {
        let config = parse_config(MONTHLY_TOML, ConfigFormat::Toml).unwrap();
        assert_eq!(config.title, "Monthly Sales");
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(config.columns.len(), 2);
        assert!(config.include_charts);
        assert!(!config.include_header);
        assert!(config.filters.is_empty());
    }

    #[test]
    fn test_toml_and_json_agree() {
        let from_toml = parse_config(MONTHLY_TOML, ConfigFormat::Toml).unwrap();
        let from_json = parse_config(MONTHLY_JSON, ConfigFormat::Json).unwrap();
        assert_eq!(from_toml, from_json);
    }

    #[test]
    fn test_load_config_from_file() {
        let file = write_temp(".toml", MONTHLY_TOML);
        let config = load_config(file.path()).unwrap();
        assert!(config.validate().is_ok());

        let file = write_temp(".json", MONTHLY_JSON);
        assert_eq!(load_config(file.path()).unwrap(), config);
    }

    #[test]
    fn test_partial_config_loads_but_fails_validation() {
        let config = parse_config(r#"title = "Only a title""#, ConfigFormat::Toml).unwrap();
        assert_eq!(
            config.validate(),
            Err(sales_report::ValidationError::MissingFormat)
        );
    }

    #[test]
    fn test_bad_date_is_a_parse_error() {
        let result = parse_config(r#"start_date = "31/01/2024""#, ConfigFormat::Toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_bare_toml_dates_are_accepted() {
        let quoted = parse_config(MONTHLY_TOML, ConfigFormat::Toml).unwrap();
        let bare = parse_config(
            &MONTHLY_TOML
                .replace("\"2024-01-01\"", "2024-01-01")
                .replace("\"2024-01-31\"", "2024-01-31"),
            ConfigFormat::Toml,
        )
        .unwrap();
        assert_eq!(bare, quoted);
        assert_eq!(bare.end_date, NaiveDate::from_ymd_opt(2024, 1, 31));
    }

    #[test]
    fn test_toml_datetime_with_time_is_rejected() {
        let result = parse_config("start_date = 2024-01-01T08:00:00", ConfigFormat::Toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_bundled_example_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("report.example.toml");
        let config = load_config(&path).unwrap();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.render_lines().unwrap().len(), 18);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_temp(".yaml", "title: x");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported config file format"));
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = load_config(Path::new("/nonexistent/report.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
