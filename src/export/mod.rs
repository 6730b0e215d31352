//! Export module for dashgen
//!
//! Writes generated reports in several formats:
//! - CSV: series (and branch) rows for spreadsheets
//! - JSON: versioned machine-readable envelope
//! - YAML: the same envelope, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_branches_csv, export_series_csv};
pub use json::{export_report_json, import_from_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_report_yaml, import_from_yaml};

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{DashError, DashResult};
use crate::models::FinancialReport;

/// How a report is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Terminal,
    Json,
    Yaml,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "terminal" | "text" | "table" => Ok(Self::Terminal),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            other => Err(DashError::Validation(format!(
                "Unknown format '{}' (expected terminal, json, yaml or csv)",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal => f.write_str("terminal"),
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
            Self::Csv => f.write_str("csv"),
        }
    }
}

/// Write a report in the chosen format
pub fn write_report<W: Write>(
    report: &FinancialReport,
    format: ExportFormat,
    currency_symbol: &str,
    seed: Option<u64>,
    writer: &mut W,
) -> DashResult<()> {
    match format {
        ExportFormat::Terminal => write!(writer, "{}", report.format_terminal(currency_symbol))
            .map_err(|e| DashError::Export(e.to_string())),
        ExportFormat::Json => export_report_json(report, seed, writer),
        ExportFormat::Yaml => export_report_yaml(report, seed, writer),
        ExportFormat::Csv => export_series_csv(report, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert_eq!("table".parse::<ExportFormat>().unwrap(), ExportFormat::Terminal);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
