//! JSON export functionality
//!
//! Wraps a generated report in a versioned envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{DashError, DashResult};
use crate::models::FinancialReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Versioned export envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub generated_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Seed the report was generated with, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    pub report: FinancialReport,
}

impl ReportExport {
    pub fn new(report: FinancialReport, seed: Option<u64>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            seed,
            report,
        }
    }

    /// Check an imported envelope is one this version understands
    pub fn validate(&self) -> Result<(), String> {
        let major = self.schema_version.split('.').next().unwrap_or("");
        let expected = EXPORT_SCHEMA_VERSION.split('.').next().unwrap_or("");
        if major != expected {
            return Err(format!(
                "Unsupported export schema version {} (expected {}.x)",
                self.schema_version, expected
            ));
        }
        Ok(())
    }
}

/// Export a report as pretty-printed JSON
pub fn export_report_json<W: Write>(
    report: &FinancialReport,
    seed: Option<u64>,
    writer: &mut W,
) -> DashResult<()> {
    let export = ReportExport::new(report.clone(), seed);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| DashError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| DashError::Export(e.to_string()))?;
    Ok(())
}

/// Read a JSON export back
pub fn import_from_json(json_str: &str) -> DashResult<ReportExport> {
    let export: ReportExport =
        serde_json::from_str(json_str).map_err(|e| DashError::Import(e.to_string()))?;
    export.validate().map_err(DashError::Import)?;
    Ok(export)
}
