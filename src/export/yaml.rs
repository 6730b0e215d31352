//! YAML export functionality

use std::io::Write;

use crate::error::{DashError, DashResult};
use crate::export::json::ReportExport;
use crate::models::FinancialReport;

/// Export a report as YAML with a short header comment
pub fn export_report_yaml<W: Write>(
    report: &FinancialReport,
    seed: Option<u64>,
    writer: &mut W,
) -> DashResult<()> {
    let export = ReportExport::new(report.clone(), seed);

    writeln!(writer, "# dashgen financial report ({})", export.report.period)
        .map_err(|e| DashError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.generated_at)
        .map_err(|e| DashError::Export(e.to_string()))?;
    writeln!(writer, "# Synthetic data for dashboard display; not real figures.")
        .map_err(|e| DashError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| DashError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| DashError::Export(e.to_string()))?;

    Ok(())
}

/// Read a YAML export back
pub fn import_from_yaml(yaml_str: &str) -> DashResult<ReportExport> {
    let export: ReportExport =
        serde_yaml::from_str(yaml_str).map_err(|e| DashError::Import(e.to_string()))?;
    export.validate().map_err(DashError::Import)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Period;
    use crate::services::{DashboardService, FixedClock};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_yaml_export_and_import() {
        let settings = Settings::default();
        let now = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        let report = DashboardService::new(&settings, StdRng::seed_from_u64(1), FixedClock(now))
            .generate(Period::Day, None, None)
            .unwrap();

        let mut buffer = Vec::new();
        export_report_yaml(&report, Some(1), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("# dashgen financial report (day)"));

        let imported = import_from_yaml(&text).unwrap();
        assert_eq!(imported.report.series.len(), 7);
        assert_eq!(imported.report, report);
    }
}
