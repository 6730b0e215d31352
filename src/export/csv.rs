//! CSV export functionality
//!
//! Series rows for spreadsheets, and branch rows alongside.

use std::io::Write;

use crate::error::{DashError, DashResult};
use crate::models::FinancialReport;

/// Export the bucket series to CSV
pub fn export_series_csv<W: Write>(report: &FinancialReport, writer: &mut W) -> DashResult<()> {
    report.export_csv(writer)
}

/// Export the branch allocation to CSV, with a totals row
pub fn export_branches_csv<W: Write>(report: &FinancialReport, writer: &mut W) -> DashResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["id", "name", "income", "expenses", "balance"])
        .map_err(|e| DashError::Export(e.to_string()))?;

    for branch in &report.branches {
        csv_writer
            .write_record([
                branch.id.clone(),
                branch.name.clone(),
                branch.income.units().to_string(),
                branch.expenses.units().to_string(),
                branch.balance.units().to_string(),
            ])
            .map_err(|e| DashError::Export(e.to_string()))?;
    }

    let totals = report.branch_totals();
    csv_writer
        .write_record([
            String::new(),
            "TOTAL".to_string(),
            totals.income.units().to_string(),
            totals.expenses.units().to_string(),
            totals.balance.units().to_string(),
        ])
        .map_err(|e| DashError::Export(e.to_string()))?;

    csv_writer
        .flush()
        .map_err(|e| DashError::Export(e.to_string()))?;
    Ok(())
}
