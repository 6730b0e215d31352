//! Financial dashboard report
//!
//! Terminal rendering and CSV export of a generated `FinancialReport`.

use std::io::Write;

use super::breakdown::Breakdown;
use crate::display::report::{
    double_separator, format_amount_colored, format_bar, format_header, format_percentage,
    pad_right, separator, truncate,
};
use crate::error::{DashError, DashResult};
use crate::models::FinancialReport;

const WIDTH: usize = 78;
const BAR_WIDTH: usize = 24;

impl FinancialReport {
    /// Expense categories as percentages of their sum
    pub fn expense_breakdown(&self) -> Breakdown {
        Breakdown::from_categories(&self.expense_categories)
    }

    /// Sales categories as percentages of their sum
    pub fn sales_breakdown(&self) -> Breakdown {
        Breakdown::from_categories(&self.sales_categories)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let money = |a: crate::models::Amount| a.format_with_symbol(symbol);
        let mut output = String::new();

        output.push_str(&format_header(&format!("Financial Report: {}", self.period), WIDTH));
        output.push('\n');
        output.push_str(&format_header(&self.window.to_string(), WIDTH));
        output.push('\n');
        output.push_str(&double_separator(WIDTH));
        output.push('\n');
        output.push_str(&format!("Total Income:   {:>16}\n", money(self.total_income())));
        output.push_str(&format!("Total Expenses: {:>16}\n", money(self.total_expenses())));
        output.push_str(&format!(
            "Net Profit:     {:>16}  ({} margin)\n\n",
            format_amount_colored(self.net_profit(), symbol),
            format_percentage(self.summary.margin())
        ));

        // Series
        output.push_str(&format!(
            "{:<8} {:>12} {:>12}  {}\n",
            "Bucket", "Income", "Expenses", "Income"
        ));
        output.push_str(&separator(WIDTH));
        output.push('\n');

        let max_income = self
            .series
            .iter()
            .map(|b| b.income.units())
            .max()
            .unwrap_or(0) as f64;

        for bucket in &self.series {
            output.push_str(&format!(
                "{} {:>12} {:>12}  {}\n",
                pad_right(&bucket.label, 8),
                money(bucket.income),
                money(bucket.expense),
                format_bar(bucket.income.units() as f64, max_income, BAR_WIDTH)
            ));
        }

        // Branches
        output.push_str(&format!(
            "\n{:<6} {:<20} {:>14} {:>14} {:>14}\n",
            "ID", "Branch", "Income", "Expenses", "Balance"
        ));
        output.push_str(&separator(WIDTH));
        output.push('\n');

        for branch in &self.branches {
            output.push_str(&format!(
                "{} {} {:>14} {:>14} {:>14}\n",
                pad_right(&branch.id, 6),
                pad_right(&truncate(&branch.name, 20), 20),
                money(branch.income),
                money(branch.expenses),
                money(branch.balance)
            ));
        }

        let totals = self.branch_totals();
        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<27} {:>14} {:>14} {:>14}\n",
            "TOTAL",
            money(totals.income),
            money(totals.expenses),
            money(totals.balance)
        ));

        output.push_str(&format_breakdown("EXPENSES BY CATEGORY", &self.expense_breakdown(), symbol));
        output.push_str(&format_breakdown("SALES BY CATEGORY", &self.sales_breakdown(), symbol));

        output
    }

    /// Export the series to CSV, one row per bucket
    pub fn export_csv<W: Write>(&self, writer: W) -> DashResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["period", "bucket_start", "label", "income", "expense", "net"])
            .map_err(|e| DashError::Export(e.to_string()))?;

        for bucket in &self.series {
            csv_writer
                .write_record([
                    self.period.to_string(),
                    bucket.start.format("%Y-%m-%dT%H:%M:%S").to_string(),
                    bucket.label.clone(),
                    bucket.income.units().to_string(),
                    bucket.expense.units().to_string(),
                    bucket.net().units().to_string(),
                ])
                .map_err(|e| DashError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| DashError::Export(e.to_string()))?;
        Ok(())
    }
}

fn format_breakdown(title: &str, breakdown: &Breakdown, symbol: &str) -> String {
    let mut output = format!("\n{}\n", title);
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if breakdown.is_empty() {
        output.push_str("  (none)\n");
        return output;
    }

    if let Some(top) = breakdown.largest() {
        output.push_str(&format!(
            "  Largest: {} ({})\n",
            top.name,
            format_percentage(top.percentage)
        ));
    }

    let (left, right) = breakdown.columns();
    for (i, entry) in left.iter().enumerate() {
        let mut line = format!(
            "  {} {:>12} {:>6}",
            pad_right(&truncate(&entry.name, 14), 14),
            entry.value.format_with_symbol(symbol),
            format_percentage(entry.percentage)
        );
        if let Some(other) = right.get(i) {
            line.push_str(&format!(
                "    {} {:>12} {:>6}",
                pad_right(&truncate(&other.name, 14), 14),
                other.value.format_with_symbol(symbol),
                format_percentage(other.percentage)
            ));
        }
        output.push_str(&line);
        output.push('\n');
    }

    output
}
