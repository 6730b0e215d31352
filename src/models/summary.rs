//! Financial summary and the full generated report

use serde::{Deserialize, Serialize};

use super::allocation::{BranchAllocation, BranchTotals, CategoryAllocation};
use super::amount::Amount;
use super::bucket::TimeBucket;
use super::period::{Period, ReportWindow};

/// Totals derived from a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_income: Amount,
    pub total_expenses: Amount,
    pub net_profit: Amount,
}

impl FinancialSummary {
    /// Sum every bucket of a series
    pub fn from_series(series: &[TimeBucket]) -> Self {
        let total_income: Amount = series.iter().map(|b| b.income).sum();
        let total_expenses: Amount = series.iter().map(|b| b.expense).sum();
        Self {
            total_income,
            total_expenses,
            net_profit: total_income - total_expenses,
        }
    }

    /// Net profit as a percentage of income (0.0 with no income)
    pub fn margin(&self) -> f64 {
        self.net_profit.percentage_of(self.total_income)
    }
}

/// Everything the dashboard shows for one period selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialReport {
    pub period: Period,
    pub window: ReportWindow,
    #[serde(flatten)]
    pub summary: FinancialSummary,
    pub series: Vec<TimeBucket>,
    pub branches: Vec<BranchAllocation>,
    pub expense_categories: Vec<CategoryAllocation>,
    pub sales_categories: Vec<CategoryAllocation>,
}

impl FinancialReport {
    pub fn total_income(&self) -> Amount {
        self.summary.total_income
    }

    pub fn total_expenses(&self) -> Amount {
        self.summary.total_expenses
    }

    pub fn net_profit(&self) -> Amount {
        self.summary.net_profit
    }

    pub fn branch_totals(&self) -> BranchTotals {
        BranchTotals::from_branches(&self.branches)
    }
}
