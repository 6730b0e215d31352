//! Branch and category allocations
//!
//! Synthetic apportionments of a period's totals across the fixed list of
//! branches and across expense/sales categories.

use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// A branch that receives a share of the totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchSpec {
    pub id: String,
    pub name: String,
}

impl BranchSpec {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The five branches the dashboard ships with
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("#01", "Sucursal Norte"),
            Self::new("#02", "Sucursal Sur"),
            Self::new("#03", "Sucursal Este"),
            Self::new("#04", "Sucursal Oeste"),
            Self::new("#05", "Sucursal Centro"),
        ]
    }
}

/// A named, colored category for expense or sales breakdowns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub name: String,
    /// Hex color used by chart consumers
    pub color: String,
}

impl CategorySpec {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    pub fn default_expense() -> Vec<Self> {
        vec![
            Self::new("Nómina", "#FF6B6B"),
            Self::new("Agua", "#4ECDC4"),
            Self::new("Carne", "#45B7D1"),
            Self::new("Luz", "#96CEB4"),
            Self::new("Gasolina", "#FFEEAD"),
            Self::new("Internet", "#D4A5A5"),
        ]
    }

    pub fn default_sales() -> Vec<Self> {
        vec![
            Self::new("Productos A", "#FF6B6B"),
            Self::new("Productos B", "#4ECDC4"),
            Self::new("Productos C", "#45B7D1"),
            Self::new("Productos D", "#96CEB4"),
            Self::new("Productos E", "#FFEEAD"),
        ]
    }
}

/// One branch's share of the totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchAllocation {
    pub id: String,
    pub name: String,
    pub income: Amount,
    pub expenses: Amount,
    /// Always `income - expenses`
    pub balance: Amount,
}

impl BranchAllocation {
    pub fn new(branch: &BranchSpec, income: Amount, expenses: Amount) -> Self {
        Self {
            id: branch.id.clone(),
            name: branch.name.clone(),
            income,
            expenses,
            balance: income - expenses,
        }
    }
}

/// Column totals across a set of branch allocations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BranchTotals {
    pub income: Amount,
    pub expenses: Amount,
    pub balance: Amount,
}

impl BranchTotals {
    pub fn from_branches(branches: &[BranchAllocation]) -> Self {
        branches.iter().fold(Self::default(), |mut acc, b| {
            acc.income += b.income;
            acc.expenses += b.expenses;
            acc.balance += b.balance;
            acc
        })
    }
}

/// One category's share of a total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAllocation {
    pub name: String,
    pub color: String,
    pub value: Amount,
}

impl CategoryAllocation {
    pub fn new(category: &CategorySpec, value: Amount) -> Self {
        Self {
            name: category.name.clone(),
            color: category.color.clone(),
            value,
        }
    }
}
