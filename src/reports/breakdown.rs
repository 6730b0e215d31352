//! Percentage breakdowns
//!
//! Shares of each labeled value relative to the sum of all values, split
//! into two legend columns the way the pie-chart legends lay them out.

use serde::Serialize;

use crate::models::{Amount, CategoryAllocation};

/// One labeled share
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry {
    pub name: String,
    pub color: String,
    pub value: Amount,
    /// Share of the breakdown total, 0.0-100.0
    pub percentage: f64,
}

/// A set of shares and their total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub entries: Vec<BreakdownEntry>,
    pub total: Amount,
}

impl Breakdown {
    /// Percentages are taken against the sum of the entries, not against any
    /// outside total, so they add up to 100 whenever the sum is non-zero.
    pub fn from_categories(categories: &[CategoryAllocation]) -> Self {
        let total: Amount = categories.iter().map(|c| c.value).sum();
        let entries = categories
            .iter()
            .map(|c| BreakdownEntry {
                name: c.name.clone(),
                color: c.color.clone(),
                value: c.value,
                percentage: c.value.percentage_of(total),
            })
            .collect();

        Self { entries, total }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries split at the midpoint; the left column takes the extra one
    pub fn columns(&self) -> (&[BreakdownEntry], &[BreakdownEntry]) {
        let mid = self.entries.len().div_ceil(2);
        self.entries.split_at(mid)
    }

    /// Largest entry by value
    pub fn largest(&self) -> Option<&BreakdownEntry> {
        self.entries.iter().max_by_key(|e| e.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategorySpec;

    fn categories(values: &[i64]) -> Vec<CategoryAllocation> {
        CategorySpec::default_expense()
            .iter()
            .zip(values)
            .map(|(category, v)| CategoryAllocation::new(category, Amount::new(*v)))
            .collect()
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let breakdown = Breakdown::from_categories(&categories(&[100, 300, 600]));
        assert_eq!(breakdown.total, Amount::new(1_000));
        assert_eq!(breakdown.entries[0].percentage, 10.0);
        assert_eq!(breakdown.entries[2].percentage, 60.0);

        let sum: f64 = breakdown.entries.iter().map(|e| e.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_has_zero_percentages() {
        let breakdown = Breakdown::from_categories(&categories(&[0, 0]));
        assert!(breakdown.entries.iter().all(|e| e.percentage == 0.0));
    }

    #[test]
    fn test_columns() {
        let breakdown = Breakdown::from_categories(&categories(&[1, 2, 3, 4, 5]));
        let (left, right) = breakdown.columns();
        assert_eq!(left.len(), 3);
        assert_eq!(right.len(), 2);

        let empty = Breakdown::from_categories(&[]);
        let (left, right) = empty.columns();
        assert!(left.is_empty() && right.is_empty());
        assert!(empty.largest().is_none());
    }

    #[test]
    fn test_largest() {
        let breakdown = Breakdown::from_categories(&categories(&[5, 50, 20]));
        assert_eq!(breakdown.largest().unwrap().name, "Agua");
    }
}
