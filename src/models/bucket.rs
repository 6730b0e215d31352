//! Time bucket representation
//!
//! One labeled income/expense point in a financial series.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::amount::Amount;
use super::period::Granularity;

/// A single point in a financial series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBucket {
    /// Display label ("14:00", "Mon", "05 Mar", "Mar")
    pub label: String,
    /// Instant the bucket starts at
    pub start: NaiveDateTime,
    pub income: Amount,
    pub expense: Amount,
}

impl TimeBucket {
    pub fn new(
        label: impl Into<String>,
        start: NaiveDateTime,
        income: Amount,
        expense: Amount,
    ) -> Self {
        Self {
            label: label.into(),
            start,
            income,
            expense,
        }
    }

    /// Income minus expense for this bucket
    pub fn net(&self) -> Amount {
        self.income - self.expense
    }
}

/// Half-open ranges synthetic bucket values are drawn from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketRanges {
    pub income: Range<i64>,
    pub expense: Range<i64>,
}

impl BucketRanges {
    /// Value ranges for a bucket of the given size
    pub fn for_granularity(granularity: Granularity) -> Self {
        match granularity {
            Granularity::Hourly => Self {
                income: 500..1_500,
                expense: 300..1_100,
            },
            Granularity::Daily => Self {
                income: 5_000..15_000,
                expense: 3_000..11_000,
            },
            Granularity::Monthly => Self {
                income: 100_000..300_000,
                expense: 80_000..230_000,
            },
        }
    }

    /// Whether a bucket's values fall inside these ranges
    pub fn contains(&self, bucket: &TimeBucket) -> bool {
        self.income.contains(&bucket.income.units()) && self.expense.contains(&bucket.expense.units())
    }
}
