//! Core data models for dashgen
//!
//! Periods and report windows, series buckets, allocations, the generated
//! report, register transactions and directory records.

pub mod allocation;
pub mod amount;
pub mod bucket;
pub mod directory;
pub mod period;
pub mod summary;
pub mod transaction;

pub use allocation::{BranchAllocation, BranchSpec, BranchTotals, CategoryAllocation, CategorySpec};
pub use amount::Amount;
pub use bucket::{BucketRanges, TimeBucket};
pub use directory::{Administrator, Area, Branch, Cashier, Employee, Manager, Register, Role};
pub use period::{Granularity, LabelLocale, LabelStyle, Period, ReportWindow};
pub use summary::{FinancialReport, FinancialSummary};
pub use transaction::{NewTransaction, Tag, Transaction, TransactionKind};
