//! Display formatting for terminal output
//!
//! Amount/percentage/bar helpers used by the report view, and tables for the
//! register and directory listings.

pub mod directory;
pub mod register;
pub mod report;

pub use directory::{
    format_administrator_table, format_branch_table, format_employee_table, format_role_table,
};
pub use register::{format_transaction_details, format_transaction_table};
