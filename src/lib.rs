//! dashgen - synthetic financial data for business dashboards
//!
//! Produces plausible, randomly generated figures for a reporting period:
//! an income/expense series bucketed by hour, day or month, summary totals,
//! and allocations of those totals across branches and categories.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Periods, buckets, allocations, reports, register and directory records
//! - `services`: Window resolution, generation, register and directory logic
//! - `reports`: Breakdowns and terminal/CSV rendering of reports
//! - `display`: Terminal formatting helpers and tables
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use dashgen::config::settings::Settings;
//! use dashgen::models::Period;
//! use dashgen::services::DashboardService;
//!
//! let settings = Settings::default();
//! let report = DashboardService::from_settings(&settings).generate(Period::Month, None, None)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{DashError, DashResult};
