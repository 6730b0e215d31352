//! Reports module for dashgen
//!
//! Percentage breakdowns and the rendering/export of generated financial
//! reports.

pub mod breakdown;
pub mod financial;

pub use breakdown::{Breakdown, BreakdownEntry};
