//! Service layer for dashgen
//!
//! Window resolution, synthetic series and allocations, report assembly, and
//! the register and directory routines.

pub mod allocation;
pub mod clock;
pub mod dashboard;
pub mod directory;
pub mod period;
pub mod register;
pub mod series;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dashboard::{rng_from_seed, DashboardService};
pub use directory::Directory;
pub use period::PeriodService;
pub use register::TransactionRegister;
