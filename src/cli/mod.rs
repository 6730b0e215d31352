//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod directory;
pub mod register;
pub mod report;

pub use directory::{handle_search_command, SearchArgs, SearchScope};
pub use register::{handle_add_command, handle_register_command, AddArgs, RegisterArgs};
pub use report::{handle_report_command, handle_show_command, ReportArgs, ShowArgs};
