//! Configuration module for dashgen
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DashPaths;
pub use settings::Settings;
