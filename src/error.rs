//! Custom error types for dashgen
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for dashgen operations
#[derive(Error, Debug)]
pub enum DashError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A reporting window whose start falls after its end
    #[error("Invalid date range: {from} is after {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),
}

impl DashError {
    /// Create a "not found" error for administrators
    pub fn admin_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Administrator",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for roles
    pub fn role_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Role",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for register transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error (inverted ranges included)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidRange { .. })
    }
}

impl From<std::io::Error> for DashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for DashError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for DashError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for dashgen operations
pub type DashResult<T> = Result<T, DashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = DashError::role_not_found("auditor");
        assert_eq!(err.to_string(), "Role not found: auditor");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_range_error() {
        let err = DashError::InvalidRange {
            from: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            to: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date range: 2025-03-10 is after 2025-03-01"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DashError = io_err.into();
        assert!(matches!(err, DashError::Io(_)));
    }
}
