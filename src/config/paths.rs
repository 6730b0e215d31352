//! Path management for dashgen
//!
//! ## Path Resolution Order
//!
//! 1. `DASHGEN_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/dashgen` or `~/.config/dashgen`
//! 3. Windows: `%APPDATA%\dashgen`

use std::path::PathBuf;

use crate::error::DashError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "DASHGEN_DATA_DIR";

/// Manages all paths used by dashgen
#[derive(Debug, Clone)]
pub struct DashPaths {
    base_dir: PathBuf,
}

impl DashPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, DashError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create DashPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Conventional home for saved report exports, created by `dashgen init`.
    /// Commands only write here when handed a path inside it.
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base and exports directories exist
    pub fn ensure_directories(&self) -> Result<(), DashError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DashError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.exports_dir())
            .map_err(|e| DashError::Io(format!("Failed to create exports directory: {}", e)))?;

        Ok(())
    }

    /// Check whether `dashgen init` has been run
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, DashError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME")
                .map_err(|_| DashError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("dashgen"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, DashError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| DashError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("dashgen"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.exports_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.exports_dir().exists());
    }
}
