//! User settings for dashgen
//!
//! Manages presentation preferences (currency symbol, label language, week
//! start), the default period, an optional fixed seed, and the branch and
//! category lists allocations are spread across.

use chrono::Weekday;
use log::info;
use serde::{Deserialize, Serialize};

use super::paths::DashPaths;
use crate::error::DashError;
use crate::models::{BranchSpec, CategorySpec, LabelLocale, Period};

/// User settings for dashgen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Language for month and weekday names in bucket labels
    #[serde(default)]
    pub label_locale: LabelLocale,

    /// First day of week (0 = Sunday, 1 = Monday)
    #[serde(default = "default_first_day_of_week")]
    pub first_day_of_week: u8,

    /// Period used when none is given on the command line
    #[serde(default)]
    pub default_period: Period,

    /// Fixed seed for reproducible output; entropy when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Branches income and expenses are allocated across, in order
    #[serde(default = "BranchSpec::defaults")]
    pub branches: Vec<BranchSpec>,

    #[serde(default = "CategorySpec::default_expense")]
    pub expense_categories: Vec<CategorySpec>,

    #[serde(default = "CategorySpec::default_sales")]
    pub sales_categories: Vec<CategorySpec>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_first_day_of_week() -> u8 {
    1 // Monday
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            label_locale: LabelLocale::default(),
            first_day_of_week: default_first_day_of_week(),
            default_period: Period::default(),
            seed: None,
            branches: BranchSpec::defaults(),
            expense_categories: CategorySpec::default_expense(),
            sales_categories: CategorySpec::default_sales(),
        }
    }
}

impl Settings {
    /// Weekday the `week` period starts on
    pub fn week_start(&self) -> Weekday {
        match self.first_day_of_week % 7 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Check the settings for values the generator cannot use
    pub fn validate(&self) -> Result<(), DashError> {
        if self.first_day_of_week > 6 {
            return Err(DashError::Config(format!(
                "first_day_of_week must be between 0 and 6, got {}",
                self.first_day_of_week
            )));
        }

        let mut seen = std::collections::HashSet::new();
        for branch in &self.branches {
            if !seen.insert(branch.id.as_str()) {
                return Err(DashError::Config(format!(
                    "Duplicate branch id: {}",
                    branch.id
                )));
            }
        }

        Ok(())
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &DashPaths) -> Result<Self, DashError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| DashError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| DashError::Config(format!("Failed to parse settings file: {}", e)))?;

            settings.validate()?;
            info!("Loaded settings from {}", settings_path.display());
            Ok(settings)
        } else {
            // Not persisted until the caller asks
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DashPaths) -> Result<(), DashError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| DashError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| DashError::Io(format!("Failed to write settings file: {}", e)))?;

        info!("Saved settings to {}", settings_path.display());
        Ok(())
    }
}
