//! User settings for finboard
//!
//! Display preferences and the default normalization mode. Every field has a
//! serde default so older or hand-edited config files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::FinboardPaths;
use crate::error::FinboardError;
use crate::snapshot::NormalizeMode;
use crate::storage::write_json_atomic;

/// User settings for finboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Reject malformed API records instead of coercing them
    #[serde(default)]
    pub strict_normalization: bool,

    /// Width of progress bars, in characters
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,

    /// Number of recent transactions on the dashboard
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_bar_width() -> usize {
    20
}

fn default_recent_limit() -> usize {
    4
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            strict_normalization: false,
            bar_width: default_bar_width(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Settings {
    /// Normalization mode implied by these settings
    pub fn normalize_mode(&self) -> NormalizeMode {
        if self.strict_normalization {
            NormalizeMode::Strict
        } else {
            NormalizeMode::Lenient
        }
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinboardPaths) -> Result<Self, FinboardError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinboardError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| FinboardError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinboardPaths) -> Result<(), FinboardError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
