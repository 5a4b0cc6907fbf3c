//! User settings for textseal
//!
//! Only front-end preferences live here (logging, password policy). The
//! cryptographic parameters are fixed and cannot be configured.

use serde::{Deserialize, Serialize};

use super::paths::SealPaths;
use crate::crypto::SecureString;
use crate::error::SealError;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines (default)
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Password requirements applied when encrypting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum password length in characters
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 1 }
    }
}

impl PasswordPolicy {
    /// Check a new password against the policy
    pub fn check(&self, password: &SecureString) -> Result<(), SealError> {
        let length = password.char_count();
        if length < self.min_length {
            return Err(SealError::invalid_parameter(format!(
                "Password must be at least {} characters (got {})",
                self.min_length, length
            )));
        }

        Ok(())
    }
}

/// User settings for textseal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default log filter (overridden by `RUST_LOG` and `-v`)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,

    #[serde(default)]
    pub password_policy: PasswordPolicy,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            password_policy: PasswordPolicy::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &SealPaths) -> Result<Self, SealError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)?;

            serde_json::from_str(&contents).map_err(|e| {
                SealError::Config(format!("Failed to parse settings file: {}", e))
            })
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SealPaths) -> Result<(), SealError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SealError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)?;

        Ok(())
    }
}
