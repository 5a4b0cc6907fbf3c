//! Path management for textseal
//!
//! ## Path Resolution Order
//!
//! 1. `TEXTSEAL_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/textseal` or `~/.config/textseal`
//! 3. Windows: `%APPDATA%\textseal`

use std::path::{Path, PathBuf};

use crate::error::SealError;

/// Environment variable that overrides the configuration directory
pub const CONFIG_DIR_ENV: &str = "TEXTSEAL_CONFIG_DIR";

const APP_DIR_NAME: &str = "textseal";

/// Manages the paths used by textseal
#[derive(Debug, Clone)]
pub struct SealPaths {
    base_dir: PathBuf,
}

impl SealPaths {
    /// Resolve the configuration directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, SealError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SealPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn ensure_directories(&self) -> Result<(), SealError> {
        std::fs::create_dir_all(&self.base_dir)?;
        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SealError> {
    let config_base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var_os("HOME").ok_or_else(|| {
                SealError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join(APP_DIR_NAME))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SealError> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| SealError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
}
