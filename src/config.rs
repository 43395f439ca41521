//! Field configuration persistence
//!
//! Stores editing preferences in `~/.config/atomedit/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Editing behavior configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditConfig {
    /// Insert thin-space digit-group separators into numeric literals
    #[serde(default = "default_numeric_thin_spaces")]
    pub numeric_thin_spaces: bool,

    /// Report long mouse presses to the host instead of placing the cursor
    #[serde(default)]
    pub support_long_press: bool,

    /// Hold time in milliseconds before a press counts as long
    #[serde(default = "default_long_press_threshold_ms")]
    pub long_press_threshold_ms: u64,

    /// Maximum number of undo snapshots kept
    #[serde(default = "default_max_undo_depth")]
    pub max_undo_depth: usize,
}

fn default_numeric_thin_spaces() -> bool {
    true
}

fn default_long_press_threshold_ms() -> u64 {
    500
}

fn default_max_undo_depth() -> usize {
    crate::editable::DEFAULT_MAX_UNDO_DEPTH
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            numeric_thin_spaces: default_numeric_thin_spaces(),
            support_long_press: false,
            long_press_threshold_ms: default_long_press_threshold_ms(),
            max_undo_depth: default_max_undo_depth(),
        }
    }
}

impl EditConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config at {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config at {}", path.display()))
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file()
            .context("no config directory available")?;
        self.save_to(&path)?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }
        let content = serde_yaml::to_string(self).context("serializing config")?;
        std::fs::write(path, content)
            .with_context(|| format!("writing config to {}", path.display()))
    }
}
