use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::undo::DEFAULT_UNDO_DEPTH;

pub const CONFIG_FILENAME: &str = "config.json";

/// Configuration for courier, stored as config.json in the app data
/// directory (or wherever `--config` points).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourierConfig {
    /// Where the delivery book lives. `None` means the default location
    /// next to the config file.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// How many changes `undo` can step back through.
    #[serde(default = "default_undo_depth")]
    pub undo_depth: usize,
}

fn default_undo_depth() -> usize {
    DEFAULT_UNDO_DEPTH
}

impl Default for CourierConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            undo_depth: DEFAULT_UNDO_DEPTH,
        }
    }
}

impl CourierConfig {
    /// Load config from the given file, or return defaults if it does not
    /// exist.
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(config_path)?;
        let config: CourierConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given file, creating parent directories as needed.
    pub fn save<P: AsRef<Path>>(&self, config_path: P) -> Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}
