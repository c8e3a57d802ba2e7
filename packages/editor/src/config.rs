//! Editor configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::EditorError;
use crate::history::DEFAULT_MAX_LEVELS;

pub const DEFAULT_CONFIG_NAME: &str = "mosaic.config.json";

/// Editor configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Bound on the undo history (0 = unlimited)
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// Named slot file for save/load
    #[serde(default = "default_slot")]
    pub slot: PathBuf,
}

fn default_max_history() -> usize {
    DEFAULT_MAX_LEVELS
}

fn default_slot() -> PathBuf {
    PathBuf::from("layout.json")
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_history: default_max_history(),
            slot: default_slot(),
        }
    }
}

impl EditorConfig {
    /// Load config from a directory, falling back to defaults when no config
    /// file exists.
    pub fn load(cwd: &Path) -> Result<Self, EditorError> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: EditorConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(EditorConfig::default())
        }
    }
}
