//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory name under the platform data dir
pub const APP_DIR_NAME: &str = "quotebook";

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Directory holding `storage.json`. `~/` is expanded.
    pub data_dir: Option<String>,
}

impl FileStorageConfig {
    /// Resolve the data directory.
    ///
    /// Falls back to `$XDG_DATA_HOME/quotebook` (or the platform equivalent),
    /// then to `./.quotebook` when no platform directory is known.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return expand_home(dir);
        }
        dirs::data_dir()
            .map(|d| d.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(".quotebook"))
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
