//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod output;
mod storage;
mod sync;

pub use output::FileOutputConfig;
pub use storage::{APP_DIR_NAME, FileStorageConfig};
pub use sync::FileSyncConfig;

use serde::{Deserialize, Serialize};

/// A problem found while validating configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted path of the offending field (e.g. `sync.endpoint`)
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Local storage settings
    pub storage: FileStorageConfig,
    /// Remote sync settings
    pub sync: FileSyncConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    ///
    /// Issues are warnings: every one of them has a usable fallback.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !(self.sync.endpoint.starts_with("http://") || self.sync.endpoint.starts_with("https://"))
        {
            issues.push(ConfigIssue {
                field: "sync.endpoint".to_string(),
                message: format!(
                    "'{}' is not an http(s) URL, sync cycles will fail",
                    self.sync.endpoint
                ),
            });
        }

        if self.sync.interval_seconds == 0 {
            issues.push(ConfigIssue {
                field: "sync.interval_seconds".to_string(),
                message: "must be greater than zero, falling back to 30".to_string(),
            });
        }

        if !self.sync.is_usable_category() {
            issues.push(ConfigIssue {
                field: "sync.category".to_string(),
                message: format!(
                    "'{}' cannot tag remote quotes, falling back to '{}'",
                    self.sync.category,
                    self.sync.remote_category()
                ),
            });
        }

        issues
    }
}
