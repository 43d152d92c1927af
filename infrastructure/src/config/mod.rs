//! Configuration file loading for quotebook
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUOTEBOOK_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./quotebook.toml` or `./.quotebook.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quotebook/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    APP_DIR_NAME, ConfigIssue, FileConfig, FileOutputConfig, FileStorageConfig, FileSyncConfig,
};
pub use loader::ConfigLoader;
