//! Infrastructure layer for quotebook
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod random;
pub mod remote;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileOutputConfig, FileStorageConfig, FileSyncConfig,
};
pub use random::StdRandomSource;
pub use remote::{DEFAULT_ENDPOINT, DEFAULT_REMOTE_CATEGORY, PlaceholderQuoteSource};
pub use storage::{FileKeyValueStore, MemoryKeyValueStore, STORAGE_FILE_NAME};
