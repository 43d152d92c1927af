//! Key-value storage adapters
//!
//! - [`FileKeyValueStore`] — durable, one JSON document on disk
//! - [`MemoryKeyValueStore`] — session-scoped, process lifetime

mod file_store;
mod memory_store;

pub use file_store::{FileKeyValueStore, STORAGE_FILE_NAME};
pub use memory_store::MemoryKeyValueStore;
