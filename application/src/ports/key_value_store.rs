//! Key-value storage port
//!
//! Models the string-keyed storage the quote widget persists into. Two
//! instances are wired at startup: a durable one (quotes, selected category)
//! and a session-scoped one (last viewed quote).

use thiserror::Error;

/// Durable key holding the JSON array of quotes.
pub const QUOTES_KEY: &str = "quotes";

/// Durable key holding the selected category filter as a plain string.
pub const SELECTED_CATEGORY_KEY: &str = "selectedCategory";

/// Session key holding the last quote shown, as a JSON object.
pub const LAST_VIEWED_QUOTE_KEY: &str = "lastViewedQuote";

/// Errors that can occur while reading or writing storage
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage document is corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to serialize value: {0}")]
    Serialization(String),
}

/// String key-value storage
///
/// Each call is atomic on its own: a `set` either fully replaces the value or
/// leaves the previous one in place. Implementations live in the
/// infrastructure layer.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
