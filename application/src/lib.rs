//! Application layer for quotebook
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_SYNC_INTERVAL, SyncBehavior};
pub use ports::{
    key_value_store::{
        KeyValueStore, LAST_VIEWED_QUOTE_KEY, QUOTES_KEY, SELECTED_CATEGORY_KEY, StorageError,
    },
    quote_view::{NoView, QuoteView},
    random_source::RandomSource,
    remote_quote_source::{RemoteError, RemoteQuoteSource},
};
pub use use_cases::category_index::CategoryIndex;
pub use use_cases::import_export::{EXPORT_FILE_NAME, QuoteTransfer, TransferError, parse_document};
pub use use_cases::quote_session::QuoteSession;
pub use use_cases::quote_store::{AddQuoteError, LoadSource, QuoteStore};
pub use use_cases::selection::SelectionEngine;
pub use use_cases::sync_quotes::{SyncError, SyncQuotesUseCase, SyncReport};
