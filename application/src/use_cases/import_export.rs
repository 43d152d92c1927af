//! Import/export of the quote collection as a JSON document
//!
//! Export produces a pretty-printed JSON array (the `quotes.json` file).
//! Import parses the same shape and appends every record to the store.

use crate::ports::key_value_store::StorageError;
use crate::use_cases::quote_store::QuoteStore;
use quotebook_domain::Quote;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Default file name for exported documents.
pub const EXPORT_FILE_NAME: &str = "quotes.json";

/// Errors that can occur during import or export
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Invalid JSON file: {0}")]
    InvalidFormat(String),

    #[error("Failed to serialize quotes: {0}")]
    Serialization(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TransferError {
    /// Whether the document itself was unusable (as opposed to storage failing)
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, TransferError::InvalidFormat(_))
    }
}

/// Parse an import document into quotes.
///
/// The document must be a JSON array of `{ "text", "category" }` objects.
/// Field values are not validated; unknown fields are ignored.
pub fn parse_document(document: &str) -> Result<Vec<Quote>, TransferError> {
    serde_json::from_str(document).map_err(|e| TransferError::InvalidFormat(e.to_string()))
}

/// Import/export adapter over a [`QuoteStore`]
pub struct QuoteTransfer {
    store: Arc<QuoteStore>,
}

impl QuoteTransfer {
    pub fn new(store: Arc<QuoteStore>) -> Self {
        Self { store }
    }

    /// Serialize the full collection as a pretty-printed JSON array.
    pub fn export_all(&self) -> Result<String, TransferError> {
        self.store.with_quotes(|quotes| {
            serde_json::to_string_pretty(quotes)
                .map_err(|e| TransferError::Serialization(e.to_string()))
        })
    }

    /// Append every record in `document` to the store and persist.
    ///
    /// A document that does not parse leaves the collection untouched.
    /// Returns the number of records appended.
    pub fn import_all(&self, document: &str) -> Result<usize, TransferError> {
        let quotes = parse_document(document).inspect_err(|e| {
            warn!("Rejected import document: {}", e);
        })?;
        let count = self.store.append_all(quotes)?;
        info!("Imported {} quotes", count);
        Ok(count)
    }
}
