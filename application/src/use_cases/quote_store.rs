//! Quote store
//!
//! Owns the authoritative in-memory [`QuoteCollection`] and keeps it in sync
//! with durable storage under [`QUOTES_KEY`]. Every mutation goes through
//! this type; callers only ever see owned snapshots.

use crate::ports::key_value_store::{KeyValueStore, QUOTES_KEY, StorageError};
use quotebook_domain::{DomainError, Quote, QuoteCollection};
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur when adding a quote
#[derive(Error, Debug)]
pub enum AddQuoteError {
    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error("Quote was added but could not be saved: {0}")]
    Storage(#[from] StorageError),
}

/// Where the current collection came from after [`QuoteStore::load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from durable storage
    Persisted,
    /// Nothing persisted yet; the seed list is in use
    Seed,
    /// Persisted data was unreadable; the seed list is in use
    SeedAfterError,
}

/// The single owner of the quote collection
pub struct QuoteStore {
    storage: Arc<dyn KeyValueStore>,
    quotes: RwLock<QuoteCollection>,
    /// Held from serialization until the write lands, so the last write to
    /// storage is always the newest collection.
    save_lock: Mutex<()>,
}

impl QuoteStore {
    /// Create a store holding the seed list, without touching storage.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            quotes: RwLock::new(QuoteCollection::seeded()),
            save_lock: Mutex::new(()),
        }
    }

    /// Create a store and immediately [`load`](Self::load) persisted quotes.
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        let store = Self::new(storage);
        store.load();
        store
    }

    /// Replace the collection with the persisted one.
    ///
    /// Missing, unreadable or malformed data leaves the seed list in place.
    pub fn load(&self) -> LoadSource {
        let raw = match self.storage.get(QUOTES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No persisted quotes, using seed list");
                *self.write() = QuoteCollection::seeded();
                return LoadSource::Seed;
            }
            Err(e) => {
                warn!("Could not read persisted quotes, using seed list: {}", e);
                *self.write() = QuoteCollection::seeded();
                return LoadSource::SeedAfterError;
            }
        };

        match serde_json::from_str::<QuoteCollection>(&raw) {
            Ok(collection) => {
                info!("Loaded {} persisted quotes", collection.len());
                *self.write() = collection;
                LoadSource::Persisted
            }
            Err(e) => {
                warn!("Persisted quotes are malformed, resetting to seed list: {}", e);
                *self.write() = QuoteCollection::seeded();
                LoadSource::SeedAfterError
            }
        }
    }

    /// Write the whole collection to durable storage.
    pub fn save(&self) -> Result<(), StorageError> {
        let _saving = self.save_lock.lock().unwrap_or_else(|e| e.into_inner());
        let json = {
            let quotes = self.read();
            serde_json::to_string(&*quotes)
                .map_err(|e| StorageError::Serialization(e.to_string()))?
        };
        self.storage.set(QUOTES_KEY, &json)?;
        debug!("Saved quotes ({} bytes)", json.len());
        Ok(())
    }

    /// Validate and append a quote from user input, then save.
    ///
    /// Rejected input leaves the collection untouched. A storage failure is
    /// reported after the quote has been appended in memory.
    pub fn add(&self, text: &str, category: &str) -> Result<Quote, AddQuoteError> {
        let quote = Quote::try_new(text, category)?;
        self.write().push(quote.clone());
        info!("Added quote in category '{}'", quote.category);
        self.save()?;
        Ok(quote)
    }

    /// Append quotes as-is (no validation, no de-duplication), then save.
    pub fn append_all(&self, quotes: Vec<Quote>) -> Result<usize, StorageError> {
        let count = quotes.len();
        self.write().extend(quotes);
        self.save()?;
        Ok(count)
    }

    /// Merge remote quotes keeping local records on text collisions, then save.
    ///
    /// Returns the number of quotes appended.
    pub fn merge(&self, remote: Vec<Quote>) -> Result<usize, StorageError> {
        let added = self.write().merge(remote);
        self.save()?;
        Ok(added)
    }

    /// Owned copy of the current collection.
    pub fn snapshot(&self) -> QuoteCollection {
        self.read().clone()
    }

    /// Run `f` against the current collection without cloning it.
    pub fn with_quotes<R>(&self, f: impl FnOnce(&QuoteCollection) -> R) -> R {
        f(&self.read())
    }

    /// Number of quotes currently held.
    pub fn count(&self) -> usize {
        self.read().len()
    }

    fn read(&self) -> RwLockReadGuard<'_, QuoteCollection> {
        self.quotes.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, QuoteCollection> {
        self.quotes.write().unwrap_or_else(|e| e.into_inner())
    }
}
