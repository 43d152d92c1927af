//! In-memory doubles for the application ports, shared by use case tests.

use crate::ports::key_value_store::{KeyValueStore, StorageError};
use crate::ports::quote_view::QuoteView;
use crate::ports::random_source::RandomSource;
use crate::ports::remote_quote_source::{RemoteError, RemoteQuoteSource};
use crate::use_cases::sync_quotes::SyncReport;
use async_trait::async_trait;
use quotebook_domain::{CategoryFilter, DomainError, Quote};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Default)]
pub(crate) struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub(crate) fn put(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub(crate) fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.put(key, value);
        Ok(())
    }
}

/// Storage where every call fails
pub(crate) struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Corrupt("unreadable".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }
}

/// Memory storage whose first write stalls for `delay`
pub(crate) struct SlowStore {
    pub(crate) inner: MemoryStore,
    delay: Duration,
    stalled: AtomicBool,
    writing: AtomicBool,
}

impl SlowStore {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            inner: MemoryStore::default(),
            delay,
            stalled: AtomicBool::new(false),
            writing: AtomicBool::new(false),
        }
    }

    /// Block until the stalled write has started.
    pub(crate) fn wait_for_first_write(&self) {
        while !self.writing.load(Ordering::SeqCst) {
            std::thread::sleep(Duration::from_millis(1));
        }
    }
}

impl KeyValueStore for SlowStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.stalled.swap(true, Ordering::SeqCst) {
            self.writing.store(true, Ordering::SeqCst);
            std::thread::sleep(self.delay);
        }
        self.inner.set(key, value)
    }
}

/// Always picks the same index (clamped to the last element)
pub(crate) struct FixedIndex(pub usize);

impl RandomSource for FixedIndex {
    fn next_index(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

/// Remote returning a fixed set of quotes and counting calls
pub(crate) struct StaticRemote {
    quotes: Result<Vec<Quote>, u16>,
    pub(crate) fetches: AtomicUsize,
    pub(crate) published: Mutex<Vec<Quote>>,
}

impl StaticRemote {
    pub(crate) fn ok(quotes: Vec<Quote>) -> Self {
        Self {
            quotes: Ok(quotes),
            fetches: AtomicUsize::new(0),
            published: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(status: u16) -> Self {
        Self {
            quotes: Err(status),
            fetches: AtomicUsize::new(0),
            published: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteQuoteSource for StaticRemote {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, RemoteError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &self.quotes {
            Ok(quotes) => Ok(quotes.clone()),
            Err(status) => Err(RemoteError::Status(*status)),
        }
    }

    async fn publish_quote(&self, quote: &Quote) -> Result<(), RemoteError> {
        match &self.quotes {
            Ok(_) => {
                self.published.lock().unwrap().push(quote.clone());
                Ok(())
            }
            Err(status) => Err(RemoteError::Status(*status)),
        }
    }
}

/// Everything the session wrote to its view
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ViewEvent {
    Quote(Quote),
    Empty(CategoryFilter),
    Categories(Vec<CategoryFilter>),
    Added(Quote),
    Invalid(DomainError),
    Imported(usize),
    ImportFailed,
    Synced { fetched: usize, added: usize },
    SyncFailed,
    PublishFailed,
    StorageFailed,
}

#[derive(Default)]
pub(crate) struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub(crate) fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl QuoteView for RecordingView {
    fn display_quote(&self, quote: &Quote) {
        self.record(ViewEvent::Quote(quote.clone()));
    }

    fn display_empty(&self, filter: &CategoryFilter) {
        self.record(ViewEvent::Empty(filter.clone()));
    }

    fn on_categories_changed(&self, options: &[CategoryFilter]) {
        self.record(ViewEvent::Categories(options.to_vec()));
    }

    fn on_quote_added(&self, quote: &Quote) {
        self.record(ViewEvent::Added(quote.clone()));
    }

    fn on_validation_failed(&self, error: &DomainError) {
        self.record(ViewEvent::Invalid(error.clone()));
    }

    fn on_import_complete(&self, count: usize) {
        self.record(ViewEvent::Imported(count));
    }

    fn on_import_failed(&self, _message: &str) {
        self.record(ViewEvent::ImportFailed);
    }

    fn on_sync_complete(&self, report: &SyncReport) {
        self.record(ViewEvent::Synced {
            fetched: report.fetched,
            added: report.added,
        });
    }

    fn on_sync_failed(&self, _message: &str) {
        self.record(ViewEvent::SyncFailed);
    }

    fn on_publish_failed(&self, _quote: &Quote, _message: &str) {
        self.record(ViewEvent::PublishFailed);
    }

    fn on_storage_failed(&self, _message: &str) {
        self.record(ViewEvent::StorageFailed);
    }
}
