//! Quote session use case
//!
//! The facade the presentation layer drives. It wires the store, category
//! index, selection engine, import/export adapter and (optionally) the sync
//! agent together, and keeps the view refreshed after every mutation.
//!
//! # Flow
//!
//! 1. [`start`](QuoteSession::start) rebuilds categories, restores the saved
//!    filter and shows an initial quote
//! 2. User triggers (add, select, import, show next) mutate state and refresh
//! 3. [`start_background_sync`](QuoteSession::start_background_sync) runs
//!    sync cycles on a timer, independent of user triggers

use crate::config::SyncBehavior;
use crate::ports::key_value_store::KeyValueStore;
use crate::ports::quote_view::QuoteView;
use crate::ports::random_source::RandomSource;
use crate::use_cases::category_index::CategoryIndex;
use crate::use_cases::import_export::{QuoteTransfer, TransferError};
use crate::use_cases::quote_store::{AddQuoteError, QuoteStore};
use crate::use_cases::selection::SelectionEngine;
use crate::use_cases::sync_quotes::SyncQuotesUseCase;
use quotebook_domain::{CategoryFilter, Quote, QuoteCollection};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub struct QuoteSession {
    store: Arc<QuoteStore>,
    categories: CategoryIndex,
    selection: SelectionEngine,
    transfer: QuoteTransfer,
    view: Arc<dyn QuoteView>,
    sync: Option<Arc<SyncQuotesUseCase>>,
    behavior: SyncBehavior,
}

impl QuoteSession {
    /// Creates a session over an already loaded store.
    ///
    /// * `durable` - storage for the selected category
    /// * `session` - session-scoped storage for the last viewed quote
    pub fn new(
        store: Arc<QuoteStore>,
        durable: Arc<dyn KeyValueStore>,
        session: Arc<dyn KeyValueStore>,
        random: Arc<dyn RandomSource>,
        view: Arc<dyn QuoteView>,
    ) -> Self {
        Self {
            categories: CategoryIndex::new(durable),
            selection: SelectionEngine::new(random, session),
            transfer: QuoteTransfer::new(store.clone()),
            store,
            view,
            sync: None,
            behavior: SyncBehavior::default().with_enabled(false),
        }
    }

    /// Attach a sync agent and the behavior that governs it.
    pub fn with_sync(mut self, sync: Arc<SyncQuotesUseCase>, behavior: SyncBehavior) -> Self {
        self.sync = Some(sync);
        self.behavior = behavior;
        self
    }

    /// Rebuild categories, restore the saved filter and show a quote.
    pub fn start(&self) -> Option<Quote> {
        let filter = self.restore();
        debug!("Session started with filter '{}'", filter);
        self.show_in(&filter)
    }

    /// Rebuild categories and restore the saved filter without showing a quote.
    pub fn restore(&self) -> CategoryFilter {
        self.rebuild_categories();
        self.categories.restore()
    }

    /// Show another quote under the active filter.
    pub fn show_new_quote(&self) -> Option<Quote> {
        self.show_in(&self.categories.active())
    }

    /// Persist `filter` as the selection and show a quote under it.
    pub fn select_category(&self, filter: CategoryFilter) -> Option<Quote> {
        if let Err(e) = self.categories.set_selected(filter.clone()) {
            self.view.on_storage_failed(&e.to_string());
        }
        self.show_in(&filter)
    }

    /// Add a quote from user input, refresh, and publish it if configured.
    pub async fn add_quote(&self, text: &str, category: &str) -> Result<Quote, AddQuoteError> {
        let quote = match self.store.add(text, category) {
            Ok(quote) => quote,
            Err(AddQuoteError::Invalid(e)) => {
                self.view.on_validation_failed(&e);
                return Err(AddQuoteError::Invalid(e));
            }
            Err(e) => {
                self.view.on_storage_failed(&e.to_string());
                self.refresh();
                return Err(e);
            }
        };

        self.view.on_quote_added(&quote);
        self.refresh();

        if self.behavior.publish_new_quotes
            && let Some(sync) = &self.sync
        {
            // Failure already reported to the view
            let _ = sync.publish(&quote).await;
        }

        Ok(quote)
    }

    /// Serialize the collection for the `quotes.json` download.
    pub fn export(&self) -> Result<String, TransferError> {
        self.transfer.export_all()
    }

    /// Append the records of an import document and refresh.
    ///
    /// A rejected document changes nothing. Records that could not be saved
    /// stay in memory and the failure is reported like a failed add.
    pub fn import(&self, document: &str) -> Result<usize, TransferError> {
        match self.transfer.import_all(document) {
            Ok(count) => {
                self.view.on_import_complete(count);
                self.refresh();
                Ok(count)
            }
            Err(TransferError::Storage(e)) => {
                self.view.on_storage_failed(&e.to_string());
                self.refresh();
                Err(TransferError::Storage(e))
            }
            Err(e) => {
                self.view.on_import_failed(&e.to_string());
                Err(e)
            }
        }
    }

    /// Spawn the periodic sync task if a sync agent is attached and enabled.
    pub fn start_background_sync(&self, cancellation: CancellationToken) -> Option<JoinHandle<()>> {
        let sync = self.sync.as_ref().filter(|_| self.behavior.enabled)?;
        Some(Arc::clone(sync).spawn_periodic(self.behavior.interval, cancellation))
    }

    pub fn sync_agent(&self) -> Option<&Arc<SyncQuotesUseCase>> {
        self.sync.as_ref()
    }

    /// Selectable filters for the current collection, including quotes merged
    /// by a background sync since the last refresh.
    pub fn categories(&self) -> Vec<CategoryFilter> {
        self.store.with_quotes(|quotes| self.categories.rebuild(quotes))
    }

    pub fn active_category(&self) -> CategoryFilter {
        self.categories.active()
    }

    pub fn last_viewed(&self) -> Option<Quote> {
        self.selection.last_viewed()
    }

    pub fn snapshot(&self) -> QuoteCollection {
        self.store.snapshot()
    }

    /// Rebuild categories and show a quote; used after the collection changed.
    pub fn refresh(&self) -> Option<Quote> {
        self.rebuild_categories();
        self.show_new_quote()
    }

    fn rebuild_categories(&self) {
        let options = self.store.with_quotes(|quotes| self.categories.rebuild(quotes));
        self.view.on_categories_changed(&options);
    }

    /// Show a quote under `filter` without changing the selection.
    pub fn show_in(&self, filter: &CategoryFilter) -> Option<Quote> {
        let picked = self
            .store
            .with_quotes(|quotes| self.selection.show(quotes, filter));

        match &picked {
            Some(quote) => self.view.display_quote(quote),
            None => self.view.display_empty(filter),
        }
        picked
    }
}
