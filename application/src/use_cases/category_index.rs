//! Category index
//!
//! Tracks the selectable category filters for the current collection and the
//! user's active filter, which is persisted under [`SELECTED_CATEGORY_KEY`].

use crate::ports::key_value_store::{KeyValueStore, SELECTED_CATEGORY_KEY, StorageError};
use quotebook_domain::{CategoryFilter, QuoteCollection};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

pub struct CategoryIndex {
    storage: Arc<dyn KeyValueStore>,
    options: RwLock<Vec<CategoryFilter>>,
    active: RwLock<CategoryFilter>,
}

impl CategoryIndex {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            options: RwLock::new(vec![CategoryFilter::All]),
            active: RwLock::new(CategoryFilter::All),
        }
    }

    /// Recompute the option list: `All`, then distinct categories in
    /// first-seen order.
    pub fn rebuild(&self, quotes: &QuoteCollection) -> Vec<CategoryFilter> {
        let options = quotes.category_options();
        debug!("Category index rebuilt with {} options", options.len());
        *self.options.write().unwrap_or_else(|e| e.into_inner()) = options.clone();
        options
    }

    /// Re-apply the persisted filter if it is still one of the options.
    ///
    /// Returns the active filter afterwards.
    pub fn restore(&self) -> CategoryFilter {
        let saved = match self.storage.get(SELECTED_CATEGORY_KEY) {
            Ok(Some(saved)) => CategoryFilter::from(saved),
            Ok(None) => return self.active(),
            Err(e) => {
                warn!("Could not read selected category: {}", e);
                return self.active();
            }
        };

        if self.options().contains(&saved) {
            debug!("Restored category filter '{}'", saved);
            self.set_active(saved);
        } else {
            debug!("Ignoring stale category filter '{}'", saved);
        }
        self.active()
    }

    /// Make `filter` active and persist it.
    pub fn set_selected(&self, filter: CategoryFilter) -> Result<(), StorageError> {
        self.set_active(filter.clone());
        self.storage.set(SELECTED_CATEGORY_KEY, filter.as_str())
    }

    pub fn active(&self) -> CategoryFilter {
        self.active.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn options(&self) -> Vec<CategoryFilter> {
        self.options.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn set_active(&self, filter: CategoryFilter) {
        *self.active.write().unwrap_or_else(|e| e.into_inner()) = filter;
    }
}
