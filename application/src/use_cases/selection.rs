//! Selection engine
//!
//! Picks one quote to present for the active filter and remembers it as the
//! last viewed quote in session storage.

use crate::ports::key_value_store::{KeyValueStore, LAST_VIEWED_QUOTE_KEY};
use crate::ports::random_source::RandomSource;
use quotebook_domain::{CategoryFilter, Quote, QuoteCollection};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct SelectionEngine {
    random: Arc<dyn RandomSource>,
    session: Arc<dyn KeyValueStore>,
}

impl SelectionEngine {
    /// `session` is the session-scoped store the last viewed quote goes to.
    pub fn new(random: Arc<dyn RandomSource>, session: Arc<dyn KeyValueStore>) -> Self {
        Self { random, session }
    }

    /// Quotes eligible under `filter`, in collection order.
    pub fn filtered<'a>(quotes: &'a QuoteCollection, filter: &CategoryFilter) -> Vec<&'a Quote> {
        quotes.filtered(filter)
    }

    /// Uniformly pick one element. `None` when `items` is empty.
    pub fn pick_random<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.random.next_index(items.len()) % items.len();
        items.get(index)
    }

    /// Pick a quote under `filter` and publish it as the last viewed quote.
    pub fn show(&self, quotes: &QuoteCollection, filter: &CategoryFilter) -> Option<Quote> {
        let candidates = Self::filtered(quotes, filter);
        let picked = self.pick_random(&candidates).map(|q| (*q).clone());

        match &picked {
            Some(quote) => self.remember(quote),
            None => debug!("No quotes available for filter '{}'", filter),
        }
        picked
    }

    /// The last quote published by [`show`](Self::show) in this session.
    pub fn last_viewed(&self) -> Option<Quote> {
        let raw = match self.session.get(LAST_VIEWED_QUOTE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Could not read last viewed quote: {}", e);
                return None;
            }
        };
        serde_json::from_str(&raw).ok()
    }

    fn remember(&self, quote: &Quote) {
        let json = match serde_json::to_string(quote) {
            Ok(json) => json,
            Err(e) => {
                warn!("Could not serialize last viewed quote: {}", e);
                return;
            }
        };
        if let Err(e) = self.session.set(LAST_VIEWED_QUOTE_KEY, &json) {
            warn!("Could not store last viewed quote: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{FixedIndex, MemoryStore};

    struct Cycling(std::sync::atomic::AtomicUsize);

    impl RandomSource for Cycling {
        fn next_index(&self, len: usize) -> usize {
            self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst) % len
        }
    }

    fn engine(index: usize) -> (Arc<MemoryStore>, SelectionEngine) {
        let session = Arc::new(MemoryStore::default());
        let engine = SelectionEngine::new(Arc::new(FixedIndex(index)), session.clone());
        (session, engine)
    }

    fn collection() -> QuoteCollection {
        QuoteCollection::new(vec![
            Quote::new("one", "A"),
            Quote::new("two", "B"),
            Quote::new("three", "A"),
        ])
    }

    #[test]
    fn test_pick_random_empty_is_none() {
        let (_, engine) = engine(0);
        let empty: [Quote; 0] = [];
        assert!(engine.pick_random(&empty).is_none());
    }

    #[test]
    fn test_pick_random_returns_member() {
        let engine = SelectionEngine::new(
            Arc::new(Cycling(Default::default())),
            Arc::new(MemoryStore::default()),
        );
        let quotes = collection().into_vec();
        for _ in 0..10 {
            let picked = engine.pick_random(&quotes).unwrap();
            assert!(quotes.contains(picked));
        }
    }

    #[test]
    fn test_show_respects_filter() {
        let (_, engine) = engine(1);
        let picked = engine
            .show(&collection(), &CategoryFilter::specific("A"))
            .unwrap();
        assert_eq!(picked, Quote::new("three", "A"));
    }

    #[test]
    fn test_show_empty_category() {
        let (session, engine) = engine(0);
        assert!(engine.show(&collection(), &CategoryFilter::specific("Z")).is_none());
        assert!(session.value(LAST_VIEWED_QUOTE_KEY).is_none());
        assert!(engine.last_viewed().is_none());
    }

    #[test]
    fn test_show_publishes_last_viewed() {
        let (session, engine) = engine(1);
        let picked = engine.show(&collection(), &CategoryFilter::All).unwrap();

        assert_eq!(picked, Quote::new("two", "B"));
        assert_eq!(
            session.value(LAST_VIEWED_QUOTE_KEY).as_deref(),
            Some(r#"{"text":"two","category":"B"}"#)
        );
        assert_eq!(engine.last_viewed(), Some(picked));
    }

    #[test]
    fn test_out_of_range_index_is_wrapped() {
        struct TooLarge;
        impl RandomSource for TooLarge {
            fn next_index(&self, len: usize) -> usize {
                len + 1
            }
        }

        let engine = SelectionEngine::new(Arc::new(TooLarge), Arc::new(MemoryStore::default()));
        let quotes = collection().into_vec();
        assert_eq!(engine.pick_random(&quotes), Some(&quotes[1]));
    }
}
