//! Quote collection
//!
//! An ordered list of quotes with the two mutation rules the application
//! needs: unconditional append (add, import) and text-based merge (sync).

use super::entities::Quote;
use super::seed::seed_quotes;
use crate::category::filter::CategoryFilter;
use crate::category::options::category_options;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered collection of quotes (Aggregate)
///
/// Insertion order is preserved. The serialized form is a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteCollection {
    quotes: Vec<Quote>,
}

impl QuoteCollection {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    /// Collection holding the built-in seed list.
    pub fn seeded() -> Self {
        Self::new(seed_quotes())
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn as_slice(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.iter()
    }

    pub fn last(&self) -> Option<&Quote> {
        self.quotes.last()
    }

    pub fn into_vec(self) -> Vec<Quote> {
        self.quotes
    }

    /// Append one quote.
    pub fn push(&mut self, quote: Quote) {
        self.quotes.push(quote);
    }

    /// Append every quote, duplicates included.
    pub fn extend(&mut self, quotes: impl IntoIterator<Item = Quote>) {
        self.quotes.extend(quotes);
    }

    /// Merge remote quotes, keeping the local record on a text collision.
    ///
    /// A remote quote is appended only if no quote with the same text is
    /// present, counting quotes appended earlier in the same merge.
    /// Returns the number of quotes appended.
    pub fn merge(&mut self, remote: impl IntoIterator<Item = Quote>) -> usize {
        let mut known: HashSet<String> = self.quotes.iter().map(|q| q.text.clone()).collect();
        let before = self.quotes.len();

        for quote in remote {
            if known.insert(quote.text.clone()) {
                self.quotes.push(quote);
            }
        }

        self.quotes.len() - before
    }

    /// Quotes passing `filter`, in collection order.
    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<&Quote> {
        self.quotes
            .iter()
            .filter(|q| filter.matches(&q.category))
            .collect()
    }

    /// `All` followed by each distinct category in first-seen order.
    pub fn category_options(&self) -> Vec<CategoryFilter> {
        category_options(&self.quotes)
    }
}

impl From<Vec<Quote>> for QuoteCollection {
    fn from(quotes: Vec<Quote>) -> Self {
        Self::new(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuoteCollection {
        QuoteCollection::new(vec![
            Quote::new("one", "A"),
            Quote::new("two", "B"),
            Quote::new("three", "A"),
        ])
    }

    #[test]
    fn test_filtered_all_returns_everything() {
        let collection = sample();
        let all: Vec<Quote> = collection
            .filtered(&CategoryFilter::All)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(all, collection.as_slice());
    }

    #[test]
    fn test_filtered_specific() {
        let collection = sample();
        let only_a = collection.filtered(&CategoryFilter::specific("A"));
        assert_eq!(only_a.len(), 2);
        assert!(only_a.iter().all(|q| q.category == "A"));
        assert_eq!(only_a[0].text, "one");
        assert_eq!(only_a[1].text, "three");
    }

    #[test]
    fn test_filtered_unknown_category_is_empty() {
        assert!(sample().filtered(&CategoryFilter::specific("Z")).is_empty());
    }

    #[test]
    fn test_merge_keeps_local_on_text_collision() {
        let mut collection = QuoteCollection::new(vec![Quote::new("X", "Local")]);
        let added = collection.merge(vec![Quote::new("X", "Server")]);

        assert_eq!(added, 0);
        assert_eq!(collection.as_slice(), &[Quote::new("X", "Local")]);
    }

    #[test]
    fn test_merge_appends_new_and_dedupes_within_batch() {
        let mut collection = sample();
        let added = collection.merge(vec![
            Quote::new("four", "Server"),
            Quote::new("four", "Server"),
            Quote::new("two", "Server"),
        ]);

        assert_eq!(added, 1);
        assert_eq!(collection.len(), 4);
        assert_eq!(collection.last(), Some(&Quote::new("four", "Server")));
    }

    #[test]
    fn test_extend_keeps_duplicates() {
        let mut collection = sample();
        let copy = collection.clone().into_vec();
        collection.extend(copy);
        assert_eq!(collection.len(), 6);
    }

    #[test]
    fn test_serializes_as_array() {
        let collection = QuoteCollection::new(vec![Quote::new("t", "c")]);
        let json = serde_json::to_string(&collection).unwrap();
        assert_eq!(json, r#"[{"text":"t","category":"c"}]"#);
    }
}
