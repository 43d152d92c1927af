//! Category option list derivation

use super::filter::CategoryFilter;
use crate::quote::entities::Quote;
use std::collections::HashSet;

/// Build the list of selectable filters for a collection.
///
/// Always starts with [`CategoryFilter::All`], followed by each distinct
/// category in first-seen order.
pub fn category_options(quotes: &[Quote]) -> Vec<CategoryFilter> {
    let mut seen = HashSet::new();
    let mut options = vec![CategoryFilter::All];

    for quote in quotes {
        if seen.insert(quote.category.as_str()) {
            options.push(CategoryFilter::specific(quote.category.clone()));
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_in_first_seen_order() {
        let quotes = vec![
            Quote::new("1", "A"),
            Quote::new("2", "B"),
            Quote::new("3", "A"),
        ];
        let options: Vec<String> = category_options(&quotes)
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(options, vec!["all", "A", "B"]);
    }

    #[test]
    fn test_empty_collection_has_only_all() {
        assert_eq!(category_options(&[]), vec![CategoryFilter::All]);
    }
}
