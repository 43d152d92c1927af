//! Built-in seed list used when nothing has been persisted yet

use super::entities::Quote;

/// The default collection for a fresh installation.
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The best way to get started is to quit talking and begin doing.",
            "Motivation",
        ),
        Quote::new(
            "Success is not the key to happiness. Happiness is the key to success.",
            "Inspiration",
        ),
        Quote::new(
            "Your time is limited, don’t waste it living someone else’s life.",
            "Life",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_three_distinct_categories() {
        let seed = seed_quotes();
        assert_eq!(seed.len(), 3);
        assert!(seed.iter().all(|q| Quote::try_new(&q.text, &q.category).is_ok()));

        let categories: Vec<_> = seed.iter().map(|q| q.category.as_str()).collect();
        assert_eq!(categories, vec!["Motivation", "Inspiration", "Life"]);
    }
}
