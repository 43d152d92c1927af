//! Quote entity

use crate::category::filter::ALL_CATEGORIES;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A single displayable quote (Entity)
///
/// Serialized as `{ "text": ..., "category": ... }`, which is the shape used
/// for persisted storage, export files and import documents.
///
/// Quotes have no identifier. [`QuoteCollection::merge`](crate::QuoteCollection::merge)
/// treats two quotes as the same when their `text` is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    /// Create a quote without validation.
    ///
    /// Used for records that arrive from import documents or the remote
    /// source, which are taken as-is.
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Create a quote from user input.
    ///
    /// Both fields are trimmed; an empty result is rejected, as is a category
    /// that would collide with the persisted "all categories" filter.
    pub fn try_new(text: &str, category: &str) -> Result<Self, DomainError> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() {
            return Err(DomainError::EmptyText);
        }
        if category.is_empty() {
            return Err(DomainError::EmptyCategory);
        }
        if category == ALL_CATEGORIES {
            return Err(DomainError::ReservedCategory(category.to_string()));
        }

        Ok(Self::new(text, category))
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" — {}", self.text, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_trims_input() {
        let quote = Quote::try_new("  Stay hungry.  ", " Life ").unwrap();
        assert_eq!(quote.text, "Stay hungry.");
        assert_eq!(quote.category, "Life");
    }

    #[test]
    fn test_try_new_rejects_empty_fields() {
        assert_eq!(Quote::try_new("", "Life"), Err(DomainError::EmptyText));
        assert_eq!(Quote::try_new("   ", "Life"), Err(DomainError::EmptyText));
        assert_eq!(Quote::try_new("Text", ""), Err(DomainError::EmptyCategory));
        assert_eq!(Quote::try_new("Text", " \t"), Err(DomainError::EmptyCategory));
    }

    #[test]
    fn test_try_new_rejects_reserved_category() {
        assert_eq!(
            Quote::try_new("Text", " all "),
            Err(DomainError::ReservedCategory("all".to_string()))
        );
        assert!(Quote::try_new("Text", "All").is_ok());
    }

    #[test]
    fn test_display() {
        let quote = Quote::new("Simplicity is the soul of efficiency.", "Efficiency");
        assert_eq!(
            quote.to_string(),
            "\"Simplicity is the soul of efficiency.\" — Efficiency"
        );
    }

    #[test]
    fn test_json_shape() {
        let quote = Quote::new("A", "B");
        let json = serde_json::to_string(&quote).unwrap();
        assert_eq!(json, r#"{"text":"A","category":"B"}"#);

        let parsed: Quote = serde_json::from_str(r#"{"category":"B","text":"A"}"#).unwrap();
        assert_eq!(parsed, quote);
    }
}
