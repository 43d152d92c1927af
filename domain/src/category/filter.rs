//! Category filter value object

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Persisted form of [`CategoryFilter::All`].
pub const ALL_CATEGORIES: &str = "all";

/// Which quotes are eligible for selection (Value Object)
///
/// Stored as a plain string: `"all"` for [`CategoryFilter::All`], otherwise
/// the category name itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// No category restriction
    #[default]
    All,
    /// Only quotes in exactly this category
    Specific(String),
}

impl CategoryFilter {
    /// Create a filter for one category.
    pub fn specific(name: impl Into<String>) -> Self {
        Self::Specific(name.into())
    }

    /// Whether `category` passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Specific(name) => name == category,
        }
    }

    /// Persisted / display string.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Specific(name) => name,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        if s == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Specific(s)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Specific(name) => name,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all() {
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }

    #[test]
    fn test_parse_sentinel() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Life".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::specific("Life")
        );
    }

    #[test]
    fn test_sentinel_is_case_sensitive() {
        assert_eq!(
            "All".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::specific("All")
        );
    }

    #[test]
    fn test_matches() {
        assert!(CategoryFilter::All.matches("anything"));
        assert!(CategoryFilter::specific("A").matches("A"));
        assert!(!CategoryFilter::specific("A").matches("B"));
    }

    #[test]
    fn test_serialize_as_plain_string() {
        let json = serde_json::to_string(&CategoryFilter::All).unwrap();
        assert_eq!(json, "\"all\"");

        let filter: CategoryFilter = serde_json::from_str("\"Life\"").unwrap();
        assert_eq!(filter, CategoryFilter::specific("Life"));
    }
}
