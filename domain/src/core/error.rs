//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Quote text cannot be empty")]
    EmptyText,

    #[error("Quote category cannot be empty")]
    EmptyCategory,

    #[error("Category name '{0}' is reserved")]
    ReservedCategory(String),
}
