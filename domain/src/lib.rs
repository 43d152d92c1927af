//! Domain layer for quotebook
//!
//! This crate contains the core entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quote Collection
//!
//! An ordered list of [`Quote`]s. Two quotes are considered duplicates when
//! their `text` is equal; the category plays no part in de-duplication.
//!
//! ## Category Filter
//!
//! - **All**: no category restriction (persisted as `"all"`)
//! - **Specific**: only quotes whose category matches exactly

pub mod category;
pub mod core;
pub mod quote;

// Re-export commonly used types
pub use category::{filter::CategoryFilter, options::category_options};
pub use core::error::DomainError;
pub use quote::{collection::QuoteCollection, entities::Quote, seed::seed_quotes};
