//! Quote domain.
//!
//! - [`entities::Quote`] — a text/category pair
//! - [`collection::QuoteCollection`] — ordered list with the merge rule
//! - [`seed::seed_quotes`] — the built-in default list

pub mod collection;
pub mod entities;
pub mod seed;
