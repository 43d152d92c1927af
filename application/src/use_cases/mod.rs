//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod category_index;
pub mod import_export;
pub mod quote_session;
pub mod quote_store;
pub mod selection;
pub mod sync_quotes;

#[cfg(test)]
pub(crate) mod test_support;
