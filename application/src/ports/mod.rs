//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod key_value_store;
pub mod quote_view;
pub mod random_source;
pub mod remote_quote_source;
