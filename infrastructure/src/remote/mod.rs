//! Remote quote source adapters

mod placeholder;

pub use placeholder::{DEFAULT_ENDPOINT, DEFAULT_REMOTE_CATEGORY, PlaceholderQuoteSource};
