//! Remote quote source port
//!
//! Defines the interface for the remote endpoint that sync cycles pull
//! candidate quotes from (and optionally publish new quotes to).

use async_trait::async_trait;
use quotebook_domain::Quote;
use thiserror::Error;

/// Errors that can occur while talking to the remote source
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Remote source of quotes
///
/// Implementations map whatever the remote returns into [`Quote`] values.
/// A failed call must not have side effects on local state.
#[async_trait]
pub trait RemoteQuoteSource: Send + Sync {
    /// Fetch all candidate quotes from the remote
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, RemoteError>;

    /// Send a newly created quote to the remote
    async fn publish_quote(&self, quote: &Quote) -> Result<(), RemoteError>;
}
