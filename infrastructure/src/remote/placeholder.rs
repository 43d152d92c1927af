//! Placeholder HTTP remote
//!
//! Talks to a JSONPlaceholder-style `/posts` endpoint. Each post's `title`
//! becomes a quote's text; every remote quote gets the same category tag.

use async_trait::async_trait;
use quotebook_application::{RemoteError, RemoteQuoteSource};
use quotebook_domain::Quote;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, trace};

/// Endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Category given to every quote that came from the remote
pub const DEFAULT_REMOTE_CATEGORY: &str = "Server";

const USER_AGENT: &str = concat!("quotebook/", env!("CARGO_PKG_VERSION"));

/// The only part of a remote post we use
#[derive(Debug, Deserialize)]
struct RemotePost {
    #[serde(default)]
    title: Option<String>,
}

/// [`RemoteQuoteSource`] over a JSON array of posts
pub struct PlaceholderQuoteSource {
    client: reqwest::Client,
    endpoint: String,
    category: String,
}

impl PlaceholderQuoteSource {
    /// Create a source for `endpoint` with an optional request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, RemoteError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RemoteError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            category: DEFAULT_REMOTE_CATEGORY.to_string(),
        })
    }

    /// Override the category tag for remote quotes
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Map a response body into quotes, skipping posts without a title.
    fn parse_posts(&self, body: &str) -> Result<Vec<Quote>, RemoteError> {
        let posts: Vec<RemotePost> =
            serde_json::from_str(body).map_err(|e| RemoteError::InvalidResponse(e.to_string()))?;
        let total = posts.len();

        let quotes: Vec<Quote> = posts
            .into_iter()
            .filter_map(|post| post.title)
            .filter(|title| !title.trim().is_empty())
            .map(|title| Quote::new(title, self.category.clone()))
            .collect();

        if quotes.len() != total {
            debug!("Skipped {} remote posts without a title", total - quotes.len());
        }
        Ok(quotes)
    }
}

fn request_error(e: reqwest::Error) -> RemoteError {
    if e.is_timeout() {
        RemoteError::Timeout
    } else {
        RemoteError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl RemoteQuoteSource for PlaceholderQuoteSource {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, RemoteError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(request_error)?;
        trace!("Remote returned {} bytes", body.len());
        self.parse_posts(&body)
    }

    async fn publish_quote(&self, quote: &Quote) -> Result<(), RemoteError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(quote)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }
        debug!("Remote accepted quote with status {}", status.as_u16());
        Ok(())
    }
}
