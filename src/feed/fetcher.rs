use futures::StreamExt;
use reqwest::StatusCode;
use thiserror::Error;

use super::model::Feed;
use super::parser::{parse_feed, ParseError};
use crate::category::Category;
use crate::config::{ConfigError, FetchConfig};

/// Default response body limit (10MB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Errors that can occur while fetching a feed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the connection failed (DNS, connect,
    /// configured timeout, broken body stream).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with something other than 200 OK.
    #[error("HTTP error: status {0}")]
    HttpStatus(StatusCode),
    /// The body is not a well-formed feed document.
    #[error("Decode error: {0}")]
    Decode(#[from] ParseError),
    /// Response body exceeded the configured size limit
    #[error("Response too large (limit {limit} bytes)")]
    ResponseTooLarge { limit: usize },
}

impl FetchError {
    /// True when the underlying transport error was a client-configured
    /// timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Transport(e) if e.is_timeout())
    }
}

/// Fetches hot-entry feeds over HTTP.
///
/// Each call issues exactly one GET; nothing is retried or cached. Cloning is
/// cheap since `reqwest::Client` is reference-counted internally.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    max_body_bytes: usize,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    /// A fetcher with a default client (no custom timeout or transport).
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Uses a caller-configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Builds the client from `config` and applies its body limit.
    pub fn from_config(config: &FetchConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            client: config.build_client()?,
            max_body_bytes: config.max_body_bytes,
        })
    }

    /// Overrides the response body limit. 0 = no limit.
    pub fn max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = limit;
        self
    }

    /// Fetches and decodes the feed of `category`.
    pub async fn fetch(&self, category: Category) -> Result<Feed, FetchError> {
        self.fetch_url(category.url()).await
    }

    /// Fetches and decodes a feed document from an arbitrary URL.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Transport`] - Connection, DNS or timeout failure
    /// - [`FetchError::HttpStatus`] - Any status other than 200 OK
    /// - [`FetchError::ResponseTooLarge`] - Body exceeded the size limit
    /// - [`FetchError::Decode`] - Body is not a valid feed document
    pub async fn fetch_url(&self, url: &str) -> Result<Feed, FetchError> {
        tracing::debug!(url = %url, "Fetching feed");

        let response = self.client.get(url).send().await?;

        if response.status() != StatusCode::OK {
            tracing::warn!(url = %url, status = %response.status(), "Unexpected HTTP status");
            return Err(FetchError::HttpStatus(response.status()));
        }

        // The response is consumed here, so its connection is released on
        // every return path below.
        let bytes = read_limited_bytes(response, self.max_body_bytes).await?;
        let feed = parse_feed(&bytes)?;

        tracing::debug!(
            url = %url,
            bytes = bytes.len(),
            articles = feed.articles.len(),
            "Feed decoded"
        );
        Ok(feed)
    }
}

/// Fetches the feed of `category` with `client`, or with a default client
/// when `None` is given.
pub async fn fetch(
    category: Category,
    client: Option<&reqwest::Client>,
) -> Result<Feed, FetchError> {
    let fetcher = match client {
        Some(client) => Fetcher::with_client(client.clone()),
        None => Fetcher::new(),
    };
    fetcher.fetch(category).await
}

/// Reads the whole body, failing once it exceeds `limit` bytes (0 = no limit).
async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    let limit = if limit == 0 { usize::MAX } else { limit };

    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len > limit as u64 {
            tracing::warn!(content_length = len, limit = limit, "Feed response too large");
            return Err(FetchError::ResponseTooLarge { limit });
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            tracing::warn!(limit = limit, "Feed response too large");
            return Err(FetchError::ResponseTooLarge { limit });
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
