//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with a bounded request timeout
//! - GET requests for pages, with charset detection on the body
//! - GET requests for raw media bytes (images, PDFs)
//! - Error classification

use crate::config::FetchConfig;
use chardetng::EncodingDetector;
use reqwest::{Client, Response};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Per-URL fetch failures; the crawl driver logs these and moves on
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Network error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. } | Self::Timeout { url } | Self::Network { url, .. } => url,
        }
    }

    fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Network {
                url: url.to_string(),
                source: error,
            }
        }
    }
}

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects, kept for logging
    pub final_url: Url,

    /// Decoded body text
    pub body: String,

    /// Name of the character encoding the body was decoded with
    pub encoding: &'static str,
}

/// Builds an HTTP client with proper configuration
///
/// Redirects follow the client default policy. Every request is bounded by
/// the configured timeout so an unresponsive server cannot stall a run.
///
/// # Example
///
/// ```no_run
/// use sitescribe::config::FetchConfig;
/// use sitescribe::crawler::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and decodes its body
///
/// The character encoding is guessed from the body bytes rather than taken
/// from the `Content-Type` header, since many sites mislabel it.
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    let response = send(client, url).await?;
    let final_url = response.url().clone();

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::from_reqwest(url, e))?;

    let (body, encoding) = decode_body(&bytes);

    Ok(FetchedPage {
        final_url,
        body,
        encoding,
    })
}

/// Fetches the raw bytes behind a URL (images, PDFs)
pub async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = send(client, url).await?;

    response
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| FetchError::from_reqwest(url, e))
}

/// Sends a GET request and rejects non-2xx responses
async fn send(client: &Client, url: &str) -> Result<Response, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::from_reqwest(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response)
}

/// Decodes body bytes using a content-based charset guess
///
/// A byte order mark, when present, overrides the guess.
pub fn decode_body(bytes: &[u8]) -> (String, &'static str) {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let guessed = detector.guess(None, true);

    let (text, used, _had_errors) = guessed.decode(bytes);
    (text.into_owned(), used.name())
}
