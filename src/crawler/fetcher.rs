//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper:
//! - Building the HTTP client with the configured user agent
//! - Single-attempt GET requests with a bounded timeout
//! - Error classification (timeout, status, transport)
//!
//! There is no retry logic. A failed page is logged and skipped.

use crate::config::UserAgentConfig;
use crate::crawler::document::PageDocument;
use crate::ScrapeError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Upper bound on a whole request, connect through body
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use keyword_scraper::config::UserAgentConfig;
/// use keyword_scraper::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(REQUEST_TIMEOUT)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and parses the body as HTML
///
/// # Errors
///
/// | Condition | Error |
/// |-----------|-------|
/// | Request or body read timed out | `ScrapeError::Timeout` |
/// | Non-2xx status | `ScrapeError::Status` |
/// | Connection, TLS or decode failure | `ScrapeError::Http` |
pub async fn fetch_document(client: &Client, url: &Url) -> Result<PageDocument, ScrapeError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|e| classify_error(url, e))?;
    Ok(PageDocument::parse(&body))
}

/// Fetches a page, logging and swallowing any failure
///
/// Returns None when the page could not be retrieved; callers treat that as
/// "no data for this URL" and move on.
pub async fn fetch_page(client: &Client, url: &Url) -> Option<PageDocument> {
    tracing::info!("Fetching: {}", url);

    match fetch_document(client, url).await {
        Ok(document) => Some(document),
        Err(e) => {
            tracing::warn!("Error fetching {}: {}", url, e);
            None
        }
    }
}

fn classify_error(url: &Url, error: reqwest::Error) -> ScrapeError {
    if error.is_timeout() {
        ScrapeError::Timeout {
            url: url.to_string(),
        }
    } else {
        ScrapeError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
