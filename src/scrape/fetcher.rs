//! HTTP fetcher plumbing shared by the pager and the detail fetcher
//!
//! One GET per call, no retries, no custom headers beyond the user agent.
//! Requests carry no timeout: a hung server stalls the run, which matches
//! the sequential "one request in flight" model of the scraper.

use reqwest::Client;
use thiserror::Error;

/// Errors from a single page fetch
///
/// Both variants are absorbed by the callers (the pager and the detail
/// fetcher log them and continue); they never abort the run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("status code {0}")]
    Status(u16),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Builds the HTTP client used for the whole run
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body text
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - Response body of a 2xx response
/// * `Err(FetchError)` - Non-success status, or a transport-level failure
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    Ok(response.text().await?)
}
