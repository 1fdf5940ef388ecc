// src/upstream/client.rs
use crate::utils::error::FetchError;
use reqwest::header;

/// Page the statistics are scraped from.
pub const DEFAULT_UPSTREAM_URL: &str = "https://www.mohfw.gov.in/";

const USER_AGENT: &str = concat!("covid_stats_api/", env!("CARGO_PKG_VERSION"));

/// Creates a reqwest client for the upstream page.
fn build_upstream_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        // Library default timeouts only
        .build()
}

/// Downloads the upstream page and returns its body as text.
/// One GET per call, no retry. A non-success status is an error and the
/// error page body is discarded.
pub async fn fetch_document(url: &str) -> Result<String, FetchError> {
    let client = build_upstream_client()?;

    tracing::info!("Fetching upstream document from: {}", url);

    let response = client
        .get(url)
        .header(header::ACCEPT, "text/html,*/*")
        .send()
        .await?; // Propagates reqwest::Error as FetchError::Network

    let status = response.status();
    if !status.is_success() {
        tracing::error!("HTTP error status: {} for URL: {}", status, url);
        return Err(FetchError::Http(status));
    }

    let body = response.text().await?;
    tracing::debug!("Successfully downloaded {} bytes from {}", body.len(), url);

    Ok(body)
}
