//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with the configured identifying header
//! - Bounded-timeout existence probes for (make, year) listing pages
//! - Listing page fetches with a longer timeout
//! - Error classification for probe outcomes

use crate::config::Config;
use crate::CrawlError;
use reqwest::Client;
use std::time::Duration;

/// Outcome of an existence probe for one (make, year) listing page
///
/// The sweep treats `Absent` and `Indeterminate` identically (skip the year,
/// no retry), but the distinction is kept in the type so a transport failure
/// is never mistaken for a confirmed 404 by anyone reading the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The listing page answered with a success status; carries its URL
    Present(String),

    /// The server answered with a non-success status
    Absent,

    /// Timeout, connection failure, or other transport error
    Indeterminate(String),
}

/// Builds the HTTP client used for every outbound request
///
/// The client carries the configured User-Agent on every call. Timeouts are
/// set per request, since probes and listing fetches use different bounds.
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.site.user_agent.clone())
        .connect_timeout(Duration::from_secs(config.crawler.probe_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Builds the listing URL for a (make, year) pair
///
/// The make must already be in its percent-encoded form.
pub fn listing_url(config: &Config, make: &str, year: u16) -> String {
    format!("{}/{}/{}/", config.site.base_url, make, year)
}

/// Probes whether a listing page exists for a (make, year) pair
///
/// Issues a single GET bounded by the probe timeout. The status is treated
/// purely as an existence signal; the body is never inspected. Exactly one
/// outbound call, no retry.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `config` - The crawler configuration
/// * `make` - Make identifier in percent-encoded form
/// * `year` - Year within the configured scan range
pub async fn probe_year(client: &Client, config: &Config, make: &str, year: u16) -> ProbeOutcome {
    let url = listing_url(config, make, year);

    let response = client
        .get(&url)
        .timeout(Duration::from_secs(config.crawler.probe_timeout_secs))
        .send()
        .await;

    match response {
        Ok(response) if response.status().is_success() => ProbeOutcome::Present(url),
        Ok(_) => ProbeOutcome::Absent,
        Err(e) if e.is_timeout() => ProbeOutcome::Indeterminate("request timeout".to_string()),
        Err(e) if e.is_connect() => ProbeOutcome::Indeterminate("connection failed".to_string()),
        Err(e) => ProbeOutcome::Indeterminate(e.to_string()),
    }
}

/// Fetches a confirmed listing page and returns its body
///
/// Uses the longer listing timeout; listing pages may be larger than the
/// probe's existence check suggests. A non-success status or transport
/// failure is an error the caller handles as a recoverable, per-page loss.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `config` - The crawler configuration
/// * `url` - The listing URL returned by a successful probe
pub async fn fetch_listing(client: &Client, config: &Config, url: &str) -> Result<String, CrawlError> {
    let response = client
        .get(url)
        .timeout(Duration::from_secs(config.crawler.listing_timeout_secs))
        .send()
        .await
        .map_err(|source| CrawlError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CrawlError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| CrawlError::Http {
        url: url.to_string(),
        source,
    })
}
