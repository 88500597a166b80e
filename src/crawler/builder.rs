//! Manifest builder - main sweep orchestration logic
//!
//! This module drives the full make × year cross product: throttle, probe,
//! scrape, accumulate, and finally write the manifest artifact exactly once.
//! Execution is strictly sequential - one outbound request at a time, every
//! request gated by the throttle.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_listing, probe_year, ProbeOutcome};
use crate::crawler::parser::extract_model_links;
use crate::crawler::throttle::Throttle;
use crate::manifest::{write_manifest, ManifestEntry};
use crate::CrawlError;
use reqwest::Client;
use std::path::PathBuf;

/// Drives the crawl and owns the in-memory accumulator
///
/// All progress lives in memory until the single final write; an interrupted
/// run leaves no partial artifact behind.
pub struct ManifestBuilder {
    config: Config,
    client: Client,
    throttle: Throttle,
    entries: Vec<ManifestEntry>,
}

impl ManifestBuilder {
    /// Creates a new builder from an immutable configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration (validated by the loader)
    ///
    /// # Returns
    ///
    /// * `Ok(ManifestBuilder)` - Ready to sweep
    /// * `Err(CrawlError)` - HTTP client construction failed
    pub fn new(config: Config) -> Result<Self, CrawlError> {
        let client = build_http_client(&config)?;
        let throttle = Throttle::from_millis(config.crawler.throttle_ms);

        Ok(Self {
            config,
            client,
            throttle,
            entries: Vec::new(),
        })
    }

    /// Sweeps every (make, year) pair and writes the manifest
    ///
    /// For each make in configured order and each year ascending:
    ///
    /// 1. Throttle.
    /// 2. Probe the listing page. A failed probe skips the year - a transport
    ///    failure is logged at debug level but never retried, so a flaky
    ///    origin degrades to fewer rows rather than aborting the run.
    /// 3. On a confirmed listing, scrape it and append every extracted model
    ///    link to the accumulator, then throttle again.
    ///
    /// Only after the whole sweep does the artifact get replaced; a
    /// filesystem failure there is fatal and propagates.
    ///
    /// # Returns
    ///
    /// * `Ok(PathBuf)` - Path of the written manifest
    /// * `Err(CrawlError)` - Final artifact write failed
    pub async fn build(mut self) -> Result<PathBuf, CrawlError> {
        let makes = self.config.makes.clone();

        for make in &makes {
            let display_make = decode_make(make);
            tracing::info!("Checking {}", display_make);

            for year in self.config.years() {
                self.throttle.pause().await;

                match probe_year(&self.client, &self.config, make, year).await {
                    ProbeOutcome::Present(url) => {
                        tracing::info!("Found {} {}", display_make, year);
                        self.scrape_listing(make, &display_make, year, &url).await;
                        self.throttle.pause().await;
                    }
                    ProbeOutcome::Absent => {}
                    ProbeOutcome::Indeterminate(cause) => {
                        tracing::debug!(
                            "Probe for {} {} indeterminate ({}), treating as absent",
                            display_make,
                            year,
                            cause
                        );
                    }
                }
            }
        }

        let path = PathBuf::from(&self.config.output.manifest_path);
        write_manifest(&path, &self.entries)?;
        tracing::info!("Wrote {} entries to {}", self.entries.len(), path.display());

        Ok(path)
    }

    /// Fetches one confirmed listing page and appends its model links
    ///
    /// A fetch failure here is recoverable: it is logged as a warning and the
    /// (make, year) pair simply contributes zero entries.
    async fn scrape_listing(&mut self, make: &str, display_make: &str, year: u16, url: &str) {
        let body = match fetch_listing(&self.client, &self.config, url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Couldn't fetch {}: {}", url, e);
                return;
            }
        };

        for link in extract_model_links(&body, &self.config.site.base_url, make, year) {
            self.entries.push(ManifestEntry {
                make: display_make.to_string(),
                model: link.model,
                year: year.to_string(),
                bundle_url: link.bundle_url,
            });
        }
    }

    /// Number of entries accumulated so far
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// Decodes a percent-encoded make identifier for the manifest's make column
///
/// Invalid percent sequences pass through unchanged; the raw identifier is
/// kept if the decoded bytes are not valid UTF-8.
fn decode_make(make: &str) -> String {
    urlencoding::decode(make)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| make.to_string())
}
