//! Crawler module for sweeping the make/year hierarchy
//!
//! This module contains the core crawling logic, including:
//! - HTTP probing and listing page fetching
//! - HTML parsing and detail-link extraction
//! - Fixed-delay request throttling
//! - Overall sweep coordination and manifest assembly

mod builder;
mod fetcher;
mod parser;
mod throttle;

pub use builder::ManifestBuilder;
pub use fetcher::{build_http_client, fetch_listing, probe_year, ProbeOutcome};
pub use parser::{extract_model_links, ModelLink};
pub use throttle::Throttle;

use crate::config::Config;
use crate::CrawlError;
use std::path::PathBuf;

/// Runs a complete manifest crawl
///
/// This is the main entry point. It sweeps every configured make across the
/// configured year range, scrapes each confirmed listing page, and writes the
/// CSV manifest exactly once at the end.
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written manifest
/// * `Err(CrawlError)` - Client construction or final artifact write failed
pub async fn crawl(config: Config) -> Result<PathBuf, CrawlError> {
    ManifestBuilder::new(config)?.build().await
}
