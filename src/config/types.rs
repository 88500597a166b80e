use serde::Deserialize;
use std::ops::RangeInclusive;

/// Main configuration structure for Charm-Manifest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
    /// Make identifiers in URL-encoded form, in scan order
    pub makes: Vec<String>,
}

/// Remote origin configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Origin the site hierarchy is rooted at (no trailing slash)
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Identifying request header sent with every call
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Fixed delay between consecutive outbound requests (milliseconds)
    #[serde(rename = "throttle-ms")]
    pub throttle_ms: u64,

    /// Timeout for existence probes (seconds)
    #[serde(rename = "probe-timeout-secs")]
    pub probe_timeout_secs: u64,

    /// Timeout for listing page fetches (seconds); listing pages may be larger
    #[serde(rename = "listing-timeout-secs")]
    pub listing_timeout_secs: u64,

    /// First model year to scan (inclusive)
    #[serde(rename = "year-start")]
    pub year_start: u16,

    /// Last model year to scan (inclusive)
    #[serde(rename = "year-end")]
    pub year_end: u16,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path the CSV manifest is written to (replaced on every run)
    #[serde(rename = "manifest-path")]
    pub manifest_path: String,
}

impl Config {
    /// The inclusive year interval to scan, ascending
    pub fn years(&self) -> RangeInclusive<u16> {
        self.crawler.year_start..=self.crawler.year_end
    }

    /// Built-in configuration for the charm.li mirror
    ///
    /// Carries the production constants, including the full list of 52 makes
    /// hosted there, so the binary runs without any config file.
    pub fn charm_li() -> Self {
        Config {
            site: SiteConfig {
                base_url: "https://charm.li".to_string(),
                user_agent: "Mozilla/5.0".to_string(),
            },
            crawler: CrawlerConfig {
                throttle_ms: 300,
                probe_timeout_secs: 10,
                listing_timeout_secs: 15,
                year_start: 1980,
                year_end: 2024,
            },
            output: OutputConfig {
                manifest_path: "charm_manifest.csv".to_string(),
            },
            makes: CHARM_LI_MAKES.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::charm_li()
    }
}

/// URL-encoded make identifiers hosted on charm.li
const CHARM_LI_MAKES: &[&str] = &[
    "Acura",
    "Audi",
    "BMW",
    "Buick",
    "Cadillac",
    "Chevrolet",
    "Chrysler",
    "Daewoo",
    "Daihatsu",
    "Dodge%20and%20Ram",
    "Eagle",
    "Fiat",
    "Ford",
    "Freightliner",
    "GMC",
    "Geo",
    "Honda",
    "Hummer",
    "Hyundai",
    "Infiniti",
    "Isuzu",
    "Jaguar",
    "Jeep",
    "Kia",
    "Land%20Rover",
    "Lexus",
    "Lincoln",
    "Mazda",
    "Mercedes%20Benz",
    "Mercury",
    "Mini",
    "Mitsubishi",
    "Nissan-Datsun",
    "Oldsmobile",
    "Peugeot",
    "Plymouth",
    "Pontiac",
    "Porsche",
    "Renault",
    "SRT",
    "Saab",
    "Saturn",
    "Scion",
    "Smart",
    "Subaru",
    "Suzuki",
    "Toyota",
    "UD",
    "Volkswagen",
    "Volvo",
    "Workhorse",
    "Yugo",
];
