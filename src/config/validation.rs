use crate::config::types::{Config, CrawlerConfig, OutputConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_crawler_config(&config.crawler)?;
    validate_output_config(&config.output)?;
    validate_makes(&config.makes)?;
    Ok(())
}

/// Validates the remote origin configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    // http is allowed so tests can point at a local mock origin
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base_url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.throttle_ms < 1 {
        return Err(ConfigError::Validation(format!(
            "throttle_ms must be >= 1, got {}",
            config.throttle_ms
        )));
    }

    if config.probe_timeout_secs < 1 || config.listing_timeout_secs < 1 {
        return Err(ConfigError::Validation(
            "probe and listing timeouts must be >= 1 second".to_string(),
        ));
    }

    // Years appear as path segments and manifest fields; keep them four-digit
    for year in [config.year_start, config.year_end] {
        if !(1000..=9999).contains(&year) {
            return Err(ConfigError::Validation(format!(
                "years must be four-digit, got {}",
                year
            )));
        }
    }

    if config.year_start > config.year_end {
        return Err(ConfigError::Validation(format!(
            "year_start ({}) must not be after year_end ({})",
            config.year_start, config.year_end
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.manifest_path.is_empty() {
        return Err(ConfigError::Validation(
            "manifest_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the make list
///
/// Makes are interpolated directly into URL path templates, so they must
/// already be percent-encoded and must not smuggle in extra path segments.
fn validate_makes(makes: &[String]) -> Result<(), ConfigError> {
    if makes.is_empty() {
        return Err(ConfigError::Validation(
            "makes list cannot be empty".to_string(),
        ));
    }

    for make in makes {
        if make.is_empty() {
            return Err(ConfigError::Validation(
                "make identifiers cannot be empty".to_string(),
            ));
        }

        if make.contains('/') || make.contains(' ') {
            return Err(ConfigError::Validation(format!(
                "make '{}' must be a single percent-encoded path segment",
                make
            )));
        }
    }

    Ok(())
}
