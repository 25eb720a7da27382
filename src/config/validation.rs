use crate::config::types::{Config, OutputConfig, ScrapeConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_scrape_config(&config.scrape)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates source site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    // The origin must be a plain http(s) URL; card hrefs are
    // origin-relative paths, so a trailing slash would double up.
    let origin = Url::parse(&config.origin)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid origin: {}", e)))?;

    if origin.scheme() != "http" && origin.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "origin must use http or https, got '{}'",
            origin.scheme()
        )));
    }

    if config.origin.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "origin must not end with a slash, got '{}'",
            config.origin
        )));
    }

    Url::parse(&config.directory_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid directory-url: {}", e)))?;

    if !config.directory_url.starts_with(&config.origin) {
        return Err(ConfigError::Validation(format!(
            "directory-url must start with the origin '{}', got '{}'",
            config.origin, config.directory_url
        )));
    }

    Ok(())
}

/// Validates scrape behavior configuration
fn validate_scrape_config(config: &ScrapeConfig) -> Result<(), ConfigError> {
    if let Some(max_pages) = config.max_pages {
        if max_pages < 1 {
            return Err(ConfigError::Validation(format!(
                "max-pages must be >= 1 when set, got {}",
                max_pages
            )));
        }
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
