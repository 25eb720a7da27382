//! Dalil: a scraper for the Monshaat business guide directory
//!
//! This crate walks the paginated business directory on the Monshaat site,
//! follows every business card link to its detail page, extracts the title,
//! description and classification, and writes everything to one CSV file.

pub mod config;
pub mod output;
pub mod scrape;

use thiserror::Error;

/// Main error type for Dalil operations
#[derive(Debug, Error)]
pub enum DalilError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Dalil operations
pub type Result<T> = std::result::Result<T, DalilError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use scrape::{BusinessRecord, PageResult, Scraper};
