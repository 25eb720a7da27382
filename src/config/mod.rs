//! Configuration module for Dalil
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, with built-in defaults for the Monshaat business directory.
//!
//! # Example
//!
//! ```no_run
//! use dalil::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Scraping from: {}", config.site.directory_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, ScrapeConfig, SiteConfig};

// Re-export parser functions
pub use parser::{default_config, load_config};
