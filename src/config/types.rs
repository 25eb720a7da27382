use serde::Deserialize;

/// Main configuration structure for Dalil
///
/// Every section is optional in the TOML file; omitted sections fall back
/// to the built-in Monshaat directory settings, so the scraper also runs
/// with no config file at all.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub scrape: ScrapeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site: SiteConfig::default(),
            scrape: ScrapeConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Source site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Site origin, prefixed to the origin-relative hrefs found on
    /// business cards (no trailing slash)
    #[serde(default = "default_origin")]
    pub origin: String,

    /// First page of the business directory; also the base that next-page
    /// fragments (e.g. "?page=2") are appended to
    #[serde(rename = "directory-url", default = "default_directory_url")]
    pub directory_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            origin: default_origin(),
            directory_url: default_directory_url(),
        }
    }
}

/// Scrape behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeConfig {
    /// Pause between directory pages (milliseconds)
    #[serde(rename = "page-delay-ms", default = "default_page_delay_ms")]
    pub page_delay_ms: u64,

    /// Optional cap on the number of directory pages followed.
    /// Absent means follow the pagination chain until it ends.
    #[serde(rename = "max-pages", default)]
    pub max_pages: Option<u32>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            page_delay_ms: default_page_delay_ms(),
            max_pages: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the CSV file written at the end of the run
    #[serde(rename = "csv-path", default = "default_csv_path")]
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            csv_path: default_csv_path(),
        }
    }
}

fn default_origin() -> String {
    "https://www.monshaat.gov.sa".to_string()
}

fn default_directory_url() -> String {
    "https://www.monshaat.gov.sa/ar/business-directory".to_string()
}

fn default_page_delay_ms() -> u64 {
    1000
}

fn default_csv_path() -> String {
    "business_guide_details_all_pages2.csv".to_string()
}
