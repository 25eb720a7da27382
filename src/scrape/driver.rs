//! Scrape driver - walks the pagination chain and collects records
//!
//! The driver is the only orchestration in the crate: it follows the
//! directory's next-page chain, hands every discovered listing to the
//! detail fetcher, and accumulates records in discovery order. All fetch
//! failures are absorbed below this level, so the loop itself cannot fail.

use crate::config::Config;
use crate::scrape::detail::{scrape_business_details, BusinessRecord};
use crate::scrape::fetcher::build_http_client;
use crate::scrape::pager::scrape_directory_page;
use crate::DalilError;
use reqwest::Client;
use std::time::Duration;

/// Sequential scraper over the business directory
pub struct Scraper {
    config: Config,
    client: Client,
}

impl Scraper {
    /// Creates a new scraper from a validated configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Scraper)` - Ready to run
    /// * `Err(DalilError)` - Failed to build the HTTP client
    pub fn new(config: Config) -> Result<Self, DalilError> {
        let client = build_http_client()?;
        Ok(Self { config, client })
    }

    /// Runs the scrape and returns all records in discovery order
    ///
    /// Follows the pagination chain from the configured directory URL until
    /// no next-page control is found (or the optional max-pages cap is hit),
    /// pausing between pages to avoid hammering the server. One request is
    /// in flight at any time; page and detail failures are logged and
    /// skipped, so whatever was collected up to that point is still
    /// returned.
    pub async fn run(&self) -> Vec<BusinessRecord> {
        let mut records = Vec::new();
        let mut current_url = Some(self.config.site.directory_url.clone());
        let mut page_number: u32 = 0;
        let mut pages_visited: u32 = 0;

        while let Some(url) = current_url.take() {
            tracing::info!("Scraping page {}: {}", page_number, url);
            pages_visited += 1;

            let page = scrape_directory_page(&self.client, &url, &self.config.site.origin).await;
            tracing::info!("Found {} business links on this page", page.listings.len());

            for link in &page.listings {
                tracing::info!("Scraping details for {}", link);
                if let Some(record) = scrape_business_details(&self.client, link).await {
                    records.push(record);
                }
            }

            let next_page = match page.next_page {
                Some(fragment) => fragment,
                None => break,
            };

            page_number += 1;
            if let Some(max_pages) = self.config.scrape.max_pages {
                if page_number >= max_pages {
                    tracing::warn!(
                        "Reached max-pages cap of {}, stopping pagination",
                        max_pages
                    );
                    break;
                }
            }

            // Next-page hrefs are fragments like "?page=2", appended to the
            // fixed directory URL rather than the current page URL
            current_url = Some(format!(
                "{}{}",
                self.config.site.directory_url, next_page
            ));

            tokio::time::sleep(Duration::from_millis(self.config.scrape.page_delay_ms)).await;
        }

        tracing::info!(
            "Scrape finished: {} businesses collected from {} page(s)",
            records.len(),
            pages_visited
        );

        records
    }
}

/// Runs a complete scrape with the given configuration
///
/// Convenience wrapper that builds the scraper and runs it to completion.
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(Vec<BusinessRecord>)` - All collected records in discovery order
/// * `Err(DalilError)` - Failed to construct the HTTP client
pub async fn scrape_all_pages(config: Config) -> Result<Vec<BusinessRecord>, DalilError> {
    let scraper = Scraper::new(config)?;
    Ok(scraper.run().await)
}
