//! Business detail page scraping
//!
//! A detail page carries three fields of interest: the business title, the
//! free-text description, and the classification ("area item"). Each field
//! is extracted independently; a missing element yields that field's
//! placeholder without affecting the other two.

use crate::scrape::fetcher::fetch_html;
use reqwest::Client;
use scraper::{Html, Selector};

const TITLE_SELECTOR: &str = "h2.app-details-title";
const CONTENT_SELECTOR: &str = "div.app-details-content.mt-3";
const ITEM_SELECTOR: &str = "div.app-details-area-item.area-item";

/// Placeholder used when the title element is absent
pub const NO_TITLE: &str = "No title found";
/// Placeholder used when the content element is absent
pub const NO_CONTENT: &str = "No content found";
/// Placeholder used when the area item element is absent
pub const NO_ITEM: &str = "No item found";

/// One scraped business listing
///
/// All four fields are always populated; missing markup shows up as a
/// placeholder string, never as an empty or omitted field.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessRecord {
    /// Detail page URL the record came from
    pub url: String,
    /// Business title
    pub title: String,
    /// Business description text
    pub content: String,
    /// Business classification ("area item" on the site)
    pub category: String,
}

/// Parses a detail page body into its three text fields
///
/// # Arguments
///
/// * `url` - The detail page URL, recorded on the result
/// * `html` - The detail page HTML
pub fn parse_business_page(url: &str, html: &str) -> BusinessRecord {
    let document = Html::parse_document(html);

    BusinessRecord {
        url: url.to_string(),
        title: select_text(&document, TITLE_SELECTOR, NO_TITLE),
        content: select_text(&document, CONTENT_SELECTOR, NO_CONTENT),
        category: select_text(&document, ITEM_SELECTOR, NO_ITEM),
    }
}

/// Returns the trimmed text of the first element matching `selector`,
/// or `placeholder` when nothing matches
fn select_text(document: &Html, selector: &str, placeholder: &str) -> String {
    Selector::parse(selector)
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Fetches one detail page and extracts its record
///
/// A fetch failure (non-success status or transport error) is logged and
/// yields `None`; the caller skips this listing and continues. Parsing
/// never fails: absent elements become placeholders.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The detail page URL
pub async fn scrape_business_details(client: &Client, url: &str) -> Option<BusinessRecord> {
    match fetch_html(client, url).await {
        Ok(body) => Some(parse_business_page(url, &body)),
        Err(e) => {
            tracing::error!("Failed to retrieve the business page {}: {}", url, e);
            None
        }
    }
}
