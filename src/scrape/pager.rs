//! Directory page scraping
//!
//! A directory page holds a grid of business guide cards plus a pagination
//! control. This module extracts the card links (absolutized against the
//! site origin) and the next-page href, if any.

use crate::scrape::fetcher::fetch_html;
use reqwest::Client;
use scraper::{Html, Selector};

/// Anchor class used by the site for business guide cards.
/// The misspelling is the site's own.
const CARD_SELECTOR: &str = "a.bussiness-guide-card-link";

/// The "next page" pagination anchor
const NEXT_PAGE_SELECTOR: &str = r#"a.button.btn.btn-primary.text-white[rel="next"]"#;

/// Links extracted from one directory page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageResult {
    /// Absolute URLs of the business detail pages, in document order
    pub listings: Vec<String>,

    /// Href of the next-page control, verbatim (e.g. "?page=2"),
    /// or None when this is the last page
    pub next_page: Option<String>,
}

/// Parses a directory page body into listing links and the next-page href
///
/// Card hrefs on the site are origin-relative paths, so each is absolutized
/// by prefixing `origin`. The next-page href is returned exactly as it
/// appears in the document; the driver appends it to the directory URL.
///
/// # Arguments
///
/// * `html` - The directory page HTML
/// * `origin` - Site origin prefixed to card hrefs (no trailing slash)
pub fn parse_directory_page(html: &str, origin: &str) -> PageResult {
    let document = Html::parse_document(html);

    let mut listings = Vec::new();
    if let Ok(card_selector) = Selector::parse(CARD_SELECTOR) {
        for element in document.select(&card_selector) {
            if let Some(href) = element.value().attr("href") {
                listings.push(format!("{}{}", origin, href));
            }
        }
    }

    let next_page = Selector::parse(NEXT_PAGE_SELECTOR)
        .ok()
        .and_then(|selector| {
            document
                .select(&selector)
                .next()
                .and_then(|element| element.value().attr("href"))
                .map(|href| href.to_string())
        });

    PageResult { listings, next_page }
}

/// Fetches one directory page and extracts its links
///
/// Fetch failures stop pagination but never the run: a non-success status
/// or transport error is logged and an empty result (no listings, no next
/// page) is returned.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The directory page URL
/// * `origin` - Site origin prefixed to card hrefs
pub async fn scrape_directory_page(client: &Client, url: &str, origin: &str) -> PageResult {
    match fetch_html(client, url).await {
        Ok(body) => parse_directory_page(&body, origin),
        Err(e) => {
            tracing::error!("Failed to retrieve the page {}: {}", url, e);
            PageResult::default()
        }
    }
}
