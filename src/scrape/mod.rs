//! Scrape module for directory and detail page fetching
//!
//! This module contains the whole pipeline:
//! - HTTP fetching (one sequential GET at a time)
//! - Directory page parsing: card links and the next-page control
//! - Detail page parsing: title, content, and classification
//! - The driver loop that chains directory pages together

mod detail;
mod driver;
mod fetcher;
mod pager;

pub use detail::{
    parse_business_page, scrape_business_details, BusinessRecord, NO_CONTENT, NO_ITEM, NO_TITLE,
};
pub use driver::{scrape_all_pages, Scraper};
pub use fetcher::{build_http_client, fetch_html, FetchError};
pub use pager::{parse_directory_page, scrape_directory_page, PageResult};
