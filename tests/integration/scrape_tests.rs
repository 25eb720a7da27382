//! Integration tests for the scraper
//!
//! These tests use wiremock to stand in for the directory site and test
//! the full scrape cycle end-to-end, down to the CSV file.

use dalil::config::Config;
use dalil::output::write_records;
use dalil::scrape::{Scraper, NO_CONTENT, NO_ITEM, NO_TITLE};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DIRECTORY_PATH: &str = "/ar/business-directory";

/// Creates a test configuration pointed at the mock server
fn create_test_config(server_uri: &str) -> Config {
    let mut config = Config::default();
    config.site.origin = server_uri.to_string();
    config.site.directory_url = format!("{}{}", server_uri, DIRECTORY_PATH);
    config.scrape.page_delay_ms = 10; // Very short for testing
    config
}

/// A directory page body with the given card hrefs and optional next fragment
fn directory_page(card_hrefs: &[&str], next: Option<&str>) -> String {
    let mut body = String::from("<html><body>");
    for href in card_hrefs {
        body.push_str(&format!(
            r#"<a class="bussiness-guide-card-link" href="{}">card</a>"#,
            href
        ));
    }
    if let Some(fragment) = next {
        body.push_str(&format!(
            r#"<a class="button btn btn-primary text-white" rel="next" href="{}">Next</a>"#,
            fragment
        ));
    }
    body.push_str("</body></html>");
    body
}

/// A detail page body with all three fields present
fn detail_page(title: &str, content: &str, item: &str) -> String {
    format!(
        r#"<html><body>
        <h2 class="app-details-title">{}</h2>
        <div class="app-details-content mt-3">{}</div>
        <div class="app-details-area-item area-item">{}</div>
        </body></html>"#,
        title, content, item
    )
}

async fn mount_detail(server: &MockServer, url_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_scrape_two_pages() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();

    // Page 2 mounted before page 1: the page-1 mock matches any query,
    // so the more specific mock has to come first
    Mock::given(method("GET"))
        .and(path(DIRECTORY_PATH))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(directory_page(
            &["/ar/business-directory/gamma"],
            None,
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(DIRECTORY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(directory_page(
            &["/ar/business-directory/alpha", "/ar/business-directory/beta"],
            Some("?page=2"),
        )))
        .mount(&mock_server)
        .await;

    mount_detail(
        &mock_server,
        "/ar/business-directory/alpha",
        detail_page("Alpha Trading", "Wholesale goods", "Riyadh"),
    )
    .await;
    mount_detail(
        &mock_server,
        "/ar/business-directory/beta",
        detail_page("Beta Foods", "Restaurants", "Jeddah"),
    )
    .await;
    mount_detail(
        &mock_server,
        "/ar/business-directory/gamma",
        detail_page("Gamma Tech", "Software services", "Dammam"),
    )
    .await;

    let scraper = Scraper::new(create_test_config(&uri)).expect("Failed to create scraper");
    let records = scraper.run().await;

    // 2 listings on page 1 + 1 on page 2, in discovery order
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].title, "Alpha Trading");
    assert_eq!(records[0].url, format!("{}/ar/business-directory/alpha", uri));
    assert_eq!(records[1].title, "Beta Foods");
    assert_eq!(records[2].title, "Gamma Tech");
    assert_eq!(records[2].category, "Dammam");

    // Write the CSV and verify the numbered rows
    let file = tempfile::NamedTempFile::new().unwrap();
    write_records(file.path(), &records).unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with("Business Number,URL,Title,Content,Class"));
    assert!(lines[1].starts_with('1'));
    assert!(lines[2].starts_with('2'));
    assert!(lines[3].starts_with('3'));
    assert!(lines[3].contains("Gamma Tech"));
}

#[tokio::test]
async fn test_detail_404_skips_one_record() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();

    Mock::given(method("GET"))
        .and(path(DIRECTORY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(directory_page(
            &["/ar/business-directory/alpha", "/ar/business-directory/gone"],
            None,
        )))
        .mount(&mock_server)
        .await;

    mount_detail(
        &mock_server,
        "/ar/business-directory/alpha",
        detail_page("Alpha Trading", "Wholesale goods", "Riyadh"),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/ar/business-directory/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(create_test_config(&uri)).expect("Failed to create scraper");
    let records = scraper.run().await;

    // One fewer record than links discovered; the run still completes
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Alpha Trading");
}

#[tokio::test]
async fn test_directory_failure_yields_header_only_csv() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();

    Mock::given(method("GET"))
        .and(path(DIRECTORY_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(create_test_config(&uri)).expect("Failed to create scraper");
    let records = scraper.run().await;
    assert!(records.is_empty());

    let file = tempfile::NamedTempFile::new().unwrap();
    write_records(file.path(), &records).unwrap();

    let bytes = std::fs::read(file.path()).unwrap();
    assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert_eq!(text.lines().count(), 1);
}

#[tokio::test]
async fn test_missing_detail_elements_become_placeholders() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();

    Mock::given(method("GET"))
        .and(path(DIRECTORY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(directory_page(
            &["/ar/business-directory/sparse"],
            None,
        )))
        .mount(&mock_server)
        .await;

    // Only the title is present on the detail page
    mount_detail(
        &mock_server,
        "/ar/business-directory/sparse",
        r#"<html><body><h2 class="app-details-title">Sparse Co</h2></body></html>"#.to_string(),
    )
    .await;

    let scraper = Scraper::new(create_test_config(&uri)).expect("Failed to create scraper");
    let records = scraper.run().await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Sparse Co");
    assert_eq!(records[0].content, NO_CONTENT);
    assert_eq!(records[0].category, NO_ITEM);
    assert_ne!(records[0].title, NO_TITLE);
}

#[tokio::test]
async fn test_max_pages_cap_stops_pagination() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();

    // Every page advertises a next page; without the cap this would loop
    // until the mock server ran out of distinct pages
    Mock::given(method("GET"))
        .and(path(DIRECTORY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(directory_page(
            &["/ar/business-directory/alpha"],
            Some("?page=2"),
        )))
        .mount(&mock_server)
        .await;

    mount_detail(
        &mock_server,
        "/ar/business-directory/alpha",
        detail_page("Alpha Trading", "Wholesale goods", "Riyadh"),
    )
    .await;

    let mut config = create_test_config(&uri);
    config.scrape.max_pages = Some(2);

    let scraper = Scraper::new(config).expect("Failed to create scraper");
    let records = scraper.run().await;

    // Two pages visited, one listing each
    assert_eq!(records.len(), 2);
}
