//! Integration test harness root

mod scrape_tests;
