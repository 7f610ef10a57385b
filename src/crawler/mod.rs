//! Crawler module for fetching and processing documentation pages
//!
//! This module contains the scraping pipeline:
//! - HTTP fetching with a bounded timeout and no retries
//! - HTML parsing with parent-chain queries
//! - Letter and keyword link discovery with run-wide de-duplication
//! - Keyword page content extraction
//! - The crawl session tying these together

mod discovery;
mod document;
mod extractor;
mod fetcher;
mod session;

pub use discovery::{
    discover_keyword_links, discover_letter_links, KeywordLink, KeywordScan, LetterLink,
    VisitedSet,
};
pub use document::{
    ancestor_tags, collapsed_text, parent_tag, trimmed_text, Anchor, PageDocument,
};
pub use extractor::{extract_page, PageRecord, NO_TITLE};
pub use fetcher::{build_http_client, fetch_document, fetch_page, REQUEST_TIMEOUT};
pub use session::{run_scrape, CrawlSession, REQUEST_DELAY};
