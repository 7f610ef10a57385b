//! Crawl session - the two-level index walk
//!
//! A [`CrawlSession`] owns everything that lives for one run: the HTTP
//! client, the visited set, the accumulated records and the statistics.
//! Requests are issued strictly one at a time with a fixed pause after each
//! letter or keyword page fetch.

use crate::config::Config;
use crate::crawler::discovery::{
    discover_keyword_links, discover_letter_links, KeywordLink, LetterLink, VisitedSet,
};
use crate::crawler::extractor::{extract_page, PageRecord};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::output::{write_archive, CrawlStats, RunArchive};
use crate::ScrapeError;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Pause after every letter and keyword page fetch
pub const REQUEST_DELAY: Duration = Duration::from_secs(1);

/// State for a single scrape run
pub struct CrawlSession {
    client: Client,
    request_delay: Duration,
    visited: VisitedSet,
    records: Vec<PageRecord>,
    stats: CrawlStats,
}

impl CrawlSession {
    /// Creates a session with a client built from the configuration
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        let client = build_http_client(&config.user_agent)?;
        Ok(Self::with_client(client))
    }

    /// Creates a session around an existing HTTP client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            request_delay: REQUEST_DELAY,
            visited: VisitedSet::new(),
            records: Vec::new(),
            stats: CrawlStats::default(),
        }
    }

    /// Overrides the politeness pause (test servers only)
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    pub fn request_delay(&self) -> Duration {
        self.request_delay
    }

    pub fn stats(&self) -> &CrawlStats {
        &self.stats
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Walks the index rooted at `index_url` and returns every extracted record
    ///
    /// Records are ordered by letter discovery order, then by keyword
    /// document order within each letter page. Failed pages are logged and
    /// skipped; an unreachable index page yields an empty result.
    pub async fn walk(&mut self, index_url: &Url) -> Vec<PageRecord> {
        tracing::info!("Scraping alphabetical index at {}", index_url);

        let Some(index) = fetch_page(&self.client, index_url).await else {
            tracing::error!("Failed to fetch the index page {}", index_url);
            return std::mem::take(&mut self.records);
        };

        let letters = discover_letter_links(&index, index_url);
        self.stats.letter_links += letters.len();
        tracing::info!("Found {} letter index links", letters.len());

        for letter in &letters {
            self.scrape_letter_page(letter).await;
        }

        tracing::info!(
            "Walk finished: {} keyword pages scraped, {} unique keyword URLs seen",
            self.records.len(),
            self.visited.len()
        );

        std::mem::take(&mut self.records)
    }

    async fn scrape_letter_page(&mut self, letter: &LetterLink) {
        tracing::info!("Scraping '{}' index at {}", letter.letter, letter.url);

        let document = fetch_page(&self.client, &letter.url).await;
        self.pause().await;

        let Some(document) = document else {
            tracing::warn!(
                "Failed to fetch the letter page for '{}'. Skipping.",
                letter.letter
            );
            self.stats.letter_pages_failed += 1;
            return;
        };

        let scan = discover_keyword_links(&document, &letter.url, &mut self.visited);
        self.stats.keyword_links += scan.links.len();
        self.stats.duplicate_links += scan.duplicates;
        tracing::info!(
            "Found {} keyword links for '{}' ({} already visited)",
            scan.links.len(),
            letter.letter,
            scan.duplicates
        );

        for keyword in &scan.links {
            self.scrape_keyword_page(keyword).await;
        }
    }

    async fn scrape_keyword_page(&mut self, keyword: &KeywordLink) {
        tracing::info!("Processing keyword: {}", keyword.label);

        let document = fetch_page(&self.client, &keyword.url).await;
        self.pause().await;

        match document {
            Some(document) => {
                let record = extract_page(&document, keyword.url.as_str());
                tracing::debug!(
                    "Extracted '{}': {} text fragments, {} code blocks",
                    record.title,
                    record.text_content.len(),
                    record.code_blocks.len()
                );
                self.records.push(record);
                self.stats.records += 1;
            }
            None => self.stats.keyword_pages_failed += 1,
        }
    }

    async fn pause(&self) {
        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }
    }
}

/// Runs a complete scrape: walk the configured index, then write the archive
///
/// Fetch failures never abort the run. A failure to write the archive is
/// returned to the caller.
///
/// # Example
///
/// ```no_run
/// use keyword_scraper::config::Config;
/// use keyword_scraper::crawler::run_scrape;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let archive = run_scrape(&Config::default()).await?;
/// println!("Scraped {} keyword pages", archive.total_keywords);
/// # Ok(())
/// # }
/// ```
pub async fn run_scrape(config: &Config) -> Result<RunArchive, ScrapeError> {
    let index_url = Url::parse(&config.scraper.index_url)?;
    let mut session = CrawlSession::new(config)?;

    tracing::info!("Starting to scrape documentation from {}", index_url);
    let records = session.walk(&index_url).await;
    crate::output::print_statistics(session.stats());

    let output_path = Path::new(&config.scraper.output_path);
    let archive = write_archive(index_url.as_str(), records, output_path)?;
    tracing::info!(
        "Scraping complete. Scraped {} keyword pages.",
        archive.total_keywords
    );

    Ok(archive)
}
