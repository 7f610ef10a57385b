//! Crawl statistics
//!
//! Counters collected while walking the index, reported once the run ends.

/// Counters for a single crawl session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Letter links found on the root index, duplicates included
    pub letter_links: usize,

    /// Letter pages that could not be fetched
    pub letter_pages_failed: usize,

    /// Keyword links kept after de-duplication
    pub keyword_links: usize,

    /// Keyword links skipped because their normalized URL was already seen
    pub duplicate_links: usize,

    /// Keyword pages that could not be fetched
    pub keyword_pages_failed: usize,

    /// Records extracted
    pub records: usize,
}

impl CrawlStats {
    /// Total number of pages that failed to fetch
    pub fn failures(&self) -> usize {
        self.letter_pages_failed + self.keyword_pages_failed
    }

    /// Percentage of kept keyword links that produced a record
    pub fn success_rate(&self) -> f64 {
        if self.keyword_links == 0 {
            return 0.0;
        }
        (self.records as f64 / self.keyword_links as f64) * 100.0
    }
}

/// Logs the statistics at info level
pub fn print_statistics(stats: &CrawlStats) {
    tracing::info!("=== Crawl Statistics ===");
    tracing::info!(
        "Letter pages: {} found, {} failed",
        stats.letter_links,
        stats.letter_pages_failed
    );
    tracing::info!(
        "Keyword pages: {} queued, {} duplicates skipped, {} failed",
        stats.keyword_links,
        stats.duplicate_links,
        stats.keyword_pages_failed
    );
    tracing::info!(
        "Records extracted: {} ({:.2}% of queued keyword pages)",
        stats.records,
        stats.success_rate()
    );
    if stats.failures() > 0 {
        tracing::warn!("{} pages could not be fetched", stats.failures());
    }
}
