//! Output module for the run archive and crawl statistics
//!
//! This module handles:
//! - Serializing the extracted records into the JSON run archive
//! - Reading an archive back from disk
//! - Reporting crawl statistics

mod archive;
pub mod stats;

pub use archive::{read_archive, write_archive, RunArchive, SCRAPED_DATE_FORMAT};
pub use stats::{print_statistics, CrawlStats};
