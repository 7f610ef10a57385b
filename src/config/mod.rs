//! Configuration module for the keyword scraper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A missing file is not an error at the CLI level: `Config::default()` points
//! at the public index and the default archive path.
//!
//! # Example
//!
//! ```no_run
//! use keyword_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Scraping index at: {}", config.scraper.index_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, ScraperConfig, UserAgentConfig, DEFAULT_INDEX_URL, DEFAULT_OUTPUT_PATH,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
