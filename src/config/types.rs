use serde::Deserialize;

/// Index page scraped when no configuration overrides it
pub const DEFAULT_INDEX_URL: &str = "https://hackfox.github.io/section4/";

/// Archive written when no configuration overrides it
pub const DEFAULT_OUTPUT_PATH: &str = "vfp_keywords_documentation.json";

/// Main configuration structure for the scraper
///
/// Every table and key is optional; missing values fall back to the
/// built-in defaults so that running without a config file is valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// What to scrape and where to put it
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// Root alphabetical index page
    #[serde(rename = "index-url", default = "default_index_url")]
    pub index_url: String,

    /// Path of the JSON archive to write
    #[serde(rename = "output-path", default = "default_output_path")]
    pub output_path: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            index_url: default_index_url(),
            output_path: default_output_path(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url", default = "default_contact_url")]
    pub contact_url: String,
}

impl UserAgentConfig {
    /// Formats the header value as `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{})",
            self.crawler_name, self.crawler_version, self.contact_url
        )
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
            contact_url: default_contact_url(),
        }
    }
}

fn default_index_url() -> String {
    DEFAULT_INDEX_URL.to_string()
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_crawler_name() -> String {
    "KeywordScraper".to_string()
}

fn default_crawler_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_contact_url() -> String {
    "https://github.com/hackfox/hackfox.github.io".to_string()
}
