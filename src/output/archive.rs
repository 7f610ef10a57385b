//! JSON run archive
//!
//! The archive is the single artifact of a run: the root index URL, the
//! record count, the time it was written and every extracted record.

use crate::crawler::PageRecord;
use crate::ScrapeError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// `strftime` pattern of the `scraped_date` field
pub const SCRAPED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The consolidated result of a scrape run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunArchive {
    pub base_url: String,
    pub total_keywords: usize,
    pub scraped_date: String,
    pub results: Vec<PageRecord>,
}

impl RunArchive {
    /// Builds an archive stamped with the current local time
    pub fn new(base_url: &str, results: Vec<PageRecord>) -> Self {
        Self {
            base_url: base_url.to_string(),
            total_keywords: results.len(),
            scraped_date: chrono::Local::now().format(SCRAPED_DATE_FORMAT).to_string(),
            results,
        }
    }
}

/// Writes the run archive as pretty-printed JSON
///
/// The destination directory is created if needed and any existing file is
/// replaced. The JSON is first written to a hidden sibling file and then
/// renamed into place, so a failed write leaves no partial archive behind.
///
/// # Arguments
///
/// * `base_url` - The root index URL the records were scraped from
/// * `records` - Extracted records, in discovery order
/// * `path` - Destination of the archive
///
/// # Returns
///
/// * `Ok(RunArchive)` - The archive that was written
/// * `Err(ScrapeError)` - Serialization or filesystem failure
pub fn write_archive(
    base_url: &str,
    records: Vec<PageRecord>,
    path: &Path,
) -> Result<RunArchive, ScrapeError> {
    let archive = RunArchive::new(base_url, records);
    tracing::info!(
        "Saving {} keyword pages to {}",
        archive.total_keywords,
        path.display()
    );

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&archive)?;
    let staging = staging_path(path);

    if let Err(e) = fs::write(&staging, json).and_then(|()| fs::rename(&staging, path)) {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }

    tracing::info!("Data successfully saved to {}", path.display());
    Ok(archive)
}

/// Reads a run archive back from disk
pub fn read_archive(path: &Path) -> Result<RunArchive, ScrapeError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "archive".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}
