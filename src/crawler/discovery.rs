//! Link discovery on index and letter pages
//!
//! The index page yields letter links, each letter page yields keyword links.
//! Keyword links are de-duplicated across the whole run through a
//! [`VisitedSet`]; letter links are not de-duplicated at all.

use crate::crawler::document::PageDocument;
use crate::url::{is_keyword_href, is_letter_link, normalize_url, resolve_href};
use std::collections::HashSet;
use url::Url;

/// A per-letter index page found on the root index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterLink {
    /// A single alphabetic character or `@`
    pub letter: String,
    pub url: Url,
}

/// A keyword page found on a letter page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordLink {
    pub label: String,
    pub url: Url,
}

/// Normalized URLs already claimed by a keyword link during this run
#[derive(Debug, Default)]
pub struct VisitedSet {
    keys: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the URL's normalized form
    ///
    /// Returns false if an equivalent URL was recorded before.
    pub fn insert(&mut self, url: &Url) -> bool {
        self.keys.insert(normalize_url(url))
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.keys.contains(&normalize_url(url))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Result of scanning one letter page
#[derive(Debug, Default)]
pub struct KeywordScan {
    /// Newly claimed keyword links, in document order
    pub links: Vec<KeywordLink>,
    /// Links skipped because their normalized URL was already visited
    pub duplicates: usize,
}

/// Finds letter links on the root index page
///
/// Hrefs are resolved against `index_url`. Document order is kept and
/// repeated letters are returned as many times as they appear.
pub fn discover_letter_links(document: &PageDocument, index_url: &Url) -> Vec<LetterLink> {
    document
        .anchors()
        .into_iter()
        .filter(|anchor| is_letter_link(&anchor.label, &anchor.href))
        .filter_map(|anchor| {
            resolve_href(index_url, &anchor.href).map(|url| LetterLink {
                letter: anchor.label,
                url,
            })
        })
        .collect()
}

/// Finds keyword links on a letter page
///
/// Hrefs are resolved against the letter page's own URL. Each link whose
/// normalized URL is new is claimed in `visited` and returned; the rest are
/// counted as duplicates.
pub fn discover_keyword_links(
    document: &PageDocument,
    letter_url: &Url,
    visited: &mut VisitedSet,
) -> KeywordScan {
    let mut scan = KeywordScan::default();

    for anchor in document.anchors() {
        if !is_keyword_href(&anchor.href) {
            continue;
        }

        let Some(url) = resolve_href(letter_url, &anchor.href) else {
            continue;
        };

        if !visited.insert(&url) {
            tracing::debug!("Skipping already visited keyword page: {}", url);
            scan.duplicates += 1;
            continue;
        }

        scan.links.push(KeywordLink {
            label: anchor.label,
            url,
        });
    }

    scan
}
