//! Keyword page content extraction
//!
//! Pulls the title, the prose fragments and the code fragments out of one
//! parsed keyword page.

use crate::crawler::document::{collapsed_text, parent_tag, trimmed_text, PageDocument};
use scraper::{ElementRef, Selector};
use serde::{Deserialize, Serialize};

/// Title recorded for pages without a `<title>` element
pub const NO_TITLE: &str = "No title";

/// Elements whose direct children are treated as site chrome, not content
const CHROME_TAGS: &[&str] = &["nav", "header", "footer"];

const TEXT_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p, li";
const CODE_SELECTOR: &str = "pre, code";

/// Content extracted from one keyword page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub url: String,
    pub title: String,
    pub text_content: Vec<String>,
    pub code_blocks: Vec<String>,
}

/// Extracts a [`PageRecord`] from a parsed keyword page
///
/// # Extraction Rules
///
/// - **Title**: trimmed `<title>` text, or `"No title"` when absent
/// - **Text**: `h1`-`h6`, `p` and `li` inside the body, in document order,
///   skipping elements whose direct parent is `nav`, `header` or `footer`
/// - **Code**: `pre` and `code` inside the body, in document order; the
///   chrome exclusion does not apply here and only the ends are trimmed, so
///   line breaks inside a block survive
///
/// Empty fragments are dropped from both lists. A document without a body
/// yields a record with both lists empty.
///
/// # Example
///
/// ```
/// use keyword_scraper::crawler::{extract_page, PageDocument};
///
/// let doc = PageDocument::parse(
///     "<title>ABS()</title><h2>Returns absolute value</h2><pre>? ABS(-5)</pre>",
/// );
/// let record = extract_page(&doc, "https://example.com/section4/abs.html");
/// assert_eq!(record.title, "ABS()");
/// assert_eq!(record.text_content, vec!["Returns absolute value"]);
/// assert_eq!(record.code_blocks, vec!["? ABS(-5)"]);
/// ```
pub fn extract_page(document: &PageDocument, url: &str) -> PageRecord {
    let title = document.title().unwrap_or_else(|| NO_TITLE.to_string());

    let (text_content, code_blocks) = match document.body() {
        Some(body) => (
            select_fragments(body, TEXT_SELECTOR, true, collapsed_text),
            select_fragments(body, CODE_SELECTOR, false, trimmed_text),
        ),
        None => (Vec::new(), Vec::new()),
    };

    PageRecord {
        url: url.to_string(),
        title,
        text_content,
        code_blocks,
    }
}

fn select_fragments(
    root: ElementRef<'_>,
    css: &str,
    skip_chrome: bool,
    text_of: fn(ElementRef<'_>) -> String,
) -> Vec<String> {
    let Ok(selector) = Selector::parse(css) else {
        return Vec::new();
    };

    root.select(&selector)
        .filter(|element| {
            !skip_chrome || !parent_tag(*element).is_some_and(|tag| CHROME_TAGS.contains(&tag))
        })
        .map(text_of)
        .filter(|text| !text.is_empty())
        .collect()
}
