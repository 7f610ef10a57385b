//! Parsed HTML documents
//!
//! Wraps a `scraper::Html` tree with the handful of queries the scraper needs:
//! anchors with their labels, the title, the body root, whitespace-collapsed
//! text, and explicit parent/ancestor lookups over the node tree.

use scraper::{ElementRef, Html, Selector};

/// An `<a href>` element found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Visible text, whitespace-collapsed and trimmed
    pub label: String,
    /// Raw `href` attribute value
    pub href: String,
}

/// A parsed HTML page
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    /// Parses an HTML string
    ///
    /// html5ever recovers from malformed markup, so parsing never fails.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Returns the trimmed text of the first `<title>` element, if any
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
    }

    /// Returns the `<body>` element, if the tree has one
    pub fn body(&self) -> Option<ElementRef<'_>> {
        let selector = Selector::parse("body").ok()?;
        self.html.select(&selector).next()
    }

    /// Returns every `<a href>` in document order
    pub fn anchors(&self) -> Vec<Anchor> {
        let Ok(selector) = Selector::parse("a[href]") else {
            return Vec::new();
        };

        self.html
            .select(&selector)
            .filter_map(|element| {
                element.value().attr("href").map(|href| Anchor {
                    label: collapsed_text(element),
                    href: href.to_string(),
                })
            })
            .collect()
    }

    /// Returns the underlying tree for selector queries
    pub fn html(&self) -> &Html {
        &self.html
    }
}

/// Collects an element's visible text with whitespace runs collapsed
///
/// Text nodes are concatenated as-is, then every run of whitespace becomes a
/// single space and the result is trimmed.
pub fn collapsed_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collects an element's visible text, trimming only the ends
///
/// Inner line breaks and indentation are kept, which matters for `<pre>`.
pub fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Returns the tag name of the element's immediate parent element
pub fn parent_tag<'a>(element: ElementRef<'a>) -> Option<&'a str> {
    ancestor_tags(element, Some(1)).into_iter().next()
}

/// Returns the tag names of the element's ancestors, nearest first
///
/// `depth` bounds how far up the chain to look; `None` walks to the root.
pub fn ancestor_tags<'a>(element: ElementRef<'a>, depth: Option<usize>) -> Vec<&'a str> {
    element
        .ancestors()
        .filter_map(|node| node.value().as_element().map(|e| e.name()))
        .take(depth.unwrap_or(usize::MAX))
        .collect()
}
