use url::Url;

/// Reduces a URL to its de-duplication key: host, optional port and path
///
/// # Normalization Steps
///
/// 1. Drop the scheme (`http` and `https` collapse to one key)
/// 2. Keep the host (already lowercased by the `url` parser) and any
///    explicit port
/// 3. Keep the path exactly as resolved, dot segments already removed
/// 4. Drop the query string and the fragment
///
/// # Examples
///
/// ```
/// use keyword_scraper::url::normalize_url;
/// use url::Url;
///
/// let url = Url::parse("https://Docs.Example.com/section4/abs.html?x=1#top").unwrap();
/// assert_eq!(normalize_url(&url), "docs.example.com/section4/abs.html");
/// ```
pub fn normalize_url(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}{}", host, port, url.path()),
        None => format!("{}{}", host, url.path()),
    }
}

/// Resolves an href against the page it was found on
///
/// Returns None when the href cannot be joined onto the base URL.
pub fn resolve_href(base: &Url, href: &str) -> Option<Url> {
    match base.join(href.trim()) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::debug!("Skipping unresolvable href '{}' on {}: {}", href, base, e);
            None
        }
    }
}
