/// Path segment shared by the letter pages and the keyword pages
pub const KEYWORD_SECTION_MARKER: &str = "section4/";

/// Label of the catch-all bucket for keywords that do not start with a letter
pub const CATCH_ALL_LABEL: &str = "@";

/// Checks whether an href points into the keyword section
///
/// This is a plain substring test on the raw attribute value, so relative
/// (`section4/abs.html`), root-relative (`/section4/abs.html`) and absolute
/// hrefs all qualify.
pub fn is_keyword_href(href: &str) -> bool {
    href.contains(KEYWORD_SECTION_MARKER)
}

/// Checks whether anchor text names a letter bucket
///
/// Accepts exactly one alphabetic character or the catch-all `@`.
///
/// # Examples
///
/// ```
/// use keyword_scraper::url::is_letter_label;
///
/// assert!(is_letter_label("A"));
/// assert!(is_letter_label("@"));
/// assert!(!is_letter_label("AB"));
/// assert!(!is_letter_label("1"));
/// ```
pub fn is_letter_label(text: &str) -> bool {
    if text == CATCH_ALL_LABEL {
        return true;
    }

    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

/// Checks whether an anchor qualifies as a letter link
///
/// The label must pass [`is_letter_label`] and the href must either point
/// into the keyword section or be a same-page anchor.
pub fn is_letter_link(label: &str, href: &str) -> bool {
    is_letter_label(label) && (is_keyword_href(href) || href.starts_with('#'))
}
