//! URL handling for the keyword scraper
//!
//! This module provides the de-duplication key used across a run, href
//! resolution, and the rules that classify anchors as letter or keyword links.

mod matcher;
mod normalize;

pub use matcher::{
    is_keyword_href, is_letter_label, is_letter_link, CATCH_ALL_LABEL, KEYWORD_SECTION_MARKER,
};
pub use normalize::{normalize_url, resolve_href};
