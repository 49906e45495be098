//! URL handling module for SiteScribe
//!
//! This module provides URL normalization, relative link resolution and the
//! include/exclude scope filter.

mod normalize;
mod scope;

// Re-export main functions
pub use normalize::{normalize_url, resolve_url, NormalizedUrl};
pub use scope::{path_in_scope, should_visit};

/// Returns true if the raw href or URL ends in `.pdf`, ignoring case
pub fn is_pdf_link(href: &str) -> bool {
    href.to_ascii_lowercase().ends_with(".pdf")
}

/// Returns true if the raw image URL ends in `.svg`, ignoring case
pub fn is_svg_link(href: &str) -> bool {
    href.to_ascii_lowercase().ends_with(".svg")
}
