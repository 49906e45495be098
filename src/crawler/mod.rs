//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with charset detection
//! - HTML content and link extraction
//! - Optional image text recognition and PDF text extraction
//! - The LIFO frontier and visited set
//! - Overall crawl coordination for both output modes

mod coordinator;
mod extract;
mod fetcher;
mod frontier;
mod media;
mod sanitize;

pub use coordinator::{
    run_document_crawl, run_document_crawl_to, run_listing_crawl, run_listing_crawl_to, Crawler,
};
pub use extract::{extract_links, extract_page, ExtractError, PageContent};
pub use fetcher::{build_http_client, decode_body, fetch_bytes, fetch_page, FetchError, FetchedPage};
pub use frontier::{Frontier, FrontierEntry};
pub use media::{
    extract_pdf_text, MediaError, MediaExtractor, OcrOutcome, TesseractOcr, OCR_LANGUAGES,
    TESSERACT_BINARY,
};
pub use sanitize::{clean_text, sanitize_title, NO_TITLE};
