//! Output writer traits and types
//!
//! This module defines the records handed from the crawl driver to the output
//! writers, and the trait every writer implements.

use crate::crawler::OcrOutcome;
use crate::url::NormalizedUrl;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while persisting an artifact
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Kind of an extracted content block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Heading of level 1 to 6
    Heading(u8),
    /// List item
    Bullet,
    /// Plain text
    Paragraph,
}

/// One piece of page content, already sanitized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub kind: BlockKind,
    pub text: String,
}

/// Extraction result for one fetched page
///
/// Created per page, handed to the active writer and then dropped.
#[derive(Debug, Clone)]
pub struct PageRecord {
    /// Normalized URL of the page
    pub url: NormalizedUrl,

    /// Sanitized title, `no_title` when missing
    pub title: String,

    /// Meta description, when present
    pub description: Option<String>,

    /// Content blocks in document order
    pub blocks: Vec<ContentBlock>,

    /// Text recognized in images; `None` when recognition is disabled
    pub ocr: Option<OcrOutcome>,

    /// Text of each linked PDF that yielded any
    pub pdf_texts: Vec<String>,

    /// Every resolvable link on the page; scope and site filtering happen later
    pub links: Vec<NormalizedUrl>,
}

/// Trait for output writers
///
/// Writers accumulate records during the crawl and persist a single
/// artifact at the end.
pub trait OutputWriter {
    /// File extension of the artifact, without the dot
    fn extension(&self) -> &'static str;

    /// Persists the accumulated output to `path`
    fn finalize(&self, path: &Path) -> OutputResult<()>;
}
