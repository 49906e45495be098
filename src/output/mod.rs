//! Output module for crawl artifacts
//!
//! This module handles:
//! - Rendering page records into a single Word document (document mode)
//! - Writing the URL inventory CSV report (listing mode)
//! - Naming and creating artifact files

mod document;
mod listing;
pub mod stats;
mod traits;

pub use document::{
    DocElement, DocumentWriter, DESCRIPTION_LABEL, OCR_SECTION_HEADING, OCR_UNAVAILABLE_NOTE,
    PDF_SECTION_HEADING,
};
pub use listing::{top_directory, InventoryRow, InventoryWriter};
pub use stats::{DirectoryStats, InventoryStatistics};
pub use traits::{BlockKind, ContentBlock, OutputError, OutputResult, OutputWriter, PageRecord};

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// File name prefix of document exports
pub const DOCUMENT_PREFIX: &str = "scraped";

/// File name prefix of URL inventories
pub const INVENTORY_PREFIX: &str = "all_urls";

/// Builds a timestamped artifact path inside `directory`
///
/// # Example
///
/// ```
/// use chrono::{Local, TimeZone};
/// use sitescribe::output::artifact_path;
/// use std::path::Path;
///
/// let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
/// let path = artifact_path(Path::new("outputs"), "scraped", "docx", at);
/// assert_eq!(path, Path::new("outputs/scraped_20240309_140507.docx"));
/// ```
pub fn artifact_path(
    directory: &Path,
    prefix: &str,
    extension: &str,
    at: DateTime<Local>,
) -> PathBuf {
    directory.join(format!(
        "{}_{}.{}",
        prefix,
        at.format("%Y%m%d_%H%M%S"),
        extension
    ))
}

/// Persists a writer's artifact, creating the parent directory if missing
pub fn write_artifact<W: OutputWriter + ?Sized>(writer: &W, path: &Path) -> OutputResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    writer.finalize(path)
}
