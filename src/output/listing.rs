//! URL inventory export
//!
//! Listing mode records a row per visited URL and writes a CSV report made
//! of three blocks: the rows, per-directory counts and grand totals. Blocks
//! are separated by a blank line.

use crate::output::stats::InventoryStatistics;
use crate::output::traits::{OutputResult, OutputWriter};
use crate::url::NormalizedUrl;
use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One visited URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRow {
    pub url: String,
    pub directory: String,
    pub is_pdf: bool,
}

/// Returns the top-level directory of a URL path
///
/// `/a/b/c` maps to `/a/`; the empty path and `/` map to `/`.
pub fn top_directory(path: &str) -> String {
    match path.trim_matches('/').split('/').next() {
        Some(first) if !first.is_empty() => format!("/{}/", first),
        _ => "/".to_string(),
    }
}

/// Accumulates the URL inventory of a listing run
#[derive(Debug, Default)]
pub struct InventoryWriter {
    rows: Vec<InventoryRow>,
    stats: InventoryStatistics,
}

impl InventoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a visited URL
    pub fn record_url(&mut self, url: &NormalizedUrl) {
        let directory = top_directory(url.path());
        let is_pdf = url.is_pdf();

        self.stats.record(&directory, is_pdf);
        self.rows.push(InventoryRow {
            url: url.as_str().to_string(),
            directory,
            is_pdf,
        });
    }

    pub fn rows(&self) -> &[InventoryRow] {
        &self.rows
    }

    pub fn statistics(&self) -> &InventoryStatistics {
        &self.stats
    }

    /// Writes the three CSV blocks to `out`
    pub fn write_csv<W: Write>(&self, mut out: W) -> OutputResult<()> {
        {
            let mut block = csv_block(&mut out);
            block.write_record(["url", "directory", "is_pdf"])?;
            for row in &self.rows {
                block.write_record([
                    row.url.as_str(),
                    row.directory.as_str(),
                    if row.is_pdf { "1" } else { "0" },
                ])?;
            }
            block.flush()?;
        }
        out.write_all(b"\r\n")?;

        {
            let mut block = csv_block(&mut out);
            block.write_record(["directory", "page_count", "pdf_count"])?;
            for (name, dir) in self.stats.directories() {
                block.write_record([
                    name.to_string(),
                    dir.page_count.to_string(),
                    dir.pdf_count.to_string(),
                ])?;
            }
            block.flush()?;
        }
        out.write_all(b"\r\n")?;

        {
            let mut block = csv_block(&mut out);
            block.write_record(["total_pages", "total_pdfs"])?;
            block.write_record([
                self.stats.total_pages().to_string(),
                self.stats.total_pdfs().to_string(),
            ])?;
            block.flush()?;
        }

        out.flush()?;
        Ok(())
    }
}

fn csv_block<W: Write>(out: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(out)
}

impl OutputWriter for InventoryWriter {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn finalize(&self, path: &Path) -> OutputResult<()> {
        let file = File::create(path)?;
        self.write_csv(BufWriter::new(file))?;

        tracing::info!(
            "Wrote inventory of {} URLs ({} PDF) to {}",
            self.stats.total_pages(),
            self.stats.total_pdfs(),
            path.display()
        );
        Ok(())
    }
}
