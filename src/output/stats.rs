//! URL inventory statistics
//!
//! Counts visited URLs per top-level directory, keeping directories in the
//! order they were first seen.

use std::collections::HashMap;

/// Page and PDF counts for one top-level directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryStats {
    pub page_count: u64,
    pub pdf_count: u64,
}

/// Aggregated inventory counts
#[derive(Debug, Clone, Default)]
pub struct InventoryStatistics {
    directories: Vec<(String, DirectoryStats)>,
    index: HashMap<String, usize>,
    total_pages: u64,
    total_pdfs: u64,
}

impl InventoryStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one URL under `directory`
    pub fn record(&mut self, directory: &str, is_pdf: bool) {
        let slot = match self.index.get(directory) {
            Some(&slot) => slot,
            None => {
                self.directories
                    .push((directory.to_string(), DirectoryStats::default()));
                self.index
                    .insert(directory.to_string(), self.directories.len() - 1);
                self.directories.len() - 1
            }
        };

        let stats = &mut self.directories[slot].1;
        stats.page_count += 1;
        self.total_pages += 1;
        if is_pdf {
            stats.pdf_count += 1;
            self.total_pdfs += 1;
        }
    }

    /// Per-directory counts in first-seen order
    pub fn directories(&self) -> impl Iterator<Item = (&str, DirectoryStats)> {
        self.directories
            .iter()
            .map(|(name, stats)| (name.as_str(), *stats))
    }

    /// Counts for one directory, if any URL was recorded under it
    pub fn directory(&self, name: &str) -> Option<DirectoryStats> {
        self.index.get(name).map(|&slot| self.directories[slot].1)
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn total_pdfs(&self) -> u64 {
        self.total_pdfs
    }
}
