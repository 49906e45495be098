//! Crawl frontier and visited set for one run
//!
//! The frontier is a LIFO stack: the most recently discovered link is visited
//! next. It may hold the same URL more than once; duplicates are dropped when
//! popped, since a URL is marked visited the moment it leaves the stack.

use crate::url::{normalize_url, should_visit, NormalizedUrl};
use crate::UrlError;
use std::collections::HashSet;
use url::Url;

/// A URL taken off the frontier
///
/// `request` is the entry exactly as it was pushed; it is what gets fetched
/// and what relative links resolve against. `url` is its normalized identity.
#[derive(Debug, Clone)]
pub struct FrontierEntry {
    pub request: Url,
    pub url: NormalizedUrl,
}

/// Work list and visited set owned by a single crawl
#[derive(Debug)]
pub struct Frontier {
    stack: Vec<String>,
    visited: HashSet<NormalizedUrl>,
    authority: String,
    exclude: Vec<String>,
    include: Vec<String>,
}

impl Frontier {
    /// Seeds the frontier with the raw start URL
    ///
    /// Fails when the start URL cannot be normalized.
    pub fn new(start_url: &str, exclude: &[String], include: &[String]) -> Result<Self, UrlError> {
        let start = normalize_url(start_url)?;

        Ok(Self {
            stack: vec![start_url.to_string()],
            visited: HashSet::new(),
            authority: start.authority().to_string(),
            exclude: exclude.to_vec(),
            include: include.to_vec(),
        })
    }

    /// Pops the next unvisited entry and marks it visited
    pub fn next(&mut self) -> Option<FrontierEntry> {
        while let Some(raw) = self.stack.pop() {
            let parsed = Url::parse(&raw)
                .map_err(|e| UrlError::Parse(format!("{}: {}", raw, e)))
                .and_then(|request| NormalizedUrl::from_url(&request).map(|url| (request, url)));

            let (request, url) = match parsed {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Dropping unparseable frontier entry {}: {}", raw, e);
                    continue;
                }
            };

            if self.visited.contains(&url) {
                tracing::debug!("Already visited {}", url);
                continue;
            }

            self.visited.insert(url.clone());
            return Some(FrontierEntry { request, url });
        }

        None
    }

    /// Pushes every link that is same-authority, unvisited and in scope
    ///
    /// With `allow_pdf` unset, links ending in `.pdf` are left out. Returns the
    /// number of links pushed.
    pub fn discover<'a, I>(&mut self, links: I, allow_pdf: bool) -> usize
    where
        I: IntoIterator<Item = &'a NormalizedUrl>,
    {
        let mut pushed = 0;
        for link in links {
            if link.authority() != self.authority {
                tracing::debug!("Off-site link {}", link);
                continue;
            }
            if self.visited.contains(link) {
                continue;
            }
            if !should_visit(link, &self.exclude, &self.include) {
                tracing::debug!("Out of scope {}", link);
                continue;
            }
            if !allow_pdf && link.is_pdf() {
                continue;
            }

            self.stack.push(link.as_str().to_string());
            pushed += 1;
        }
        pushed
    }

    /// Number of pending entries, duplicates included
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn is_visited(&self, url: &NormalizedUrl) -> bool {
        self.visited.contains(url)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
