//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loops for both modes:
//! - Document mode fetches every page, extracts its content and media, and
//!   writes one Word document
//! - Listing mode records every reachable URL and writes a CSV inventory
//!
//! A run is sequential: fetches happen one at a time, and the only suspension
//! points are network requests, media extraction and the courtesy delay.

use crate::config::{validate, CrawlConfig};
use crate::crawler::extract::{extract_links, extract_page, PageContent};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::frontier::{Frontier, FrontierEntry};
use crate::crawler::media::{MediaExtractor, TesseractOcr};
use crate::crawler::sanitize::NO_TITLE;
use crate::output::{
    artifact_path, write_artifact, DocumentWriter, InventoryWriter, OutputWriter, PageRecord,
    DOCUMENT_PREFIX, INVENTORY_PREFIX,
};
use crate::state::{ProgressSink, ProgressState, RunStatus};
use crate::url::{normalize_url, NormalizedUrl};
use crate::ScribeError;
use chrono::Local;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use url::Url;

/// Drives one crawl run
///
/// A `Crawler` is single-use: once a run reaches a terminal status, starting
/// another one fails with [`ScribeError::InvalidTransition`].
pub struct Crawler {
    config: CrawlConfig,
    client: Client,
    ocr: Option<TesseractOcr>,
    cancel: CancellationToken,
    status: RunStatus,
}

impl Crawler {
    /// Creates a crawler for the given configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to run
    /// * `Err(ScribeError::InvalidUrl)` - The start URL cannot be normalized
    /// * `Err(ScribeError)` - Invalid configuration or HTTP client setup failure
    pub fn new(config: CrawlConfig) -> Result<Self, ScribeError> {
        normalize_url(&config.start_url)?;
        validate(&config)?;

        let client = build_http_client(&config.fetch)?;

        let ocr = if config.enable_ocr {
            match TesseractOcr::detect(config.request_timeout()) {
                Ok(ocr) => Some(ocr),
                Err(e) => {
                    tracing::warn!("Image text recognition requested but unavailable: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Ok(Self {
            config,
            client,
            ocr,
            cancel: CancellationToken::new(),
            status: RunStatus::Idle,
        })
    }

    /// Replaces the cancellation token checked before every page
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Replaces the detected recognition backend; `None` disables it
    pub fn with_ocr_backend(mut self, ocr: Option<TesseractOcr>) -> Self {
        self.ocr = ocr;
        self
    }

    /// Token that cancels this crawler's run
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Crawls in document mode and writes the export to `path`
    pub async fn run_document<P>(&mut self, path: &Path, progress: &P) -> Result<PathBuf, ScribeError>
    where
        P: ProgressSink + ?Sized,
    {
        self.transition(RunStatus::Running)?;
        tracing::info!("Starting document crawl of {}", self.config.start_url);

        let result = match self.document_pass(progress).await {
            Ok(writer) => write_artifact(&writer, path)
                .map(|_| path.to_path_buf())
                .map_err(ScribeError::from),
            Err(e) => Err(e),
        };

        self.finish(result)
    }

    /// Crawls in document mode and returns the laid-out document unwritten
    pub async fn crawl_document<P>(&mut self, progress: &P) -> Result<DocumentWriter, ScribeError>
    where
        P: ProgressSink + ?Sized,
    {
        self.transition(RunStatus::Running)?;
        tracing::info!("Starting document crawl of {}", self.config.start_url);

        let result = self.document_pass(progress).await;
        self.finish(result)
    }

    /// Crawls in listing mode and writes the inventory to `path`
    pub async fn run_listing<P>(&mut self, path: &Path, progress: &P) -> Result<PathBuf, ScribeError>
    where
        P: ProgressSink + ?Sized,
    {
        self.transition(RunStatus::Running)?;
        tracing::info!("Starting URL inventory of {}", self.config.start_url);

        let result = match self.inventory_pass(progress, true).await {
            Ok(urls) => {
                let mut writer = InventoryWriter::new();
                for url in &urls {
                    writer.record_url(url);
                }
                write_artifact(&writer, path)
                    .map(|_| path.to_path_buf())
                    .map_err(ScribeError::from)
            }
            Err(e) => Err(e),
        };

        self.finish(result)
    }

    /// Returns every reachable in-scope page URL in visit order, writing nothing
    ///
    /// Unlike the listing inventory, PDF links are left out.
    pub async fn collect_urls(&mut self) -> Result<Vec<NormalizedUrl>, ScribeError> {
        self.transition(RunStatus::Running)?;
        let result = self.inventory_pass(&crate::state::NoProgress, false).await;
        self.finish(result)
    }

    async fn document_pass<P>(&self, progress: &P) -> Result<DocumentWriter, ScribeError>
    where
        P: ProgressSink + ?Sized,
    {
        let mut frontier = self.frontier()?;
        let media = MediaExtractor::new(
            self.client.clone(),
            self.config.enable_ocr,
            self.config.enable_pdf,
            self.ocr.clone(),
        );
        let mut writer = DocumentWriter::new();
        let mut done: u64 = 0;
        let start_time = Instant::now();

        while !frontier.is_empty() {
            self.check_cancelled(done)?;

            let Some(FrontierEntry { request, url }) = frontier.next() else {
                break;
            };

            let page = match fetch_page(&self.client, request.as_str()).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", url, e);
                    continue;
                }
            };
            log_redirect(&request, &page.final_url);

            let content = match extract_page(&page.body, &request) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("Failed to extract content from {}: {}", url, e);
                    PageContent {
                        title: NO_TITLE.to_string(),
                        ..PageContent::default()
                    }
                }
            };

            let ocr = media.image_texts(&content.image_urls).await;
            let pdf_texts = media.pdf_texts(&content.pdf_urls).await;

            let record = PageRecord {
                url,
                title: content.title,
                description: content.description,
                blocks: content.blocks,
                ocr,
                pdf_texts,
                links: content.links,
            };
            writer.add_page(&record);

            let pushed = frontier.discover(&record.links, false);
            done += 1;
            progress.report(ProgressState::new(done, frontier.len()));

            tracing::info!(
                "[{}] {} ({} blocks, {} new links, {})",
                done,
                record.url,
                record.blocks.len(),
                pushed,
                page.encoding
            );

            self.pause(self.config.page_delay()).await;
        }

        tracing::info!(
            "Document crawl finished: {} pages in {:?}",
            done,
            start_time.elapsed()
        );
        Ok(writer)
    }

    /// Listing traversal: every popped URL is recorded and counted before it
    /// is fetched, so unreachable URLs still appear in the inventory
    ///
    /// With `allow_pdf` unset, PDF links are never queued.
    async fn inventory_pass<P>(
        &self,
        progress: &P,
        allow_pdf: bool,
    ) -> Result<Vec<NormalizedUrl>, ScribeError>
    where
        P: ProgressSink + ?Sized,
    {
        let mut frontier = self.frontier()?;
        let mut visited = Vec::new();
        let mut done: u64 = 0;
        let start_time = Instant::now();

        while !frontier.is_empty() {
            self.check_cancelled(done)?;

            let Some(FrontierEntry { request, url }) = frontier.next() else {
                break;
            };

            visited.push(url.clone());
            done += 1;
            progress.report(ProgressState::new(done, frontier.len()));
            tracing::info!("[{}] {}", done, url);

            // A PDF has no links to follow
            if url.is_pdf() {
                continue;
            }

            let page = match fetch_page(&self.client, request.as_str()).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!("Could not fetch {}: {}", url, e);
                    continue;
                }
            };
            log_redirect(&request, &page.final_url);

            let links = match extract_links(&page.body, &request) {
                Ok(links) => links,
                Err(e) => {
                    tracing::warn!("Failed to extract links from {}: {}", url, e);
                    Vec::new()
                }
            };
            let pushed = frontier.discover(&links, allow_pdf);
            tracing::debug!("{} new links from {}", pushed, url);

            self.pause(self.config.listing_page_delay()).await;
        }

        tracing::info!(
            "URL inventory finished: {} URLs in {:?}",
            done,
            start_time.elapsed()
        );
        Ok(visited)
    }

    fn frontier(&self) -> Result<Frontier, ScribeError> {
        Ok(Frontier::new(
            &self.config.start_url,
            &self.config.exclude_paths,
            &self.config.include_only_prefixes,
        )?)
    }

    fn check_cancelled(&self, pages: u64) -> Result<(), ScribeError> {
        if self.cancel.is_cancelled() {
            tracing::info!("Crawl cancelled after {} pages", pages);
            return Err(ScribeError::Cancelled { pages });
        }
        Ok(())
    }

    /// Sleeps for the courtesy delay, waking early on cancellation
    async fn pause(&self, delay: Duration) {
        if delay.is_zero() {
            return;
        }
        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            _ = self.cancel.cancelled() => {}
        }
    }

    fn transition(&mut self, next: RunStatus) -> Result<(), ScribeError> {
        if !self.status.can_transition_to(next) {
            return Err(ScribeError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        tracing::debug!("Run status {} -> {}", self.status, next);
        self.status = next;
        Ok(())
    }

    /// Moves the run to its terminal status according to `result`
    fn finish<T>(&mut self, result: Result<T, ScribeError>) -> Result<T, ScribeError> {
        let next = match &result {
            Ok(_) => RunStatus::Completed,
            Err(ScribeError::Cancelled { .. }) => RunStatus::Cancelled,
            Err(e) => {
                tracing::error!("Crawl failed: {}", e);
                RunStatus::Failed
            }
        };
        self.transition(next)?;
        result
    }
}

/// Logs a followed redirect; links on the page still resolve against `request`
fn log_redirect(request: &Url, final_url: &Url) {
    if request != final_url {
        tracing::debug!("{} redirected to {}", request, final_url);
    }
}

/// Runs a document crawl and writes a timestamped `.docx` into the
/// configured output directory
///
/// # Example
///
/// ```no_run
/// use sitescribe::{run_document_crawl, CrawlConfig, ProgressState};
///
/// # async fn demo() -> sitescribe::Result<()> {
/// let config = CrawlConfig::new("https://example.com/");
/// let path = run_document_crawl(config, &|p: ProgressState| {
///     println!("{}/{}", p.done, p.total);
/// })
/// .await?;
/// println!("wrote {}", path.display());
/// # Ok(())
/// # }
/// ```
pub async fn run_document_crawl<P>(config: CrawlConfig, progress: &P) -> Result<PathBuf, ScribeError>
where
    P: ProgressSink + ?Sized,
{
    let path = artifact_path(
        &config.output.directory,
        DOCUMENT_PREFIX,
        DocumentWriter::new().extension(),
        Local::now(),
    );
    run_document_crawl_to(config, &path, progress).await
}

/// Runs a document crawl and writes the export to `path`
pub async fn run_document_crawl_to<P>(
    config: CrawlConfig,
    path: &Path,
    progress: &P,
) -> Result<PathBuf, ScribeError>
where
    P: ProgressSink + ?Sized,
{
    Crawler::new(config)?.run_document(path, progress).await
}

/// Runs a listing crawl and writes a timestamped CSV inventory into the
/// configured output directory
pub async fn run_listing_crawl<P>(config: CrawlConfig, progress: &P) -> Result<PathBuf, ScribeError>
where
    P: ProgressSink + ?Sized,
{
    let path = artifact_path(
        &config.output.directory,
        INVENTORY_PREFIX,
        InventoryWriter::new().extension(),
        Local::now(),
    );
    run_listing_crawl_to(config, &path, progress).await
}

/// Runs a listing crawl and writes the inventory to `path`
pub async fn run_listing_crawl_to<P>(
    config: CrawlConfig,
    path: &Path,
    progress: &P,
) -> Result<PathBuf, ScribeError>
where
    P: ProgressSink + ?Sized,
{
    Crawler::new(config)?.run_listing(path, progress).await
}
