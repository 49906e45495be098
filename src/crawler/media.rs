//! Optional media extraction: text recognition on images, text from PDFs
//!
//! Both extractors work per item and never fail the page: a broken image or
//! PDF is logged and skipped.

use crate::crawler::fetcher::{fetch_bytes, FetchError};
use crate::crawler::sanitize::clean_text;
use reqwest::Client;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Recognition languages: Japanese plus English
pub const OCR_LANGUAGES: &str = "jpn+eng";

/// Name of the recognition binary looked up on `PATH`
pub const TESSERACT_BINARY: &str = "tesseract";

/// Errors from the media extractors
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("OCR backend unavailable: {0}")]
    OcrUnavailable(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Text recognition failed for {url}: {message}")]
    Recognition { url: String, message: String },

    #[error("PDF extraction failed for {url}: {message}")]
    Pdf { url: String, message: String },
}

/// Text recognition through an installed `tesseract` binary
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    binary: PathBuf,
    languages: String,
    timeout: Duration,
}

impl TesseractOcr {
    /// Locates `tesseract` on `PATH`
    pub fn detect(timeout: Duration) -> Result<Self, MediaError> {
        Self::locate(TESSERACT_BINARY, timeout)
    }

    /// Locates a recognition binary by name or path
    pub fn locate(binary: &str, timeout: Duration) -> Result<Self, MediaError> {
        let binary = which::which(binary)
            .map_err(|e| MediaError::OcrUnavailable(format!("{}: {}", binary, e)))?;

        Ok(Self {
            binary,
            languages: OCR_LANGUAGES.to_string(),
            timeout,
        })
    }

    /// Runs recognition on encoded image bytes and returns the trimmed text
    pub async fn recognize(&self, url: &str, image: &[u8]) -> Result<String, MediaError> {
        let failure = |message: String| MediaError::Recognition {
            url: url.to_string(),
            message,
        };

        let mut child = Command::new(&self.binary)
            .args(["stdin", "stdout", "-l", self.languages.as_str()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| failure(e.to_string()))?;

        // The timeout covers feeding stdin too; a stalled child is killed on drop
        let run = async move {
            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(image).await?;
            }
            let output = child.wait_with_output().await?;
            Ok::<_, std::io::Error>(output)
        };

        let output = tokio::time::timeout(self.timeout, run)
            .await
            .map_err(|_| failure(format!("timed out after {:?}", self.timeout)))?
            .map_err(|e| failure(e.to_string()))?;

        if !output.status.success() {
            return Err(failure(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Result of text recognition over one page's images
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OcrOutcome {
    /// Recognized, non-empty texts in image order
    Texts(Vec<String>),

    /// Recognition was requested but no backend is installed
    Unavailable,
}

/// Runs the enabled media extractors for one page
pub struct MediaExtractor {
    client: Client,
    ocr_enabled: bool,
    pdf_enabled: bool,
    ocr: Option<TesseractOcr>,
}

impl MediaExtractor {
    pub fn new(client: Client, ocr_enabled: bool, pdf_enabled: bool, ocr: Option<TesseractOcr>) -> Self {
        Self {
            client,
            ocr_enabled,
            pdf_enabled,
            ocr,
        }
    }

    /// Recognizes text in every image; `None` when recognition is disabled
    pub async fn image_texts(&self, image_urls: &[String]) -> Option<OcrOutcome> {
        if !self.ocr_enabled {
            return None;
        }

        let Some(ocr) = &self.ocr else {
            return Some(OcrOutcome::Unavailable);
        };

        let mut texts = Vec::new();
        for url in image_urls {
            match self.recognize_image(ocr, url).await {
                Ok(text) if !text.is_empty() => texts.push(text),
                Ok(_) => tracing::debug!("No text recognized in {}", url),
                Err(e) => tracing::warn!("Skipping image {}: {}", url, e),
            }
        }

        Some(OcrOutcome::Texts(texts))
    }

    async fn recognize_image(&self, ocr: &TesseractOcr, url: &str) -> Result<String, MediaError> {
        let bytes = fetch_bytes(&self.client, url).await?;
        let text = ocr.recognize(url, &bytes).await?;
        Ok(clean_text(&text))
    }

    /// Extracts text from every linked PDF; empty when PDF extraction is disabled
    pub async fn pdf_texts(&self, pdf_urls: &[String]) -> Vec<String> {
        if !self.pdf_enabled {
            return Vec::new();
        }

        let mut texts = Vec::new();
        for url in pdf_urls {
            match self.extract_pdf(url).await {
                Ok(text) if !text.is_empty() => texts.push(text),
                Ok(_) => tracing::debug!("No text in PDF {}", url),
                Err(e) => tracing::warn!("Skipping PDF {}: {}", url, e),
            }
        }

        texts
    }

    async fn extract_pdf(&self, url: &str) -> Result<String, MediaError> {
        let bytes = fetch_bytes(&self.client, url).await?;
        let text = extract_pdf_text(url, bytes).await?;
        Ok(clean_text(text.trim()))
    }
}

/// Extracts the concatenated text of every page of a PDF document
///
/// Parsing runs on the blocking pool; a malformed document that makes the
/// parser panic is reported as an error like any other.
pub async fn extract_pdf_text(url: &str, bytes: Vec<u8>) -> Result<String, MediaError> {
    let failure = |message: String| MediaError::Pdf {
        url: url.to_string(),
        message,
    };

    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| failure(e.to_string()))?
        .map_err(|e| failure(e.to_string()))
}
